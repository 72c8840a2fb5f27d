use anyhow::Result;
use stagepass_core::{build_timeline, CustomerBundle, Theme};

pub fn run(bundle: &CustomerBundle, theme: &Theme, json: bool) -> Result<String> {
    let timeline = build_timeline(bundle, theme);

    if json {
        return Ok(serde_json::to_string_pretty(&timeline)?);
    }

    let lines: Vec<String> = timeline
        .iter()
        .map(|entry| match &entry.detail {
            Some(detail) => {
                format!("{}  {}: {}", entry.timestamp.format("%Y-%m-%d %H:%M"), entry.label, detail)
            }
            None => format!("{}  {}", entry.timestamp.format("%Y-%m-%d %H:%M"), entry.label),
        })
        .collect();

    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use stagepass_core::Theme;

    use crate::commands::fixtures;

    use super::run;

    #[test]
    fn text_timeline_lists_events_in_order() {
        let output = run(&fixtures::bundle(), &Theme::journey(), false).expect("timeline output");
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines[0].contains("Joined the fanbase"));
        assert!(lines[1].contains("Order placed"));
        assert!(lines[2].contains("Payment confirmed"));
        assert!(lines[3].contains("Scanned at the door"));
        assert!(lines[4].contains("Left a cart behind"));
    }

    #[test]
    fn json_timeline_round_trips() {
        let output = run(&fixtures::bundle(), &Theme::journey(), true).expect("timeline output");
        let value: serde_json::Value = serde_json::from_str(&output).expect("valid json");
        assert_eq!(value.as_array().expect("array").len(), 5);
    }
}
