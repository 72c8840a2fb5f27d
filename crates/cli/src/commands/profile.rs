use anyhow::Result;
use chrono::{DateTime, Utc};
use stagepass_core::{
    CustomerBundle, DeterministicLifecycleEngine, LifecycleConfig, LifecycleEngine, Theme,
};

pub fn run(
    bundle: &CustomerBundle,
    config: &LifecycleConfig,
    theme: &Theme,
    now: DateTime<Utc>,
    json: bool,
) -> Result<String> {
    let engine = DeterministicLifecycleEngine::new(config.clone(), theme.clone());
    let snapshot = engine.snapshot(bundle, now);

    if json {
        return Ok(serde_json::to_string_pretty(&snapshot)?);
    }

    let mut lines = Vec::new();
    lines.push(format!(
        "{} <{}> — {}",
        bundle.customer.display_name(),
        bundle.customer.email,
        snapshot.segment_label
    ));
    lines.push(format!(
        "orders: {} ({} completed fetched) · spent: {} · avg order: {}",
        snapshot.totals.total_orders,
        snapshot.totals.completed_orders,
        snapshot.totals.total_spent,
        snapshot.totals.average_order_value
    ));
    lines.push(String::new());

    for tier in &snapshot.tiers {
        let mark = if tier.unlocked { "x" } else { " " };
        lines.push(format!("[{mark}] {}", theme.segment_name(tier.tier)));
        for item in &tier.items {
            lines.push(format!(
                "      {}: {}/{} ({:.0}%)",
                item.label,
                item.current,
                item.target,
                item.percent()
            ));
        }
    }

    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use stagepass_core::{LifecycleConfig, Theme};

    use crate::commands::fixtures;

    use super::run;

    #[test]
    fn text_profile_names_the_segment_and_ladder() {
        let bundle = fixtures::bundle();
        let now = fixtures::base_time() + chrono::TimeDelta::days(21);
        let output = run(&bundle, &LifecycleConfig::default(), &Theme::journey(), now, false)
            .expect("profile output");

        assert!(output.contains("Sam Reyes <sam@example.com> — Superfan"));
        assert!(output.contains("[x] Superfan"));
        assert!(output.contains("lifetime spend: 200/200 (100%)"));
        assert!(output.contains("orders placed: 1/5 (20%)"));
    }

    #[test]
    fn json_profile_is_valid_json() {
        let bundle = fixtures::bundle();
        let now = fixtures::base_time() + chrono::TimeDelta::days(21);
        let output = run(&bundle, &LifecycleConfig::default(), &Theme::journey(), now, true)
            .expect("profile output");

        let value: serde_json::Value = serde_json::from_str(&output).expect("valid json");
        assert_eq!(value["segment"], "superfan");
    }
}
