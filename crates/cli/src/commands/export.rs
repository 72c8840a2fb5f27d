use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use stagepass_core::{build_timeline, CustomerBundle, Theme, TimelineEntry};
use tracing::info;

pub fn run(bundle: &CustomerBundle, theme: &Theme, out: &Path) -> Result<String> {
    let timeline = build_timeline(bundle, theme);
    let csv = render_csv(&timeline);
    fs::write(out, &csv)
        .with_context(|| format!("could not write CSV to `{}`", out.display()))?;
    info!(rows = timeline.len(), path = %out.display(), "timeline exported");
    Ok(format!("wrote {} row(s) to {}", timeline.len(), out.display()))
}

fn render_csv(timeline: &[TimelineEntry]) -> String {
    let mut out = String::from("timestamp,category,label,detail\r\n");
    for entry in timeline {
        let category = serde_json::to_value(entry.category)
            .ok()
            .and_then(|value| value.as_str().map(str::to_string))
            .unwrap_or_default();
        out.push_str(&format!(
            "{},{},{},{}\r\n",
            escape(&entry.timestamp.to_rfc3339()),
            escape(&category),
            escape(&entry.label),
            escape(entry.detail.as_deref().unwrap_or(""))
        ));
    }
    out
}

/// RFC 4180 quoting: wrap fields containing commas, quotes, or line breaks
/// and double any embedded quotes.
fn escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
