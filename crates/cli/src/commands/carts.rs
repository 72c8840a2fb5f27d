use anyhow::Result;
use chrono::{DateTime, Utc};
use stagepass_core::{
    urgency_hint, CustomerBundle, DeterministicLifecycleEngine, LifecycleConfig, LifecycleEngine,
    StepStatus, Theme,
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
        return Ok(serde_json::to_string_pretty(&snapshot.carts)?);
    }

    if snapshot.carts.is_empty() {
        return Ok("no abandoned carts".to_string());
    }

    let mut lines = Vec::new();
    for (cart, insight) in bundle.carts.iter().zip(&snapshot.carts) {
        let hint = urgency_hint(insight.urgency);
        let pulse = if hint.pulse { " (!)" } else { "" };
        lines.push(format!(
            "cart {} — {}{} · {} item(s) · {}",
            cart.id.0,
            hint.label,
            pulse,
            cart.item_count(),
            cart.subtotal
        ));
        for step in &insight.roadmap {
            let glyph = match step.status {
                StepStatus::Completed => "✓",
                StepStatus::Active => "●",
                StepStatus::Upcoming => "○",
                StepStatus::Skipped => "–",
            };
            lines.push(format!("  {glyph} {}: {}", step.label, step.detail));
        }
        lines.push(String::new());
    }
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    Ok(lines.join("\n"))
}
