use stagepass_core::{Segment, Theme};

pub fn run() -> String {
    let mut lines = Vec::new();
    for key in Theme::builtin_keys() {
        let Some(theme) = Theme::by_key(key) else {
            continue;
        };
        let names: Vec<&str> =
            Segment::ALL.iter().map(|segment| theme.segment_name(*segment)).collect();
        lines.push(format!("{}: {}", theme.key, names.join(" / ")));
    }
    lines.join("\n")
}
