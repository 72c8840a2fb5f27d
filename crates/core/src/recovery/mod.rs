pub mod roadmap;
pub mod urgency;

pub use roadmap::{build_roadmap, format_countdown, RoadmapStep, StepStatus};
pub use urgency::{urgency, UrgencyLevel};
