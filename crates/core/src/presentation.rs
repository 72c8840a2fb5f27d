//! Display-hint tables owned by the rendering side of the crate boundary.
//! Domain enums stay free of icons and colors; renderers look hints up here
//! by enum tag.

use crate::recovery::roadmap::StepStatus;
use crate::recovery::urgency::UrgencyLevel;
use crate::segment::Segment;
use crate::timeline::TimelineCategory;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayHint {
    pub icon: &'static str,
    pub color: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UrgencyHint {
    pub label: &'static str,
    pub color: &'static str,
    pub pulse: bool,
}

pub fn segment_hint(segment: Segment) -> DisplayHint {
    match segment {
        Segment::Discoverer => DisplayHint { icon: "compass", color: "slate" },
        Segment::NewFan => DisplayHint { icon: "sparkles", color: "sky" },
        Segment::Fan => DisplayHint { icon: "heart", color: "violet" },
        Segment::Superfan => DisplayHint { icon: "crown", color: "amber" },
    }
}

pub fn urgency_hint(level: UrgencyLevel) -> UrgencyHint {
    match level {
        UrgencyLevel::Recovered => UrgencyHint { label: "Recovered", color: "green", pulse: false },
        UrgencyLevel::Hot => UrgencyHint { label: "Hot", color: "red", pulse: true },
        UrgencyLevel::Warm => UrgencyHint { label: "Warm", color: "orange", pulse: true },
        UrgencyLevel::Cooling => UrgencyHint { label: "Cooling", color: "blue", pulse: false },
    }
}

pub fn category_hint(category: TimelineCategory) -> DisplayHint {
    match category {
        TimelineCategory::Account => DisplayHint { icon: "user-plus", color: "slate" },
        TimelineCategory::Order => DisplayHint { icon: "shopping-bag", color: "sky" },
        TimelineCategory::Payment => DisplayHint { icon: "credit-card", color: "green" },
        TimelineCategory::Refund => DisplayHint { icon: "rotate-ccw", color: "red" },
        TimelineCategory::Email => DisplayHint { icon: "mail", color: "violet" },
        TimelineCategory::Cart => DisplayHint { icon: "shopping-cart", color: "orange" },
        TimelineCategory::Recovery => DisplayHint { icon: "party-popper", color: "green" },
        TimelineCategory::Attendance => DisplayHint { icon: "ticket", color: "amber" },
    }
}

pub fn step_status_hint(status: StepStatus) -> DisplayHint {
    match status {
        StepStatus::Completed => DisplayHint { icon: "check-circle", color: "green" },
        StepStatus::Active => DisplayHint { icon: "bell-ring", color: "orange" },
        StepStatus::Upcoming => DisplayHint { icon: "clock", color: "slate" },
        StepStatus::Skipped => DisplayHint { icon: "skip-forward", color: "slate" },
    }
}
