pub mod config;
pub mod domain;
pub mod engine;
pub mod errors;
pub mod presentation;
pub mod recovery;
pub mod segment;
pub mod theme;
pub mod timeline;

pub use config::{
    ConfigError, ConfigOverrides, LifecycleConfig, LoadOptions, LogFormat, RoadmapSchedule,
    SegmentThresholds, UrgencyThresholds,
};
pub use domain::{
    validate_bundle, AbandonedCart, CartId, CartItem, CartStatus, Customer, CustomerBundle,
    CustomerId, CustomerTotals, EmailAudit, EventRef, Order, OrderId, OrderItem, OrderStatus,
    Ticket, TicketId,
};
pub use engine::{CartInsight, DeterministicLifecycleEngine, LifecycleEngine, LifecycleSnapshot};
pub use errors::DomainError;
pub use presentation::{category_hint, segment_hint, step_status_hint, urgency_hint, DisplayHint, UrgencyHint};
pub use recovery::{build_roadmap, format_countdown, urgency, RoadmapStep, StepStatus, UrgencyLevel};
pub use segment::tiers::{progress, progress_all, ProgressItem, ProgressUnit, TierProgress};
pub use segment::{classify, Segment};
pub use theme::Theme;
pub use timeline::{build_timeline, TimelineCategory, TimelineEntry};
