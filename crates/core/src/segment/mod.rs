pub mod tiers;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::SegmentThresholds;

/// Canonical lifecycle segment. The "lead/new/returning/vip" wording used by
/// some admin views is a theme over these four values, not a second enum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Segment {
    Discoverer,
    NewFan,
    Fan,
    Superfan,
}

impl Segment {
    /// Journey order, entry tier first. Also the order the tier ladder
    /// renders in.
    pub const ALL: [Segment; 4] =
        [Segment::Discoverer, Segment::NewFan, Segment::Fan, Segment::Superfan];

    pub fn key(&self) -> &'static str {
        match self {
            Segment::Discoverer => "discoverer",
            Segment::NewFan => "new_fan",
            Segment::Fan => "fan",
            Segment::Superfan => "superfan",
        }
    }
}

/// Classify a customer from lifetime spend and the authoritative order
/// counter. Rules are evaluated in precedence order, first match wins:
///
/// 1. spend >= superfan_spend OR orders >= superfan_orders -> Superfan
/// 2. orders > 1 -> Fan
/// 3. orders == 0 -> Discoverer
/// 4. orders == 1 -> NewFan
///
/// The spend rule is checked first, so a single high-spend order (or even a
/// zero-order customer with recorded spend) classifies as Superfan.
/// Negative spend is clamped to zero before the rules run.
pub fn classify(total_spent: Decimal, total_orders: u32, thresholds: &SegmentThresholds) -> Segment {
    let spent = total_spent.max(Decimal::ZERO);

    if spent >= thresholds.superfan_spend || total_orders >= thresholds.superfan_orders {
        Segment::Superfan
    } else if total_orders > 1 {
        Segment::Fan
    } else if total_orders == 0 {
        Segment::Discoverer
    } else {
        Segment::NewFan
    }
}
