use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::UrgencyThresholds;
use crate::domain::cart::AbandonedCart;

/// Coarse follow-up priority bucket for an abandoned cart. Display labels,
/// colors, and the pulse cue live in the presentation table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyLevel {
    Recovered,
    Hot,
    Warm,
    Cooling,
}

/// Recovered status wins regardless of age; everything else buckets by age.
/// Expired carts are not distinguished here and age into Cooling.
pub fn urgency(
    cart: &AbandonedCart,
    now: DateTime<Utc>,
    thresholds: &UrgencyThresholds,
) -> UrgencyLevel {
    if cart.is_recovered() {
        return UrgencyLevel::Recovered;
    }

    let age = cart.age(now);
    if age < thresholds.hot() {
        UrgencyLevel::Hot
    } else if age < thresholds.warm() {
        UrgencyLevel::Warm
    } else {
        UrgencyLevel::Cooling
    }
}
