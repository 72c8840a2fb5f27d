use chrono::{DateTime, TimeDelta, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::event::EventRef;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CartId(pub Uuid);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CartStatus {
    Abandoned,
    Recovered,
    Expired,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub name: String,
    pub quantity: u32,
    pub merch_size: Option<String>,
    pub unit_price: Decimal,
}

/// A checkout session that collected items and contact info but never
/// completed payment. `notification_count` only increases; `recovered_at`
/// is set exactly once, when the status moves to `recovered`. Only the last
/// `notified_at` survives system-wide, so per-email timestamps are not
/// reconstructible.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AbandonedCart {
    pub id: CartId,
    pub status: CartStatus,
    pub created_at: DateTime<Utc>,
    pub recovered_at: Option<DateTime<Utc>>,
    pub subtotal: Decimal,
    pub notification_count: u32,
    pub notified_at: Option<DateTime<Utc>>,
    pub items: Vec<CartItem>,
    pub event: Option<EventRef>,
}

impl AbandonedCart {
    pub fn age(&self, now: DateTime<Utc>) -> TimeDelta {
        now - self.created_at
    }

    pub fn is_recovered(&self) -> bool {
        self.status == CartStatus::Recovered
    }

    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }
}
