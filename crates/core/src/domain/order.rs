use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::event::EventRef;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub Uuid);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Completed,
    Refunded,
    Cancelled,
    Failed,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub name: String,
    pub quantity: u32,
    pub merch_size: Option<String>,
    pub unit_price: Decimal,
}

/// Email-delivery audit fields carried in the order metadata bag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailAudit {
    pub email_sent: bool,
    pub email_sent_at: Option<DateTime<Utc>>,
    pub email_attempted_at: Option<DateTime<Utc>>,
    pub email_error: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub number: String,
    pub status: OrderStatus,
    pub total: Decimal,
    pub currency: String,
    pub payment_method: String,
    pub created_at: DateTime<Utc>,
    pub email_audit: Option<EmailAudit>,
    pub event: Option<EventRef>,
    pub items: Vec<OrderItem>,
}

impl Order {
    /// Only completed orders contribute to lifetime-value aggregation.
    pub fn counts_toward_spend(&self) -> bool {
        self.status == OrderStatus::Completed
    }
}
