use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerId(pub Uuid);

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub nickname: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub created_at: DateTime<Utc>,
    pub first_order_at: Option<DateTime<Utc>>,
    pub last_order_at: Option<DateTime<Utc>>,
    /// Maintained by the storage layer; authoritative for segment math even
    /// when the fetched order list is a filtered or paginated subset.
    pub total_orders: u32,
    /// Tri-state: `Some(true)` opted in, `Some(false)` opted out, `None` unknown.
    pub marketing_consent: Option<bool>,
    pub source: Option<String>,
    pub notes: Option<String>,
}

impl Customer {
    pub fn display_name(&self) -> String {
        match &self.nickname {
            Some(nickname) if !nickname.is_empty() => nickname.clone(),
            _ => format!("{} {}", self.first_name, self.last_name),
        }
    }

    pub fn acquired_via_popup(&self) -> bool {
        self.source.as_deref().is_some_and(|source| source.eq_ignore_ascii_case("popup"))
    }
}
