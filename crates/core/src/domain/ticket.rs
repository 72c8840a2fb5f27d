use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::event::EventRef;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicketId(pub Uuid);

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: TicketId,
    pub code: String,
    pub status: String,
    pub ticket_type: String,
    pub merch_size: Option<String>,
    pub merch_collected: Option<bool>,
    pub scanned_at: Option<DateTime<Utc>>,
    pub scanned_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub event: Option<EventRef>,
}

impl Ticket {
    /// A ticket is attendance evidence only once it was scanned at the door;
    /// the scan timestamp is the evidence.
    pub fn attended_at(&self) -> Option<DateTime<Utc>> {
        self.scanned_at
    }
}
