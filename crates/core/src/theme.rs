use serde::{Deserialize, Serialize};

use crate::segment::Segment;

/// Wording table for one admin view. The source product shipped three
/// near-identical page variants that differed only in labels and segment
/// naming; those variants collapse into one engine parameterized by a theme.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub key: String,
    pub segment_names: SegmentNames,
    pub timeline: TimelineWording,
    pub roadmap: RoadmapWording,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentNames {
    pub discoverer: String,
    pub new_fan: String,
    pub fan: String,
    pub superfan: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineWording {
    pub joined: String,
    pub joined_via_popup: String,
    pub still_discovering: String,
    pub order_placed: String,
    pub payment_confirmed: String,
    pub order_refunded: String,
    pub email_sent: String,
    pub email_failed: String,
    pub cart_abandoned: String,
    pub cart_recovered: String,
    pub ticket_scanned: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapWording {
    pub abandoned: String,
    pub first_email: String,
    pub second_email: String,
    pub final_reminder: String,
    pub outcome: String,
}

impl Theme {
    pub fn journey() -> Self {
        Self {
            key: "journey".to_string(),
            segment_names: SegmentNames {
                discoverer: "Discoverer".to_string(),
                new_fan: "New Fan".to_string(),
                fan: "Fan".to_string(),
                superfan: "Superfan".to_string(),
            },
            timeline: TimelineWording {
                joined: "Joined the fanbase".to_string(),
                joined_via_popup: "Signed up through the popup".to_string(),
                still_discovering: "Started discovering".to_string(),
                order_placed: "Order placed".to_string(),
                payment_confirmed: "Payment confirmed".to_string(),
                order_refunded: "Order refunded".to_string(),
                email_sent: "Confirmation email delivered".to_string(),
                email_failed: "Confirmation email failed".to_string(),
                cart_abandoned: "Left a cart behind".to_string(),
                cart_recovered: "Came back for the cart".to_string(),
                ticket_scanned: "Scanned at the door".to_string(),
            },
            roadmap: RoadmapWording {
                abandoned: "Cart abandoned".to_string(),
                first_email: "Reminder email #1".to_string(),
                second_email: "Reminder email #2".to_string(),
                final_reminder: "Final reminder".to_string(),
                outcome: "Outcome".to_string(),
            },
        }
    }

    pub fn crm() -> Self {
        Self {
            key: "crm".to_string(),
            segment_names: SegmentNames {
                discoverer: "Lead".to_string(),
                new_fan: "New".to_string(),
                fan: "Returning".to_string(),
                superfan: "VIP".to_string(),
            },
            timeline: TimelineWording {
                joined: "Account created".to_string(),
                joined_via_popup: "Captured via popup".to_string(),
                still_discovering: "Lead created".to_string(),
                order_placed: "Order placed".to_string(),
                payment_confirmed: "Payment confirmed".to_string(),
                order_refunded: "Order refunded".to_string(),
                email_sent: "Order email sent".to_string(),
                email_failed: "Order email failed".to_string(),
                cart_abandoned: "Cart abandoned".to_string(),
                cart_recovered: "Cart recovered".to_string(),
                ticket_scanned: "Ticket scanned".to_string(),
            },
            roadmap: RoadmapWording {
                abandoned: "Abandoned".to_string(),
                first_email: "Email #1".to_string(),
                second_email: "Email #2".to_string(),
                final_reminder: "Last call".to_string(),
                outcome: "Resolution".to_string(),
            },
        }
    }

    pub fn by_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "journey" => Some(Self::journey()),
            "crm" => Some(Self::crm()),
            _ => None,
        }
    }

    pub fn builtin_keys() -> [&'static str; 2] {
        ["journey", "crm"]
    }

    pub fn segment_name(&self, segment: Segment) -> &str {
        match segment {
            Segment::Discoverer => &self.segment_names.discoverer,
            Segment::NewFan => &self.segment_names.new_fan,
            Segment::Fan => &self.segment_names.fan,
            Segment::Superfan => &self.segment_names.superfan,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::journey()
    }
}
