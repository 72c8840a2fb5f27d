use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::bundle::CustomerBundle;
use crate::domain::cart::AbandonedCart;
use crate::domain::customer::Customer;
use crate::domain::order::{Order, OrderStatus};
use crate::domain::ticket::Ticket;
use crate::theme::Theme;

/// Presentation key for a timeline entry. The rendering layer maps these to
/// icons and colors; the engine never carries presentation data itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineCategory {
    Account,
    Order,
    Payment,
    Refund,
    Email,
    Cart,
    Recovery,
    Attendance,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub label: String,
    pub detail: Option<String>,
    /// Timestamp shown to the operator.
    pub timestamp: DateTime<Utc>,
    /// Sort key. Differs from `timestamp` only by the synthetic offsets that
    /// keep placed/confirmed/refunded entries in causal order when they share
    /// the order's creation time.
    pub sort_date: DateTime<Utc>,
    pub category: TimelineCategory,
}

impl TimelineEntry {
    fn at(
        label: String,
        detail: Option<String>,
        timestamp: DateTime<Utc>,
        category: TimelineCategory,
    ) -> Self {
        Self { label, detail, timestamp, sort_date: timestamp, category }
    }
}

/// Merge a customer's whole history into one chronologically sorted list of
/// heterogeneous lifecycle events. Total over well-typed input: malformed or
/// absent optional fields suppress their entry instead of failing.
pub fn build_timeline(bundle: &CustomerBundle, theme: &Theme) -> Vec<TimelineEntry> {
    let mut entries = Vec::new();

    entries.push(creation_entry(&bundle.customer, theme));
    for cart in &bundle.carts {
        push_cart_entries(&mut entries, cart, theme);
    }
    for order in &bundle.orders {
        push_order_entries(&mut entries, order, theme);
    }
    for ticket in &bundle.tickets {
        push_ticket_entry(&mut entries, ticket, theme);
    }

    entries.sort_by_key(|entry| entry.sort_date);
    entries
}

fn creation_entry(customer: &Customer, theme: &Theme) -> TimelineEntry {
    let wording = &theme.timeline;
    let (label, detail) = if customer.acquired_via_popup() {
        (wording.joined_via_popup.clone(), Some(customer.email.clone()))
    } else if customer.total_orders == 0 {
        (wording.still_discovering.clone(), Some("No orders yet".to_string()))
    } else {
        (wording.joined.clone(), Some(customer.email.clone()))
    };

    TimelineEntry::at(label, detail, customer.created_at, TimelineCategory::Account)
}

fn push_cart_entries(entries: &mut Vec<TimelineEntry>, cart: &AbandonedCart, theme: &Theme) {
    let wording = &theme.timeline;
    entries.push(TimelineEntry::at(
        wording.cart_abandoned.clone(),
        Some(format!("{} item(s), {} left unpaid", cart.item_count(), cart.subtotal)),
        cart.created_at,
        TimelineCategory::Cart,
    ));

    // Recovery gets its own terminal entry; expiry intentionally does not.
    if cart.is_recovered() {
        if let Some(recovered_at) = cart.recovered_at {
            entries.push(TimelineEntry::at(
                wording.cart_recovered.clone(),
                Some(format!("{} recovered", cart.subtotal)),
                recovered_at,
                TimelineCategory::Recovery,
            ));
        }
    }
}

fn push_order_entries(entries: &mut Vec<TimelineEntry>, order: &Order, theme: &Theme) {
    let wording = &theme.timeline;
    entries.push(TimelineEntry::at(
        wording.order_placed.clone(),
        Some(format!("{} ({} {})", order.number, order.total, order.currency)),
        order.created_at,
        TimelineCategory::Order,
    ));

    if order.status == OrderStatus::Completed {
        let mut entry = TimelineEntry::at(
            wording.payment_confirmed.clone(),
            Some(order.payment_method.clone()),
            order.created_at,
            TimelineCategory::Payment,
        );
        entry.sort_date = order.created_at + TimeDelta::seconds(1);
        entries.push(entry);
    }

    if order.status == OrderStatus::Refunded {
        let mut entry = TimelineEntry::at(
            wording.order_refunded.clone(),
            Some(format!("{} {} returned", order.total, order.currency)),
            order.created_at,
            TimelineCategory::Refund,
        );
        entry.sort_date = order.created_at + TimeDelta::seconds(2);
        entries.push(entry);
    }

    if let Some(entry) = email_entry(order, theme) {
        entries.push(entry);
    }
}

/// Email entries use the audit's own timestamp, not the order's. An audit
/// without a usable timestamp is suppressed.
fn email_entry(order: &Order, theme: &Theme) -> Option<TimelineEntry> {
    let audit = order.email_audit.as_ref()?;
    let wording = &theme.timeline;

    if audit.email_sent {
        let sent_at = audit.email_sent_at?;
        return Some(TimelineEntry::at(
            wording.email_sent.clone(),
            Some(format!("for {}", order.number)),
            sent_at,
            TimelineCategory::Email,
        ));
    }

    let error = audit.email_error.as_ref()?;
    let attempted_at = audit.email_attempted_at?;
    Some(TimelineEntry::at(
        wording.email_failed.clone(),
        Some(error.clone()),
        attempted_at,
        TimelineCategory::Email,
    ))
}

fn push_ticket_entry(entries: &mut Vec<TimelineEntry>, ticket: &Ticket, theme: &Theme) {
    let Some(scanned_at) = ticket.attended_at() else {
        return;
    };

    let detail = match (&ticket.event, &ticket.scanned_by) {
        (Some(event), Some(scanned_by)) => format!("{} (by {})", event.name, scanned_by),
        (Some(event), None) => event.name.clone(),
        (None, Some(scanned_by)) => format!("by {}", scanned_by),
        (None, None) => ticket.code.clone(),
    };

    entries.push(TimelineEntry::at(
        theme.timeline.ticket_scanned.clone(),
        Some(detail),
        scanned_at,
        TimelineCategory::Attendance,
    ));
}
