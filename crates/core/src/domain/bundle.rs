use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::cart::{AbandonedCart, CartStatus};
use crate::domain::customer::Customer;
use crate::domain::event::validate_slug;
use crate::domain::order::Order;
use crate::domain::ticket::Ticket;
use crate::errors::DomainError;

/// One customer plus everything the data-access layer joined for them. This
/// is the unit of work for every derivation in this crate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CustomerBundle {
    pub customer: Customer,
    pub orders: Vec<Order>,
    pub tickets: Vec<Ticket>,
    pub carts: Vec<AbandonedCart>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerTotals {
    /// Authoritative lifetime order count from the customer record, not the
    /// possibly filtered order list.
    pub total_orders: u32,
    pub completed_orders: u32,
    pub total_spent: Decimal,
    pub average_order_value: Decimal,
}

impl CustomerTotals {
    pub fn from_bundle(bundle: &CustomerBundle) -> Self {
        let completed: Vec<&Order> =
            bundle.orders.iter().filter(|order| order.counts_toward_spend()).collect();
        let completed_orders = completed.len() as u32;
        let total_spent: Decimal = completed.iter().map(|order| order.total).sum();
        let average_order_value = if completed_orders == 0 {
            Decimal::ZERO
        } else {
            total_spent / Decimal::from(completed_orders)
        };

        Self {
            total_orders: bundle.customer.total_orders,
            completed_orders,
            total_spent,
            average_order_value,
        }
    }
}

/// Explicit precondition check for bundles handed over by the data-access
/// layer. The pure derivations stay total and never call this; callers that
/// want loud failures on malformed joins opt in.
pub fn validate_bundle(bundle: &CustomerBundle) -> Result<(), DomainError> {
    if let (Some(first), Some(last)) =
        (bundle.customer.first_order_at, bundle.customer.last_order_at)
    {
        if first > last {
            return Err(DomainError::InvariantViolation(format!(
                "customer {} has first_order_at after last_order_at",
                bundle.customer.email
            )));
        }
    }

    for order in &bundle.orders {
        if order.total.is_sign_negative() {
            return Err(DomainError::InvariantViolation(format!(
                "order {} has a negative total",
                order.number
            )));
        }
        if let Some(event) = &order.event {
            validate_slug(&event.slug)?;
        }
    }

    for ticket in &bundle.tickets {
        if let Some(event) = &ticket.event {
            validate_slug(&event.slug)?;
        }
    }

    for cart in &bundle.carts {
        if cart.status == CartStatus::Recovered && cart.recovered_at.is_none() {
            return Err(DomainError::InvariantViolation(
                "recovered cart is missing recovered_at".to_string(),
            ));
        }
        if let Some(recovered_at) = cart.recovered_at {
            if recovered_at < cart.created_at {
                return Err(DomainError::InvariantViolation(
                    "cart recovered_at precedes created_at".to_string(),
                ));
            }
        }
        if let Some(event) = &cart.event {
            validate_slug(&event.slug)?;
        }
    }

    Ok(())
}
