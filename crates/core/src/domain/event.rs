use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Minimal event projection joined onto orders, tickets, and carts by the
/// data-access layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRef {
    pub name: String,
    pub slug: String,
    pub date: Option<DateTime<Utc>>,
}

pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--")
        && slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

pub fn validate_slug(slug: &str) -> Result<(), DomainError> {
    if is_valid_slug(slug) {
        Ok(())
    } else {
        Err(DomainError::InvalidSlug(slug.to_string()))
    }
}
