pub mod carts;
pub mod export;
pub mod profile;
pub mod themes;
pub mod timeline;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use stagepass_core::{validate_bundle, CustomerBundle};
use tracing::info;

/// Read a customer bundle (customer + orders + tickets + carts) as exported
/// by the data-access layer. Invariant violations in the joined data fail
/// here, before any derivation runs.
pub fn load_bundle(path: &Path) -> Result<CustomerBundle> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("could not read bundle file `{}`", path.display()))?;
    let bundle: CustomerBundle = serde_json::from_str(&raw)
        .with_context(|| format!("could not parse bundle file `{}`", path.display()))?;
    validate_bundle(&bundle)
        .with_context(|| format!("bundle file `{}` violates a domain invariant", path.display()))?;
    info!(
        customer = %bundle.customer.email,
        orders = bundle.orders.len(),
        tickets = bundle.tickets.len(),
        carts = bundle.carts.len(),
        "bundle loaded"
    );
    Ok(bundle)
}
