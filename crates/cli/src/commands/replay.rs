//! Replay a wishlist script against a fresh store.
//!
//! Every snapshot the store publishes is logged as it arrives. At the end
//! the final wishlist and cart are either logged or printed as JSON.

use std::path::Path;
use std::sync::Arc;

use futures::StreamExt;
use hypercars_core::{CartEntry, CurrencyCode, ProductName};
use hypercars_wishlist::{CartBuffer, Snapshot, WishlistController, WishlistStore};
use serde::Serialize;
use tracing::{info, warn};

use crate::config::CliConfig;
use crate::script::{Script, Step};

/// Result of replaying a script.
#[derive(Debug)]
pub struct ReplayOutcome {
    /// Wishlist after the last step.
    pub wishlist: Snapshot,
    /// Cart after the last step.
    pub cart: Vec<CartEntry>,
    /// Snapshots observed by the logging subscriber, including the initial one.
    pub snapshots_seen: usize,
    /// Steps that had no effect or failed.
    pub skipped_steps: usize,
}

#[derive(Serialize)]
struct Report<'a> {
    wishlist: &'a [hypercars_core::WishlistEntry],
    cart: &'a [CartEntry],
}

/// Load a script file, replay it and report the result.
///
/// # Errors
///
/// Returns an error if the script cannot be loaded or the report cannot be
/// serialized.
pub async fn run(
    path: &Path,
    json: bool,
    config: &CliConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let script = Script::load(path).await?;
    info!(path = %path.display(), steps = script.steps.len(), "Loaded script");

    for problem in script.validate() {
        warn!("{problem}");
    }

    let outcome = replay(script, config.currency).await;

    info!(
        snapshots = outcome.snapshots_seen,
        skipped = outcome.skipped_steps,
        "Replay complete"
    );

    if json {
        let report = Report {
            wishlist: outcome.wishlist.as_slice(),
            cart: &outcome.cart,
        };
        print_json(&serde_json::to_string_pretty(&report)?);
    } else {
        info!("Wishlist ({} entries):", outcome.wishlist.len());
        for entry in outcome.wishlist.as_slice() {
            info!("  {} - {}", entry.name, entry.price);
        }
        info!("Cart ({} lines):", outcome.cart.len());
        for line in &outcome.cart {
            info!("  {} x{} - {} [{}]", line.name, line.quantity, line.price, line.id);
        }
    }

    Ok(())
}

#[allow(clippy::print_stdout)]
fn print_json(json: &str) {
    println!("{json}");
}

/// Apply every step of `script` to a fresh store and cart.
pub async fn replay(script: Script, currency: CurrencyCode) -> ReplayOutcome {
    let store = WishlistStore::new();
    let cart = CartBuffer::new();
    let controller = WishlistController::new(store.clone(), Arc::new(cart.clone())).await;

    let mut updates = store.subscribe().await;
    let logger = tokio::spawn(async move {
        let mut seen = 0_usize;
        while let Some(snapshot) = updates.next().await {
            let names: Vec<&str> = snapshot.names().map(ProductName::as_str).collect();
            info!(seq = seen, entries = ?names, "Wishlist snapshot");
            seen += 1;
        }
        seen
    });

    let mut skipped_steps = 0;
    for (i, step) in script.steps.iter().enumerate() {
        if !apply(&controller, step, currency).await {
            info!(step = i + 1, op = ?step, "Step had no effect");
            skipped_steps += 1;
        }
    }

    let wishlist = store.snapshot().await;

    // The logging stream ends once every store handle is gone.
    drop(controller);
    drop(store);
    let snapshots_seen = logger.await.unwrap_or_else(|e| {
        warn!(error = %e, "Snapshot logger stopped early");
        0
    });

    ReplayOutcome {
        wishlist,
        cart: cart.entries().await,
        snapshots_seen,
        skipped_steps,
    }
}

/// Apply one step. Returns `false` if it changed nothing.
async fn apply(controller: &WishlistController, step: &Step, currency: CurrencyCode) -> bool {
    match step {
        Step::Add { .. } => match step.to_entry(currency) {
            Some(entry) => controller.add(entry).await,
            None => false,
        },
        Step::Remove { name } => {
            let name = ProductName::from(name.as_str());
            controller.store().remove_by_name(&name).await > 0
        }
        Step::MoveToCart { name } => {
            match controller.move_to_cart(&ProductName::from(name.as_str())).await {
                Ok(_) => true,
                Err(e) => {
                    warn!(error = %e, "Move to cart failed");
                    false
                }
            }
        }
    }
}
