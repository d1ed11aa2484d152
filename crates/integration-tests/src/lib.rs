//! Integration tests for Hypercars.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p hypercars-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `wishlist_store` - Store invariants under sequential and concurrent use
//! - `wishlist_controller` - Controller mirroring and cart transfer
//!
//! This library holds the fixtures shared by the test files.

use std::time::Duration;

use futures::StreamExt;
use hypercars_core::{Price, ProductName, WishlistEntry};
use hypercars_wishlist::{Snapshot, WishlistSubscription};

/// How long to wait before deciding a subscription has gone quiet.
pub const QUIET_PERIOD: Duration = Duration::from_millis(50);

/// A wishlist entry for `name`, with a product ID and image derived from it.
#[must_use]
pub fn entry(name: &str, price: i64) -> WishlistEntry {
    let slug = name.to_lowercase().replace(' ', "-");
    WishlistEntry::new(
        format!("p-{slug}"),
        name,
        Price::from_amount(price),
        format!("{slug}.png"),
    )
}

/// Display names of a snapshot, in order.
#[must_use]
pub fn names(snapshot: &Snapshot) -> Vec<String> {
    snapshot.names().map(ProductName::to_string).collect()
}

/// Receive the next snapshot, failing the test if none arrives within a second.
///
/// # Panics
///
/// Panics if the subscription stays silent or has ended.
pub async fn next_snapshot(subscription: &mut WishlistSubscription) -> Snapshot {
    tokio::time::timeout(Duration::from_secs(1), subscription.next())
        .await
        .unwrap_or_else(|_| panic!("no snapshot within a second"))
        .unwrap_or_else(|| panic!("subscription ended"))
}

/// Whether the subscription yields nothing within [`QUIET_PERIOD`].
pub async fn is_quiet(subscription: &mut WishlistSubscription) -> bool {
    tokio::time::timeout(QUIET_PERIOD, subscription.next())
        .await
        .is_err()
}
