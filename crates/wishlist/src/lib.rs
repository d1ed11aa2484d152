//! Hypercars Wishlist - Reactive in-process wishlist store.
//!
//! The [`WishlistStore`] owns the list of [`WishlistEntry`] values for the
//! lifetime of the process and broadcasts an immutable [`Snapshot`] of the
//! whole list to every subscriber whenever it changes. Entries are keyed on
//! their display name: adding a second entry with an existing name is a silent
//! no-op.
//!
//! # Modules
//!
//! - [`store`] - The store and its snapshot type
//! - [`subscription`] - Per-observer snapshot streams
//! - [`controller`] - UI-facing controller mirroring the latest snapshot
//! - [`cart`] - The cart seam entries are moved into
//!
//! # Example
//!
//! ```rust
//! use futures::StreamExt;
//! use hypercars_core::{Price, WishlistEntry};
//! use hypercars_wishlist::WishlistStore;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let store = WishlistStore::new();
//! let mut updates = store.subscribe().await;
//!
//! store
//!     .add(WishlistEntry::new("p-1", "Chiron", Price::from_amount(5_500_000), ""))
//!     .await;
//!
//! assert!(updates.next().await.unwrap().is_empty());
//! assert_eq!(updates.next().await.unwrap().len(), 1);
//! # }
//! ```
//!
//! [`WishlistEntry`]: hypercars_core::WishlistEntry

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod controller;
pub mod error;
pub mod store;
pub mod subscription;

pub use cart::{CartBuffer, CartSink};
pub use controller::WishlistController;
pub use error::{CartError, ControllerError};
pub use store::{Snapshot, WishlistStore};
pub use subscription::WishlistSubscription;
