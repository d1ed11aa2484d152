//! UI-facing wishlist controller.
//!
//! A controller holds a store handle and a cart, keeps a mirror of the latest
//! snapshot for rendering, and forwards user actions. The mirror is a
//! `watch` channel fed by a background task consuming a store subscription;
//! it only promises the latest value, not every intermediate one.

use std::sync::Arc;

use futures::StreamExt;
use hypercars_core::{CartItemId, ProductName, WishlistEntry};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{info, instrument, warn};

use crate::cart::CartSink;
use crate::error::ControllerError;
use crate::store::{Snapshot, WishlistStore};

/// Wishlist controller for one screen or session.
///
/// Dropping the controller stops its mirroring task. The store and cart are
/// shared and outlive it.
pub struct WishlistController {
    store: WishlistStore,
    cart: Arc<dyn CartSink>,
    items: watch::Receiver<Snapshot>,
    mirror: JoinHandle<()>,
}

impl WishlistController {
    /// Create a controller and start mirroring the store.
    ///
    /// Must be called from within a tokio runtime. The mirror is primed with
    /// the store's current snapshot before this returns.
    pub async fn new(store: WishlistStore, cart: Arc<dyn CartSink>) -> Self {
        let mut updates = store.subscribe().await;
        let initial = updates.next().await.unwrap_or_default();
        let (tx, items) = watch::channel(initial);

        let mirror = tokio::spawn(async move {
            while let Some(snapshot) = updates.next().await {
                if tx.send(snapshot).is_err() {
                    break;
                }
            }
        });

        Self {
            store,
            cart,
            items,
            mirror,
        }
    }

    /// The most recently mirrored snapshot.
    #[must_use]
    pub fn items(&self) -> Snapshot {
        self.items.borrow().clone()
    }

    /// A receiver for observing the mirrored snapshot.
    #[must_use]
    pub fn watch(&self) -> watch::Receiver<Snapshot> {
        self.items.clone()
    }

    /// The store this controller forwards to.
    #[must_use]
    pub const fn store(&self) -> &WishlistStore {
        &self.store
    }

    /// Add an entry to the wishlist. Returns `false` if the name was taken.
    #[instrument(skip(self, entry), fields(name = %entry.name))]
    pub async fn add(&self, entry: WishlistEntry) -> bool {
        self.store.add(entry).await
    }

    /// Remove the entry with `entry`'s name. Returns the number removed.
    #[instrument(skip(self, entry), fields(name = %entry.name))]
    pub async fn remove(&self, entry: &WishlistEntry) -> usize {
        self.store.remove(entry).await
    }

    /// Hand the named wishlist entry to the cart.
    ///
    /// The entry stays in the wishlist. Lookup uses the store, not the
    /// mirror, so an entry added just before this call is always found.
    ///
    /// # Errors
    ///
    /// Returns `ControllerError::NotInWishlist` if no entry has that name,
    /// or `ControllerError::Cart` if the cart refuses it.
    #[instrument(skip(self, name), fields(name = %name))]
    pub async fn move_to_cart(&self, name: &ProductName) -> Result<CartItemId, ControllerError> {
        let snapshot = self.store.snapshot().await;
        let entry = snapshot
            .get(name)
            .ok_or_else(|| ControllerError::NotInWishlist(name.clone()))?;

        match self.cart.add_to_cart(entry.to_cart_entry()).await {
            Ok(id) => {
                info!(cart_item_id = %id, "Moved to cart");
                Ok(id)
            }
            Err(e) => {
                warn!(error = %e, "Cart refused wishlist entry");
                Err(e.into())
            }
        }
    }
}

impl Drop for WishlistController {
    fn drop(&mut self) {
        self.mirror.abort();
    }
}

impl std::fmt::Debug for WishlistController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WishlistController")
            .field("store", &self.store)
            .field("items", &*self.items.borrow())
            .finish_non_exhaustive()
    }
}
