//! The wishlist store.
//!
//! All mutations go through a single async mutex guarding both the entry list
//! and the subscriber list. Publication happens while the lock is held, so
//! every subscriber sees snapshots in the order mutations were applied and a
//! snapshot never reflects a half-applied change.

use std::ops::Deref;
use std::sync::Arc;

use hypercars_core::{ProductName, WishlistEntry};
use tokio::sync::{Mutex, mpsc};
use tracing::{debug, info, instrument};

use crate::subscription::WishlistSubscription;

/// An immutable point-in-time copy of the whole wishlist.
///
/// Cloning is cheap: all clones share one allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot(Arc<[WishlistEntry]>);

impl Snapshot {
    fn capture(entries: &[WishlistEntry]) -> Self {
        Self(entries.into())
    }

    /// The entries, in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[WishlistEntry] {
        &self.0
    }

    /// Find the entry with the given display name.
    #[must_use]
    pub fn get(&self, name: &ProductName) -> Option<&WishlistEntry> {
        self.0.iter().find(|entry| &entry.name == name)
    }

    /// Whether an entry with the given display name is present.
    #[must_use]
    pub fn contains(&self, name: &ProductName) -> bool {
        self.get(name).is_some()
    }

    /// Display names, in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &ProductName> {
        self.0.iter().map(|entry| &entry.name)
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self(Arc::from(Vec::new()))
    }
}

impl Deref for Snapshot {
    type Target = [WishlistEntry];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Process-local wishlist, de-duplicated by display name.
///
/// The store is a cheaply cloneable handle. Construct one at the composition
/// root and hand clones to whatever needs it; all clones share the same list
/// and subscribers.
///
/// Nothing here can fail and nothing is persisted: the contents live exactly
/// as long as the last handle.
#[derive(Debug, Clone, Default)]
pub struct WishlistStore {
    inner: Arc<Mutex<StoreState>>,
}

#[derive(Debug, Default)]
struct StoreState {
    entries: Vec<WishlistEntry>,
    subscribers: Vec<mpsc::UnboundedSender<Snapshot>>,
}

impl StoreState {
    fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.entries)
    }

    fn publish(&mut self) {
        let snapshot = self.snapshot();
        // A failed send means the subscription was dropped.
        self.subscribers
            .retain(|subscriber| subscriber.send(snapshot.clone()).is_ok());
        debug!(
            entries = snapshot.len(),
            subscribers = self.subscribers.len(),
            "Published wishlist snapshot"
        );
    }
}

impl WishlistStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry unless one with the same display name is already present.
    ///
    /// Returns `true` if the entry was inserted. A duplicate name leaves the
    /// store untouched (the first entry wins) and publishes nothing.
    #[instrument(skip(self, entry), fields(name = %entry.name))]
    pub async fn add(&self, entry: WishlistEntry) -> bool {
        let mut state = self.inner.lock().await;

        if state.entries.iter().any(|existing| existing.same_name(&entry)) {
            debug!("Entry already in wishlist");
            return false;
        }

        state.entries.push(entry);
        state.publish();
        info!(len = state.entries.len(), "Added to wishlist");
        true
    }

    /// Remove every entry whose display name matches `entry`'s.
    ///
    /// Returns the number of entries removed. A snapshot is published even
    /// when nothing matched.
    pub async fn remove(&self, entry: &WishlistEntry) -> usize {
        self.remove_by_name(&entry.name).await
    }

    /// Remove every entry with the given display name.
    ///
    /// Same semantics as [`remove`](Self::remove).
    #[instrument(skip(self, name), fields(name = %name))]
    pub async fn remove_by_name(&self, name: &ProductName) -> usize {
        let mut state = self.inner.lock().await;

        let before = state.entries.len();
        state.entries.retain(|existing| &existing.name != name);
        let removed = before - state.entries.len();

        state.publish();
        info!(removed, len = state.entries.len(), "Removed from wishlist");
        removed
    }

    /// Subscribe to wishlist changes.
    ///
    /// The returned stream yields the current snapshot first, then one
    /// snapshot per subsequent mutation, without coalescing. Drop it to
    /// unsubscribe.
    pub async fn subscribe(&self) -> WishlistSubscription {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut state = self.inner.lock().await;

        // Cannot fail: the receiver is still in hand.
        let _ = tx.send(state.snapshot());
        state.subscribers.push(tx);
        debug!(subscribers = state.subscribers.len(), "New wishlist subscriber");

        WishlistSubscription::new(rx)
    }

    /// The current snapshot, without subscribing.
    pub async fn snapshot(&self) -> Snapshot {
        self.inner.lock().await.snapshot()
    }

    /// Number of live subscribers.
    ///
    /// Dropped subscriptions are only pruned on the next publish, so this may
    /// briefly over-count.
    pub async fn subscriber_count(&self) -> usize {
        self.inner.lock().await.subscribers.len()
    }
}
