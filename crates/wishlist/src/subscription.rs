//! Per-observer snapshot streams.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures::Stream;
use tokio::sync::mpsc;

use crate::store::Snapshot;

/// A live stream of wishlist snapshots for one observer.
///
/// Yields the snapshot current at subscription time, then every snapshot the
/// store publishes afterwards, in order. Snapshots queue without bound, so a
/// slow observer never misses one. The stream only ends once every handle to
/// the store has been dropped.
///
/// Dropping the subscription unsubscribes; the store forgets it on its next
/// publish.
#[derive(Debug)]
pub struct WishlistSubscription {
    rx: mpsc::UnboundedReceiver<Snapshot>,
}

impl WishlistSubscription {
    pub(crate) const fn new(rx: mpsc::UnboundedReceiver<Snapshot>) -> Self {
        Self { rx }
    }

    /// Take the next snapshot without waiting, if one is queued.
    pub fn try_next(&mut self) -> Option<Snapshot> {
        self.rx.try_recv().ok()
    }

    /// Drain everything queued and return the newest snapshot, if any.
    pub fn latest(&mut self) -> Option<Snapshot> {
        let mut latest = None;
        while let Some(snapshot) = self.try_next() {
            latest = Some(snapshot);
        }
        latest
    }
}

impl Stream for WishlistSubscription {
    type Item = Snapshot;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.rx.poll_recv(cx)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use futures::StreamExt;
    use hypercars_core::{Price, ProductName, WishlistEntry};

    use crate::store::WishlistStore;

    fn entry(name: &str) -> WishlistEntry {
        WishlistEntry::new(name, name, Price::from_amount(1), "")
    }

    #[tokio::test]
    async fn test_first_snapshot_is_ready_immediately() {
        let store = WishlistStore::new();
        let mut updates = store.subscribe().await;
        assert!(updates.try_next().unwrap().is_empty());
        assert!(updates.try_next().is_none());
    }

    #[tokio::test]
    async fn test_latest_drains_queue() {
        let store = WishlistStore::new();
        let mut updates = store.subscribe().await;
        store.add(entry("A")).await;
        store.add(entry("B")).await;

        let latest = updates.latest().unwrap();
        assert_eq!(latest.len(), 2);
        assert!(updates.latest().is_none());
    }

    #[tokio::test]
    async fn test_independent_subscribers() {
        let store = WishlistStore::new();
        let mut first = store.subscribe().await;
        store.add(entry("A")).await;
        let mut second = store.subscribe().await;
        store.remove_by_name(&ProductName::from("A")).await;

        let seen_first: Vec<usize> = first.by_ref().take(3).map(|s| s.len()).collect().await;
        let seen_second: Vec<usize> = second.by_ref().take(2).map(|s| s.len()).collect().await;
        assert_eq!(seen_first, [0, 1, 0]);
        assert_eq!(seen_second, [1, 0]);
    }

    #[tokio::test]
    async fn test_stream_ends_when_store_dropped() {
        let store = WishlistStore::new();
        let mut updates = store.subscribe().await;
        drop(store);

        assert!(updates.next().await.unwrap().is_empty());
        assert!(updates.next().await.is_none());
    }
}
