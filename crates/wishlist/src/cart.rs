//! The cart seam.
//!
//! Moving a wishlist entry to the cart produces a [`CartEntry`] with a blank
//! ID. Whatever implements [`CartSink`] owns the cart and assigns the ID.

use std::sync::Arc;

use async_trait::async_trait;
use hypercars_core::{CartEntry, CartItemId};
use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

use crate::error::CartError;

/// Destination for entries moved out of the wishlist.
#[async_trait]
pub trait CartSink: Send + Sync {
    /// Add a line to the cart and return the ID the cart assigned to it.
    ///
    /// # Errors
    ///
    /// Returns `CartError` if the cart refuses the line or cannot be reached.
    async fn add_to_cart(&self, entry: CartEntry) -> Result<CartItemId, CartError>;
}

/// In-memory cart.
///
/// Lines are kept in insertion order. Adding a line whose name is already in
/// the cart increases that line's quantity instead of adding a second line.
#[derive(Debug, Clone, Default)]
pub struct CartBuffer {
    lines: Arc<Mutex<Vec<CartEntry>>>,
}

impl CartBuffer {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the current cart lines.
    pub async fn entries(&self) -> Vec<CartEntry> {
        self.lines.lock().await.clone()
    }

    /// Total units across all lines.
    pub async fn total_quantity(&self) -> u64 {
        self.lines
            .lock()
            .await
            .iter()
            .map(|line| u64::from(line.quantity))
            .sum()
    }
}

#[async_trait]
impl CartSink for CartBuffer {
    async fn add_to_cart(&self, mut entry: CartEntry) -> Result<CartItemId, CartError> {
        if entry.quantity == 0 {
            return Err(CartError::Rejected(format!(
                "'{}' has quantity 0",
                entry.name
            )));
        }

        let mut lines = self.lines.lock().await;

        if let Some(line) = lines.iter_mut().find(|line| line.name == entry.name) {
            line.quantity = line.quantity.saturating_add(entry.quantity);
            debug!(id = %line.id, quantity = line.quantity, "Increased cart quantity");
            return Ok(line.id.clone());
        }

        if entry.id.is_blank() {
            entry.id = CartItemId::new(Uuid::new_v4().to_string());
        }
        let id = entry.id.clone();
        debug!(id = %id, name = %entry.name, "Added cart line");
        lines.push(entry);
        Ok(id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use hypercars_core::{Price, WishlistEntry};

    use super::*;

    fn line(name: &str) -> CartEntry {
        WishlistEntry::new("p-1", name, Price::from_amount(10), "img.png").to_cart_entry()
    }

    #[tokio::test]
    async fn test_assigns_id_to_blank_entry() {
        let cart = CartBuffer::new();
        let id = cart.add_to_cart(line("Chiron")).await.unwrap();
        assert!(!id.is_blank());
        assert!(Uuid::parse_str(id.as_str()).is_ok());

        let entries = cart.entries().await;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, id);
        assert!(entries[0].is_assigned());
    }

    #[tokio::test]
    async fn test_keeps_preassigned_id() {
        let cart = CartBuffer::new();
        let mut entry = line("Chiron");
        entry.id = CartItemId::new("c-42");
        assert_eq!(cart.add_to_cart(entry).await.unwrap().as_str(), "c-42");
    }

    #[tokio::test]
    async fn test_same_name_increments_quantity() {
        let cart = CartBuffer::new();
        let first = cart.add_to_cart(line("Chiron")).await.unwrap();
        let second = cart.add_to_cart(line("Chiron")).await.unwrap();
        assert_eq!(first, second);

        let entries = cart.entries().await;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].quantity, 2);
        assert_eq!(cart.total_quantity().await, 2);
    }

    #[tokio::test]
    async fn test_rejects_zero_quantity() {
        let cart = CartBuffer::new();
        let mut entry = line("Chiron");
        entry.quantity = 0;
        assert!(matches!(
            cart.add_to_cart(entry).await,
            Err(CartError::Rejected(_))
        ));
        assert!(cart.entries().await.is_empty());
    }
}
