//! Error types for the cart seam and the wishlist controller.
//!
//! The store itself has no error type: every store operation is total.

use hypercars_core::ProductName;
use thiserror::Error;

/// Errors a [`CartSink`](crate::CartSink) can report.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CartError {
    /// The cart refused the entry.
    #[error("cart rejected entry: {0}")]
    Rejected(String),

    /// The cart could not be reached.
    #[error("cart unavailable: {0}")]
    Unavailable(String),
}

/// Errors from [`WishlistController`](crate::WishlistController) operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ControllerError {
    /// No wishlist entry has the requested name.
    #[error("'{0}' is not in the wishlist")]
    NotInWishlist(ProductName),

    /// Handing the entry to the cart failed.
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),
}
