//! Core types for Hypercars.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod entry;
pub mod id;
pub mod name;
pub mod price;

pub use entry::{CartEntry, WishlistEntry};
pub use id::*;
pub use name::ProductName;
pub use price::{CurrencyCode, CurrencyCodeError, Price};
