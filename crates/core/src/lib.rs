//! Hypercars Core - Shared domain types.
//!
//! This crate provides the types exchanged between the wishlist store, its
//! controllers and the cart subsystem:
//! - `wishlist` - The reactive in-process wishlist store
//! - `cli` - Script replay and validation tools
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no async runtime, no
//! channels. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs, prices, product names and the
//!   wishlist/cart entry shapes

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
