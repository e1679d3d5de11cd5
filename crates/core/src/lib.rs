//! GoMarket Core - Shared types library.
//!
//! This crate provides common types used across all GoMarket components:
//! - `cart` - Cart store library (state container + persistence)
//! - `cli` - Command-line tools for inspecting and mutating the cart
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no
//! async runtime. This keeps it lightweight and allows it to be used
//! anywhere. The cart collection and its merge/increment/decrement rules
//! live here as pure value operations; persistence is layered on top by
//! the `cart` crate.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and prices, plus the
//!   cart line item and collection types

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
