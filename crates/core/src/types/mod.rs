//! Core types for GoMarket.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod id;
pub mod item;
pub mod price;

pub use cart::{AddOutcome, Cart, DecrementOutcome};
pub use id::*;
pub use item::{CartItem, NewCartItem};
pub use price::{PriceError, UnitPrice};
