//! Integration tests for GoMarket.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p gomarket-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_flow` - Cart operations through the provider/context layer
//! - `persistence` - Snapshot persistence, rehydration, and recovery
//!
//! This crate only holds shared test fixtures; the tests themselves
//! live in `tests/`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use gomarket_core::{NewCartItem, ProductId, UnitPrice};

/// Build a product descriptor with a whole-unit price.
#[must_use]
pub fn product(id: &str, price: u32) -> NewCartItem {
    NewCartItem {
        id: ProductId::new(id),
        title: format!("Product {id}"),
        image_url: format!("https://cdn.example.com/{id}.png"),
        unit_price: UnitPrice::from(price),
    }
}
