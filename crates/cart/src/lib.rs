//! GoMarket cart store library.
//!
//! Holds the in-memory cart collection, mirrors it to local key-value
//! storage on every mutation, and rehydrates it from storage when opened.
//! Consumers reach the store through a provider/context pair so UI code
//! never touches storage directly.
//!
//! # Architecture
//!
//! - [`store::CartStore`] - in-memory [`gomarket_core::Cart`] behind a
//!   read/write lock, plus a single background writer task that persists
//!   snapshots strictly in the order mutations were issued
//! - [`storage`] - async key-value persistence collaborator with file
//!   and in-memory backends
//! - [`provider`] - `CartProvider` owns the store; `CartContext` handles
//!   fail loudly when used after the provider is gone
//!
//! # Example
//!
//! ```rust,no_run
//! use gomarket_cart::{CartConfig, CartProvider};
//! use gomarket_core::{NewCartItem, ProductId, UnitPrice};
//!
//! # async fn demo() -> gomarket_cart::Result<()> {
//! let config = CartConfig::default();
//! let provider = CartProvider::open(&config).await?;
//! let cart = provider.context();
//!
//! cart.add_to_cart(NewCartItem {
//!     id: ProductId::new("p1"),
//!     title: "Shirt".to_owned(),
//!     image_url: "https://cdn.example.com/shirt.png".to_owned(),
//!     unit_price: UnitPrice::from(20),
//! })?;
//!
//! provider.shutdown().await?;
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod provider;
pub mod snapshot;
pub mod storage;
pub mod store;

pub use config::{CartConfig, ConfigError};
pub use error::{CartError, Result};
pub use provider::{CartContext, CartProvider};
pub use snapshot::STORAGE_KEY;
pub use store::CartStore;
