//! Provider/context dependency injection for the cart store.
//!
//! The provider is constructed once by whoever owns the application
//! composition root and owns the store for its whole lifetime. UI code
//! holds [`CartContext`] handles, which are cheap to clone and carry no
//! ownership: using a context after its provider is gone is a
//! programming error and fails loudly with
//! [`CartError::OutsideProvider`] rather than silently returning a
//! default.

use std::sync::{Arc, Weak};

use rust_decimal::Decimal;

use gomarket_core::{CartItem, NewCartItem, ProductId};

use crate::config::CartConfig;
use crate::error::{CartError, Result};
use crate::storage::{FileStorage, Storage};
use crate::store::CartStore;

/// Owns the cart store and mints context handles for consumers.
pub struct CartProvider {
    store: Arc<CartStore>,
}

impl CartProvider {
    /// Open a provider with file-backed storage in the configured
    /// data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if reading the persisted snapshot fails.
    pub async fn open(config: &CartConfig) -> Result<Self> {
        Self::with_storage(FileStorage::new(config.data_dir.clone())).await
    }

    /// Open a provider over any storage backend.
    ///
    /// # Errors
    ///
    /// Returns an error if reading the persisted snapshot fails.
    pub async fn with_storage(storage: impl Storage + 'static) -> Result<Self> {
        let store = CartStore::open(Arc::new(storage)).await?;
        Ok(Self {
            store: Arc::new(store),
        })
    }

    /// Mint a context handle for consumers.
    #[must_use]
    pub fn context(&self) -> CartContext {
        CartContext {
            store: Arc::downgrade(&self.store),
        }
    }

    /// Wait until every write issued so far has completed.
    ///
    /// # Errors
    ///
    /// Returns an error if the persistence writer has stopped.
    pub async fn flush(&self) -> Result<()> {
        self.store.flush().await
    }

    /// Flush pending writes and tear the provider down.
    ///
    /// Outstanding [`CartContext`] handles fail with
    /// [`CartError::OutsideProvider`] from this point on.
    ///
    /// # Errors
    ///
    /// Returns an error if the persistence writer has stopped.
    pub async fn shutdown(self) -> Result<()> {
        self.store.flush().await
    }
}

/// Cheap-clone handle to the cart store.
///
/// Every operation re-checks that the owning provider is still alive.
#[derive(Clone)]
pub struct CartContext {
    store: Weak<CartStore>,
}

impl CartContext {
    fn store(&self) -> Result<Arc<CartStore>> {
        self.store.upgrade().ok_or(CartError::OutsideProvider)
    }

    /// Add a product to the cart (merge-or-append semantics).
    ///
    /// # Errors
    ///
    /// Fails if the provider is gone or persistence is unavailable.
    pub fn add_to_cart(&self, item: NewCartItem) -> Result<()> {
        self.store()?.add_to_cart(item)
    }

    /// Increment the quantity of the line with `id`; no-op when missing.
    ///
    /// # Errors
    ///
    /// Fails if the provider is gone or persistence is unavailable.
    pub fn increment(&self, id: &ProductId) -> Result<()> {
        self.store()?.increment(id)
    }

    /// Decrement the quantity of the line with `id`, removing it at 1;
    /// no-op when missing.
    ///
    /// # Errors
    ///
    /// Fails if the provider is gone or persistence is unavailable.
    pub fn decrement(&self, id: &ProductId) -> Result<()> {
        self.store()?.decrement(id)
    }

    /// The current ordered collection of line items.
    ///
    /// # Errors
    ///
    /// Fails if the provider is gone.
    pub fn products(&self) -> Result<Vec<CartItem>> {
        Ok(self.store()?.products())
    }

    /// Total number of units across all lines.
    ///
    /// # Errors
    ///
    /// Fails if the provider is gone.
    pub fn item_count(&self) -> Result<u32> {
        Ok(self.store()?.item_count())
    }

    /// Sum of `unit_price * quantity` over all lines.
    ///
    /// # Errors
    ///
    /// Fails if the provider is gone.
    pub fn subtotal(&self) -> Result<Decimal> {
        Ok(self.store()?.subtotal())
    }

    /// Wait until every write issued so far has completed.
    ///
    /// # Errors
    ///
    /// Fails if the provider is gone or the writer has stopped.
    pub async fn flush(&self) -> Result<()> {
        self.store()?.flush().await
    }
}
