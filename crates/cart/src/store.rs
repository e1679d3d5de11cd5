//! The cart store: in-memory state plus the ordered persistence writer.
//!
//! Mutations apply to the in-memory cart under a write lock, encode the
//! post-mutation snapshot while the lock is still held, and enqueue the
//! encoded blob on an unbounded channel. A single background task drains
//! the channel and performs the storage writes strictly in issue order,
//! so the persisted snapshot always converges to the most recently
//! issued in-memory state - rapid mutations cannot overwrite a newer
//! snapshot with an older one.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use rust_decimal::Decimal;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, error, warn};

use gomarket_core::{Cart, CartItem, DecrementOutcome, NewCartItem, ProductId};

use crate::error::{CartError, Result};
use crate::snapshot::{self, STORAGE_KEY};
use crate::storage::Storage;

/// Work items for the persistence writer.
enum WriterRequest {
    /// Persist an encoded snapshot captured at mutation time.
    Persist(String),
    /// Acknowledge once all previously issued writes have completed.
    Flush(oneshot::Sender<()>),
}

/// The cart state container.
///
/// Owns the in-memory collection exclusively; all mutation goes through
/// [`add_to_cart`](Self::add_to_cart), [`increment`](Self::increment)
/// and [`decrement`](Self::decrement). Storage failures inside the
/// writer are logged and do not disturb the in-memory state.
pub struct CartStore {
    cart: RwLock<Cart>,
    tx: mpsc::UnboundedSender<WriterRequest>,
    // Held so the writer outlives the store; writes are awaited through
    // flush(), never by joining the task.
    _worker: JoinHandle<()>,
}

impl CartStore {
    /// Open the store against `storage`.
    ///
    /// Loads the snapshot under [`STORAGE_KEY`] and hydrates the
    /// in-memory cart from it before returning, so consumers never
    /// observe a transient pre-hydration empty state. A malformed
    /// snapshot is discarded with a warning and the cart starts empty -
    /// corrupted local cache must not block usage.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage read itself fails.
    pub async fn open(storage: Arc<dyn Storage>) -> Result<Self> {
        let cart = match storage.get(STORAGE_KEY).await? {
            Some(raw) => match snapshot::decode(&raw) {
                Ok(cart) => cart,
                Err(err) => {
                    warn!(error = %err, "discarding malformed cart snapshot");
                    Cart::new()
                }
            },
            None => Cart::new(),
        };
        debug!(lines = cart.len(), "cart store hydrated");

        let (tx, rx) = mpsc::unbounded_channel();
        let worker = tokio::spawn(run_writer(storage, rx));

        Ok(Self {
            cart: RwLock::new(cart),
            tx,
            _worker: worker,
        })
    }

    /// Add a product to the cart.
    ///
    /// Merges with an existing line of the same ID (quantity + 1) or
    /// appends a new line with quantity 1, then persists the result.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::PersistenceUnavailable`] if the writer has
    /// stopped; the in-memory mutation has still been applied.
    pub fn add_to_cart(&self, item: NewCartItem) -> Result<()> {
        let encoded = {
            let mut cart = self.cart_write();
            let outcome = cart.add(item);
            debug!(?outcome, "add to cart");
            snapshot::encode(&cart)?
        };
        self.enqueue(encoded)
    }

    /// Increment the quantity of the line with `id` by 1.
    ///
    /// A missing ID is a silent no-op; the (possibly unchanged)
    /// collection is persisted regardless.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::PersistenceUnavailable`] if the writer has
    /// stopped; the in-memory mutation has still been applied.
    pub fn increment(&self, id: &ProductId) -> Result<()> {
        let encoded = {
            let mut cart = self.cart_write();
            if !cart.increment(id) {
                debug!(%id, "increment for id not in cart ignored");
            }
            snapshot::encode(&cart)?
        };
        self.enqueue(encoded)
    }

    /// Decrement the quantity of the line with `id` by 1.
    ///
    /// A line at quantity 1 is removed entirely; a missing ID is a
    /// no-op. The resulting collection is persisted regardless.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::PersistenceUnavailable`] if the writer has
    /// stopped; the in-memory mutation has still been applied.
    pub fn decrement(&self, id: &ProductId) -> Result<()> {
        let encoded = {
            let mut cart = self.cart_write();
            match cart.decrement(id) {
                DecrementOutcome::Removed => debug!(%id, "line removed from cart"),
                DecrementOutcome::Missing => {
                    debug!(%id, "decrement for id not in cart ignored");
                }
                DecrementOutcome::Decremented => {}
            }
            snapshot::encode(&cart)?
        };
        self.enqueue(encoded)
    }

    /// The current ordered collection of line items.
    #[must_use]
    pub fn products(&self) -> Vec<CartItem> {
        self.cart_read().items().to_vec()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.cart_read().item_count()
    }

    /// Sum of `unit_price * quantity` over all lines.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.cart_read().subtotal()
    }

    /// Wait until every write issued before this call has completed.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::PersistenceUnavailable`] if the writer has
    /// stopped.
    pub async fn flush(&self) -> Result<()> {
        let (ack_tx, ack_rx) = oneshot::channel();
        self.tx
            .send(WriterRequest::Flush(ack_tx))
            .map_err(|_| CartError::PersistenceUnavailable)?;
        ack_rx.await.map_err(|_| CartError::PersistenceUnavailable)
    }

    fn enqueue(&self, encoded: String) -> Result<()> {
        self.tx
            .send(WriterRequest::Persist(encoded))
            .map_err(|_| CartError::PersistenceUnavailable)
    }

    fn cart_read(&self) -> RwLockReadGuard<'_, Cart> {
        self.cart.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn cart_write(&self) -> RwLockWriteGuard<'_, Cart> {
        self.cart.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Drain persistence requests in issue order until all senders are gone.
async fn run_writer(storage: Arc<dyn Storage>, mut rx: mpsc::UnboundedReceiver<WriterRequest>) {
    debug!("cart persistence writer started");

    while let Some(request) = rx.recv().await {
        match request {
            WriterRequest::Persist(encoded) => {
                if let Err(err) = storage.set(STORAGE_KEY, &encoded).await {
                    // Operational failure: keep serving the in-memory
                    // cart and keep accepting writes.
                    error!(error = %err, "failed to persist cart snapshot");
                }
            }
            WriterRequest::Flush(ack) => {
                let _ = ack.send(());
            }
        }
    }

    debug!("cart persistence writer stopped");
}
