//! Cart management commands.
//!
//! Each command opens the provider against the configured data
//! directory, applies the operation, flushes the persistence queue so
//! the snapshot is on disk before the process exits, and prints the
//! resulting cart state.
//!
//! # Environment Variables
//!
//! - `GOMARKET_DATA_DIR` - Directory for persisted cart snapshots
//!   (default: `.gomarket`)

use rust_decimal::Decimal;
use thiserror::Error;

use gomarket_cart::{CartConfig, CartProvider};
use gomarket_core::{NewCartItem, PriceError, ProductId, UnitPrice};

/// Errors that can occur during cart commands.
#[derive(Debug, Error)]
pub enum CartCommandError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] gomarket_cart::ConfigError),

    /// The cart store reported an error.
    #[error("Cart error: {0}")]
    Cart(#[from] gomarket_cart::CartError),

    /// The given price is not usable.
    #[error("Invalid price: {0}")]
    Price(#[from] PriceError),
}

/// Add a product to the cart.
///
/// Merges with an existing line of the same id, otherwise appends a new
/// line with quantity 1.
///
/// # Errors
///
/// Returns an error if the price is negative or the store cannot be
/// opened or persisted.
pub async fn add(
    id: &str,
    title: &str,
    image_url: &str,
    price: Decimal,
) -> Result<(), CartCommandError> {
    let unit_price = UnitPrice::new(price)?;
    let provider = open_provider().await?;
    let cart = provider.context();

    cart.add_to_cart(NewCartItem {
        id: ProductId::new(id),
        title: title.to_owned(),
        image_url: image_url.to_owned(),
        unit_price,
    })?;

    tracing::info!("Added {id} to cart");
    print_cart(&cart)?;
    provider.shutdown().await?;
    Ok(())
}

/// Increment a line's quantity by 1.
///
/// # Errors
///
/// Returns an error if the store cannot be opened or persisted.
pub async fn increment(id: &str) -> Result<(), CartCommandError> {
    let provider = open_provider().await?;
    let cart = provider.context();

    cart.increment(&ProductId::new(id))?;

    print_cart(&cart)?;
    provider.shutdown().await?;
    Ok(())
}

/// Decrement a line's quantity by 1, removing the line at quantity 1.
///
/// # Errors
///
/// Returns an error if the store cannot be opened or persisted.
pub async fn decrement(id: &str) -> Result<(), CartCommandError> {
    let provider = open_provider().await?;
    let cart = provider.context();

    cart.decrement(&ProductId::new(id))?;

    print_cart(&cart)?;
    provider.shutdown().await?;
    Ok(())
}

/// Print the cart with item count and subtotal.
///
/// # Errors
///
/// Returns an error if the store cannot be opened.
pub async fn show() -> Result<(), CartCommandError> {
    let provider = open_provider().await?;
    let cart = provider.context();

    print_cart(&cart)?;
    provider.shutdown().await?;
    Ok(())
}

async fn open_provider() -> Result<CartProvider, CartCommandError> {
    let config = CartConfig::from_env()?;
    tracing::debug!(data_dir = %config.data_dir.display(), "opening cart");
    Ok(CartProvider::open(&config).await?)
}

fn print_cart(cart: &gomarket_cart::CartContext) -> Result<(), CartCommandError> {
    let products = cart.products()?;

    if products.is_empty() {
        tracing::info!("Cart is empty");
        return Ok(());
    }

    for item in &products {
        tracing::info!(
            "  {} x{}  {}  ({} each)",
            item.title,
            item.quantity,
            item.line_total(),
            item.unit_price,
        );
    }
    tracing::info!("Items: {}", cart.item_count()?);
    tracing::info!("Subtotal: {}", cart.subtotal()?);
    Ok(())
}
