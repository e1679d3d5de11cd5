//! Snapshot codec for the persisted cart.
//!
//! The entire cart is encoded as a JSON array of line objects with the
//! fixed field set `id`, `title`, `image_url`, `price`, `quantity`. The
//! format is unversioned; whatever sits under the storage key is either
//! a decodable snapshot or is discarded as if no snapshot existed.

use gomarket_core::Cart;

/// Fixed storage key the cart snapshot is persisted under.
pub const STORAGE_KEY: &str = "@GoMarket:Cart";

/// Encode the whole cart for storage.
pub(crate) fn encode(cart: &Cart) -> serde_json::Result<String> {
    serde_json::to_string(cart)
}

/// Decode a stored snapshot back into a cart.
pub(crate) fn decode(raw: &str) -> serde_json::Result<Cart> {
    serde_json::from_str(raw)
}
