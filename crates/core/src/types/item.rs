//! Cart line item types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::id::ProductId;
use crate::types::price::UnitPrice;

/// One product line in the cart.
///
/// The `quantity >= 1` invariant holds for every item present in a cart:
/// an item whose quantity reaches zero is removed from the collection,
/// never retained at zero. `title` and `image_url` are opaque display
/// strings the cart logic never inspects.
///
/// Serialized with the snapshot's fixed field names; `unit_price` is
/// written under the key `price`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Stable product identifier (unique within a cart).
    pub id: ProductId,
    /// Display name.
    pub title: String,
    /// Product image URL.
    pub image_url: String,
    /// Price per unit.
    #[serde(rename = "price")]
    pub unit_price: UnitPrice,
    /// Purchase quantity, always `>= 1`.
    pub quantity: u32,
}

impl CartItem {
    /// Returns `unit_price * quantity` as an exact decimal.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price.amount() * Decimal::from(self.quantity)
    }
}

/// A product descriptor lacking a quantity - the input to add-to-cart.
///
/// Promoted to a [`CartItem`] with `quantity = 1` when first added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCartItem {
    /// Stable product identifier.
    pub id: ProductId,
    /// Display name.
    pub title: String,
    /// Product image URL.
    pub image_url: String,
    /// Price per unit.
    #[serde(rename = "price")]
    pub unit_price: UnitPrice,
}

impl NewCartItem {
    /// Promote this descriptor to a cart line with `quantity = 1`.
    #[must_use]
    pub fn into_item(self) -> CartItem {
        CartItem {
            id: self.id,
            title: self.title,
            image_url: self.image_url,
            unit_price: self.unit_price,
            quantity: 1,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn shirt() -> NewCartItem {
        NewCartItem {
            id: ProductId::new("p1"),
            title: "Shirt".to_owned(),
            image_url: "https://cdn.example.com/shirt.png".to_owned(),
            unit_price: UnitPrice::from(20),
        }
    }

    #[test]
    fn test_into_item_starts_at_one() {
        let item = shirt().into_item();
        assert_eq!(item.quantity, 1);
        assert_eq!(item.id, ProductId::new("p1"));
    }

    #[test]
    fn test_line_total() {
        let mut item = shirt().into_item();
        item.quantity = 3;
        assert_eq!(item.line_total(), Decimal::from(60));
    }

    #[test]
    fn test_serde_uses_snapshot_field_names() {
        let item = shirt().into_item();
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["price"], "20");
        assert_eq!(json["image_url"], "https://cdn.example.com/shirt.png");
        assert!(json.get("unit_price").is_none());
    }
}
