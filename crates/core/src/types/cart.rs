//! The cart collection and its pure mutation rules.
//!
//! A [`Cart`] is an ordered sequence of [`CartItem`] entries, unique by
//! product ID. Insertion order is display order only; the binding
//! invariant is ID uniqueness. All mutation goes through the three
//! operations below - persistence is layered on by the `cart` crate and
//! never reaches into this type.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::id::ProductId;
use crate::types::item::{CartItem, NewCartItem};

/// What an add operation did to the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// No entry with this ID existed; a new line was appended with
    /// quantity 1.
    Inserted,
    /// An entry with this ID already existed; its quantity was
    /// incremented by 1. Merge semantics, not an error.
    Merged,
}

/// What a decrement operation did to the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecrementOutcome {
    /// Quantity was above 1 and was decreased by 1.
    Decremented,
    /// Quantity was exactly 1; the entry was removed.
    Removed,
    /// No entry with this ID exists; the collection is unchanged.
    Missing,
}

/// An ordered, ID-unique collection of cart line items.
///
/// Serializes transparently as the array of its items - the fixed,
/// unversioned snapshot shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add a product to the cart.
    ///
    /// If an entry with the same ID already exists its quantity is
    /// incremented by 1 and the existing line is retained (no duplicate
    /// entry). Otherwise the product is appended with `quantity = 1`.
    pub fn add(&mut self, item: NewCartItem) -> AddOutcome {
        if let Some(existing) = self.items.iter_mut().find(|el| el.id == item.id) {
            existing.quantity += 1;
            return AddOutcome::Merged;
        }
        self.items.push(item.into_item());
        AddOutcome::Inserted
    }

    /// Increment the quantity of the entry with `id` by 1.
    ///
    /// Returns `false` and leaves the collection unchanged if no entry
    /// matches - a silent no-op, not an error.
    pub fn increment(&mut self, id: &ProductId) -> bool {
        match self.items.iter_mut().find(|el| &el.id == id) {
            Some(item) => {
                item.quantity += 1;
                true
            }
            None => false,
        }
    }

    /// Decrement the quantity of the entry with `id` by 1.
    ///
    /// An entry at quantity 1 is removed entirely rather than kept at
    /// zero. A missing ID leaves the collection unchanged.
    pub fn decrement(&mut self, id: &ProductId) -> DecrementOutcome {
        let Some(index) = self.items.iter().position(|el| &el.id == id) else {
            return DecrementOutcome::Missing;
        };

        match self.items.get_mut(index) {
            Some(item) if item.quantity > 1 => {
                item.quantity -= 1;
                DecrementOutcome::Decremented
            }
            _ => {
                self.items.remove(index);
                DecrementOutcome::Removed
            }
        }
    }

    /// The current ordered collection of line items.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Look up a line item by product ID.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&CartItem> {
        self.items.iter().find(|el| &el.id == id)
    }

    /// Number of distinct lines in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|el| el.quantity).sum()
    }

    /// Sum of `unit_price * quantity` over all lines, as an exact decimal.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.items.iter().map(CartItem::line_total).sum()
    }
}

impl FromIterator<CartItem> for Cart {
    fn from_iter<T: IntoIterator<Item = CartItem>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::types::price::UnitPrice;

    use super::*;

    fn product(id: &str, price: u32) -> NewCartItem {
        NewCartItem {
            id: ProductId::new(id),
            title: format!("Product {id}"),
            image_url: format!("https://cdn.example.com/{id}.png"),
            unit_price: UnitPrice::from(price),
        }
    }

    #[test]
    fn test_distinct_adds_one_line_each() {
        let mut cart = Cart::new();
        for id in ["p1", "p2", "p3"] {
            assert_eq!(cart.add(product(id, 10)), AddOutcome::Inserted);
        }

        assert_eq!(cart.len(), 3);
        assert!(cart.items().iter().all(|el| el.quantity == 1));
    }

    #[test]
    fn test_add_same_id_merges() {
        let mut cart = Cart::new();
        assert_eq!(cart.add(product("p1", 20)), AddOutcome::Inserted);
        assert_eq!(cart.add(product("p1", 20)), AddOutcome::Merged);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(&ProductId::new("p1")).unwrap().quantity, 2);
    }

    #[test]
    fn test_increment_touches_only_target() {
        let mut cart = Cart::new();
        cart.add(product("p1", 10));
        cart.add(product("p2", 15));

        assert!(cart.increment(&ProductId::new("p2")));

        assert_eq!(cart.get(&ProductId::new("p1")).unwrap().quantity, 1);
        assert_eq!(cart.get(&ProductId::new("p2")).unwrap().quantity, 2);
    }

    #[test]
    fn test_increment_missing_is_noop() {
        let mut cart = Cart::new();
        cart.add(product("p1", 10));
        let before = cart.clone();

        assert!(!cart.increment(&ProductId::new("missing")));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_increment_missing_on_empty_stays_empty() {
        let mut cart = Cart::new();
        assert!(!cart.increment(&ProductId::new("missing")));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_decrement_above_one_keeps_entry() {
        let mut cart = Cart::new();
        cart.add(product("p1", 10));
        cart.add(product("p1", 10));

        assert_eq!(
            cart.decrement(&ProductId::new("p1")),
            DecrementOutcome::Decremented
        );
        assert_eq!(cart.get(&ProductId::new("p1")).unwrap().quantity, 1);
    }

    #[test]
    fn test_decrement_at_one_removes_entry() {
        let mut cart = Cart::new();
        cart.add(product("p1", 10));
        cart.add(product("p2", 10));

        assert_eq!(
            cart.decrement(&ProductId::new("p1")),
            DecrementOutcome::Removed
        );
        assert_eq!(cart.len(), 1);
        assert!(cart.get(&ProductId::new("p1")).is_none());
    }

    #[test]
    fn test_decrement_missing_is_noop() {
        let mut cart = Cart::new();
        cart.add(product("p1", 10));
        cart.add(product("p2", 10));
        let before = cart.clone();

        assert_eq!(
            cart.decrement(&ProductId::new("missing")),
            DecrementOutcome::Missing
        );
        assert_eq!(cart, before);
    }

    #[test]
    fn test_scenario_add_add_decrement_decrement() {
        let mut cart = Cart::new();

        cart.add(product("p1", 20));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(&ProductId::new("p1")).unwrap().quantity, 1);

        cart.add(product("p1", 20));
        assert_eq!(cart.get(&ProductId::new("p1")).unwrap().quantity, 2);

        cart.decrement(&ProductId::new("p1"));
        assert_eq!(cart.get(&ProductId::new("p1")).unwrap().quantity, 1);

        cart.decrement(&ProductId::new("p1"));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_item_count_and_subtotal() {
        let mut cart = Cart::new();
        cart.add(product("p1", 20));
        cart.add(product("p1", 20));
        cart.add(product("p2", 5));

        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.subtotal(), Decimal::from(45));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = Cart::new();
        cart.add(product("b", 1));
        cart.add(product("a", 1));
        cart.add(product("c", 1));
        cart.increment(&ProductId::new("a"));

        let ids: Vec<&str> = cart.items().iter().map(|el| el.id.as_str()).collect();
        assert_eq!(ids, ["b", "a", "c"]);
    }

    #[test]
    fn test_serde_roundtrip_reproduces_collection() {
        let mut cart = Cart::new();
        cart.add(product("p1", 20));
        cart.add(product("p1", 20));
        cart.add(product("p2", 5));

        let json = serde_json::to_string(&cart).unwrap();
        let parsed: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, cart);
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let mut cart = Cart::new();
        cart.add(product("p1", 20));

        let json = serde_json::to_value(&cart).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["id"], "p1");
        assert_eq!(json[0]["quantity"], 1);
    }
}
