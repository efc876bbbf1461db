//! In-memory Cart Store
//!
//! Carts live for the lifetime of the process and are keyed by cart id.
//! Every read and write goes through the `DashMap` shard locks, and no lock
//! is held past the end of a single operation.

use super::models::{Cart, Item};
use dashmap::DashMap;

/// Table of all carts, keyed by cart id
#[derive(Debug, Default)]
pub struct CartStore {
    carts: DashMap<String, Cart>,
}

impl CartStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the cart with `item` as its only entry when `cart_id` is unseen.
    ///
    /// An existing cart is returned untouched: the item is not appended.
    pub fn add_item(&self, cart_id: &str, item: Item) -> Cart {
        self.carts
            .entry(cart_id.to_owned())
            .or_insert_with(|| Cart::with_item(cart_id, item))
            .value()
            .clone()
    }

    /// Returns a snapshot of the cart, if any
    pub fn get_cart(&self, cart_id: &str) -> Option<Cart> {
        self.carts.get(cart_id).map(|cart| cart.value().clone())
    }

    /// Drops every item whose id is `item_id`, keeping the order of the rest.
    ///
    /// Returns `None` when the cart does not exist.
    pub fn remove_item(&self, cart_id: &str, item_id: &str) -> Option<Cart> {
        let mut cart = self.carts.get_mut(cart_id)?;
        cart.items.retain(|item| item.id != item_id);
        Some(cart.value().clone())
    }

    /// Number of carts currently held
    pub fn len(&self) -> usize {
        self.carts.len()
    }

    /// Whether the store holds no carts
    pub fn is_empty(&self) -> bool {
        self.carts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, name: &str) -> Item {
        Item {
            id: id.into(),
            name: name.into(),
            quantity: 1,
            price: 1.5,
        }
    }

    #[test]
    fn test_unknown_cart_is_absent() {
        let store = CartStore::new();
        assert!(store.get_cart("missing").is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_item_creates_single_item_cart() {
        let store = CartStore::new();
        let cart = store.add_item("c1", item("a", "Apple"));

        assert_eq!(cart.id, "c1");
        assert_eq!(cart.items, vec![item("a", "Apple")]);
        assert_eq!(store.get_cart("c1"), Some(cart));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_add_item_on_existing_cart_does_not_append() {
        let store = CartStore::new();
        store.add_item("c1", item("a", "Apple"));

        let cart = store.add_item("c1", item("b", "Banana"));

        assert_eq!(cart.items, vec![item("a", "Apple")]);
        assert_eq!(store.get_cart("c1").unwrap().items.len(), 1);
    }

    #[test]
    fn test_remove_item_on_unknown_cart() {
        let store = CartStore::new();
        assert!(store.remove_item("nope", "a").is_none());
        assert!(store.is_empty(), "removing must not create a cart");
    }

    #[test]
    fn test_remove_item_keeps_order_and_drops_duplicates() {
        let store = CartStore::new();
        store.add_item("c1", item("a", "Apple"));
        store
            .carts
            .get_mut("c1")
            .unwrap()
            .items
            .extend([item("b", "Banana"), item("a", "Apple again"), item("c", "Cherry")]);

        let cart = store.remove_item("c1", "a").unwrap();
        let ids: Vec<_> = cart.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["b", "c"]);

        let again = store.remove_item("c1", "a").unwrap();
        assert_eq!(again, cart, "second removal is a no-op");
        assert_eq!(store.get_cart("c1"), Some(cart));
    }

    #[test]
    fn test_remove_missing_item_is_noop() {
        let store = CartStore::new();
        let before = store.add_item("c1", item("a", "Apple"));
        assert_eq!(store.remove_item("c1", "zzz"), Some(before));
    }

    #[test]
    fn test_cart_stays_after_last_item_removed() {
        let store = CartStore::new();
        store.add_item("c1", item("a", "Apple"));

        let cart = store.remove_item("c1", "a").unwrap();
        assert!(cart.items.is_empty());
        assert_eq!(store.get_cart("c1").map(|c| c.items.len()), Some(0));

        // The emptied cart still exists, so a further add is ignored too.
        let cart = store.add_item("c1", item("b", "Banana"));
        assert!(cart.items.is_empty());
    }
}
