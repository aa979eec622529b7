//! Shopping Cart
//!
//! Cart lines are keyed by exact product title; the numeric id is only used
//! for removal. Stored as a plain JSON array so pages written by older
//! scripts keep loading.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::StoreError;
use crate::storage::{load_json, save_json, KeyValueStore};

/// A single cart line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub title: String,
    /// Price as displayed on the product card, e.g. "৳ 1,20,000".
    /// Older inline handlers sometimes passed a bare number.
    #[serde(default, deserialize_with = "price_text")]
    pub price: String,
    pub image: String,
    pub quantity: u32,
    /// Creation timestamp in milliseconds.
    pub id: u64,
}

/// Accept a stored price as a string, a number (stringified) or null.
fn price_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPrice {
        Text(String),
        Number(serde_json::Number),
        Null,
    }

    Ok(match RawPrice::deserialize(deserializer)? {
        RawPrice::Text(text) => text,
        RawPrice::Number(n) => n.to_string(),
        RawPrice::Null => String::new(),
    })
}

/// Result of [`Cart::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added { id: u64 },
    Incremented { id: u64, quantity: u32 },
}

/// The persisted cart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<CartItem>) -> Self {
        Self { items }
    }

    /// Load the cart stored under `key`; an absent key yields an empty cart.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Result<Self, StoreError> {
        Ok(load_json(store, key)?.unwrap_or_default())
    }

    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &S, key: &str) -> Result<(), StoreError> {
        save_json(store, key, self)
    }

    /// Add one unit of a product. A line with the same title gets its
    /// quantity bumped, otherwise a new line is appended.
    pub fn add(&mut self, title: &str, price: &str, image: &str, now_ms: u64) -> AddOutcome {
        if let Some(existing) = self.items.iter_mut().find(|item| item.title == title) {
            existing.quantity = existing.quantity.saturating_add(1);
            return AddOutcome::Incremented { id: existing.id, quantity: existing.quantity };
        }

        let id = self.next_id(now_ms);
        self.items.push(CartItem {
            title: title.to_string(),
            price: price.to_string(),
            image: image.to_string(),
            quantity: 1,
            id,
        });
        AddOutcome::Added { id }
    }

    /// Remove the line with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Total number of units across all lines.
    pub fn count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn get(&self, id: u64) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // Two adds inside the same millisecond must not share an id.
    fn next_id(&self, now_ms: u64) -> u64 {
        match self.items.iter().map(|item| item.id).max() {
            Some(last) if last >= now_ms => last + 1,
            _ => now_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_title_increments_quantity() {
        let mut cart = Cart::new();
        let first = cart.add("iPhone 14", "৳ 1,20,000", "img/iphone.jpg", 1_000);
        let second = cart.add("iPhone 14", "৳ 1,20,000", "img/iphone.jpg", 2_000);

        assert_eq!(first, AddOutcome::Added { id: 1_000 });
        assert_eq!(second, AddOutcome::Incremented { id: 1_000, quantity: 2 });
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.count(), 2);
    }

    #[test]
    fn test_title_match_is_exact() {
        let mut cart = Cart::new();
        cart.add("Yamaha R15", "৳ 5,00,000", "a.jpg", 1);
        cart.add("yamaha r15", "৳ 5,00,000", "a.jpg", 2);
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn test_remove_leaves_other_lines_untouched() {
        let mut cart = Cart::new();
        cart.add("Phone", "100", "p.jpg", 10);
        cart.add("Watch", "200", "w.jpg", 20);
        cart.add("Watch", "200", "w.jpg", 30);
        cart.add("Laptop", "300", "l.jpg", 40);

        assert!(cart.remove(10));

        let titles: Vec<_> = cart.items().iter().map(|i| (i.title.as_str(), i.quantity)).collect();
        assert_eq!(titles, vec![("Watch", 2), ("Laptop", 1)]);
        assert_eq!(cart.count(), 3);
    }

    #[test]
    fn test_remove_unknown_id() {
        let mut cart = Cart::new();
        cart.add("Phone", "100", "p.jpg", 10);
        assert!(!cart.remove(99));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_ids_unique_within_same_millisecond() {
        let mut cart = Cart::new();
        cart.add("A", "1", "a", 500);
        cart.add("B", "2", "b", 500);
        cart.add("C", "3", "c", 499);

        let ids: Vec<u64> = cart.items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![500, 501, 502]);
    }

    #[test]
    fn test_json_shape_is_plain_array() {
        let mut cart = Cart::new();
        cart.add("Honda CB", "৳ 2,00,000", "h.jpg", 1_700_000_000_000);

        let json = serde_json::to_value(&cart).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{
                "title": "Honda CB",
                "price": "৳ 2,00,000",
                "image": "h.jpg",
                "quantity": 1,
                "id": 1_700_000_000_000u64
            }])
        );
    }
}
