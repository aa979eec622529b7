//! Storage Integration Tests
//!
//! Cart and click counts persisted through the in-memory key/value store.

use crate::cart::Cart;
use crate::clicks::ClickCounts;
use crate::config::SiteConfig;
use crate::error::StoreError;
use crate::storage::{KeyValueStore, MemoryStore};

fn setup() -> (MemoryStore, SiteConfig) {
    (MemoryStore::new(), SiteConfig::default())
}

#[test]
fn test_cart_survives_reload() {
    let (store, config) = setup();

    let mut cart = Cart::load(&store, &config.cart_key).expect("load empty cart");
    assert!(cart.is_empty());
    cart.add("iPhone 14", "৳ 1,20,000", "img/iphone.jpg", 1_000);
    cart.add("iPhone 14", "৳ 1,20,000", "img/iphone.jpg", 1_500);
    cart.add("Yamaha R15", "৳ 5,25,000", "img/r15.jpg", 2_000);
    cart.save(&store, &config.cart_key).expect("save cart");

    let reloaded = Cart::load(&store, &config.cart_key).expect("reload cart");
    assert_eq!(reloaded, cart);
    assert_eq!(reloaded.count(), 3);
}

#[test]
fn test_remove_then_reload() {
    let (store, config) = setup();

    let mut cart = Cart::new();
    cart.add("A", "1", "a.jpg", 10);
    cart.add("B", "2", "b.jpg", 20);
    cart.add("B", "2", "b.jpg", 30);
    cart.save(&store, &config.cart_key).unwrap();

    let mut cart = Cart::load(&store, &config.cart_key).unwrap();
    assert!(cart.remove(10));
    cart.save(&store, &config.cart_key).unwrap();

    let reloaded = Cart::load(&store, &config.cart_key).unwrap();
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded.get(20).map(|i| i.quantity), Some(2));
}

#[test]
fn test_reads_cart_written_by_legacy_script() {
    let (store, config) = setup();
    store
        .set_item(
            &config.cart_key,
            r#"[{"title":"Honda CB","price":"৳ 2,10,000","image":"h.jpg","quantity":3,"id":1700000000000}]"#,
        )
        .unwrap();

    let cart = Cart::load(&store, &config.cart_key).unwrap();
    assert_eq!(cart.count(), 3);
    assert_eq!(cart.items()[0].title, "Honda CB");
}

#[test]
fn test_numeric_legacy_price_keeps_whole_cart() {
    let (store, config) = setup();
    store
        .set_item(
            &config.cart_key,
            r#"[{"title":"Old","price":"৳ 500","image":"o.jpg","quantity":2,"id":1},
                {"title":"Honda CB","price":210000,"image":"h.jpg","quantity":1,"id":2},
                {"title":"Free","price":null,"image":"f.jpg","quantity":1,"id":3}]"#,
        )
        .unwrap();

    let mut cart = Cart::load(&store, &config.cart_key).expect("numeric price loads");
    assert_eq!(cart.len(), 3);
    assert_eq!(cart.get(2).map(|i| i.price.as_str()), Some("210000"));
    assert_eq!(cart.get(3).map(|i| i.price.as_str()), Some(""));

    cart.add("New", "৳ 100", "n.jpg", 10);
    cart.save(&store, &config.cart_key).unwrap();

    let reloaded = Cart::load(&store, &config.cart_key).unwrap();
    assert_eq!(reloaded.len(), 4);
    assert_eq!(reloaded.get(1).map(|i| i.quantity), Some(2));
}

#[test]
fn test_corrupt_cart_is_reported() {
    let (store, config) = setup();
    store.set_item(&config.cart_key, "[{\"title\":").unwrap();

    let err = Cart::load(&store, &config.cart_key).unwrap_err();
    assert!(matches!(err, StoreError::Corrupt { .. }));
    // The bad value is left alone until the next successful write.
    assert_eq!(store.get_item(&config.cart_key).unwrap().as_deref(), Some("[{\"title\":"));
}

#[test]
fn test_click_counts_persist_separately() {
    let (store, config) = setup();

    let mut clicks = ClickCounts::load(&store, &config.clicks_key).unwrap();
    clicks.record("Electronics");
    clicks.record("Electronics");
    clicks.save(&store, &config.clicks_key).unwrap();

    let mut clicks = ClickCounts::load(&store, &config.clicks_key).unwrap();
    assert_eq!(clicks.record("Electronics"), 3);
    assert!(Cart::load(&store, &config.cart_key).unwrap().is_empty());
}

#[test]
fn test_click_counts_merge_across_reloads() {
    let (store, config) = setup();

    // Two open pages each re-read storage before counting.
    for label in ["Electronics", "Fashion", "Electronics"] {
        let mut clicks = ClickCounts::load(&store, &config.clicks_key).unwrap();
        clicks.record(label);
        clicks.save(&store, &config.clicks_key).unwrap();
    }

    let clicks = ClickCounts::load(&store, &config.clicks_key).unwrap();
    let all: Vec<_> = clicks.iter().collect();
    assert_eq!(all, vec![("Electronics", 2), ("Fashion", 1)]);
    assert_eq!(
        store.get_item(&config.clicks_key).unwrap().as_deref(),
        Some(r#"{"Electronics":2,"Fashion":1}"#)
    );
}
