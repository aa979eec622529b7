//! Cart Actions
//!
//! Cart mutations shared by the buy buttons, the cart list and the global
//! `addToCart` / `removeFromCart` functions. Every mutation is written back
//! to storage immediately.

use bazar_core::price::is_out_of_stock;
use bazar_core::{AddOutcome, Cart, NoticeKind, SiteConfig};
use leptos::prelude::*;
use leptos_enhance::{listen, query, query_all};
use web_sys::MouseEvent;

use crate::components::CartList;
use crate::context::ShopContext;
use crate::dom::read_card;
use crate::notify::show_notification;
use crate::storage::with_storage;
use crate::store::ShopStateStoreFields;

/// Load the stored cart. Unreadable data is logged and treated as empty.
pub fn load_cart(config: &SiteConfig) -> Cart {
    with_storage(|storage| match Cart::load(storage, &config.cart_key) {
        Ok(cart) => cart,
        Err(err) => {
            log::warn!("ignoring stored cart: {err}");
            Cart::default()
        }
    })
}

pub fn init(ctx: ShopContext) {
    // Keep #cartCount in sync with the store.
    Effect::new(move |_| {
        let count = ctx.store.cart().read().count();
        render_count(count);
    });

    bind_buy_buttons(ctx);

    if let Some(container) = query(".cart-items") {
        leptos_enhance::mount_into(&container, CartList);
    }
}

pub fn add_to_cart(ctx: ShopContext, title: &str, price: &str, image: &str) {
    let now = js_sys::Date::now() as u64;
    let outcome = ctx.store.cart().write().add(title, price, image, now);
    match outcome {
        AddOutcome::Added { id } => log::debug!("cart: added {title} as {id}"),
        AddOutcome::Incremented { quantity, .. } => log::debug!("cart: {title} x{quantity}"),
    }
    persist(ctx);
    show_notification(ctx, format!("{title} added to cart!"), NoticeKind::Success);
}

pub fn remove_from_cart(ctx: ShopContext, id: u64) {
    if !ctx.store.cart().write().remove(id) {
        log::debug!("cart: no item with id {id}");
    }
    persist(ctx);
    show_notification(ctx, "Item removed from cart!", NoticeKind::Info);
}

/// Write the current unit count into `#cartCount`.
pub fn update_cart_count(ctx: ShopContext) {
    render_count(ctx.store.cart().read_untracked().count());
}

fn render_count(count: u64) {
    if let Some(el) = leptos_enhance::document().and_then(|doc| doc.get_element_by_id("cartCount")) {
        el.set_text_content(Some(&count.to_string()));
    }
}

fn persist(ctx: ShopContext) {
    let key = ctx.config(|c| c.cart_key.clone());
    let result = with_storage(|storage| ctx.store.cart().read_untracked().save(storage, &key));
    if let Err(err) = result {
        log::error!("failed to save cart: {err}");
    }
}

fn bind_buy_buttons(ctx: ShopContext) {
    for button in query_all(".product-btn") {
        let source = button.clone();
        listen(&button, "click", move |ev: MouseEvent| {
            ev.prevent_default();
            let Some(card) = source.closest(".product").ok().flatten() else { return };
            let card = read_card(&card);

            if is_out_of_stock(&card.price_text) {
                show_notification(ctx, "Sorry, this product is out of stock!", NoticeKind::Error);
                return;
            }
            add_to_cart(ctx, &card.title, &card.price_text, &card.image);
        });
    }
}
