//! Search, Sort & Price Filter
//!
//! Works directly on the `.product` cards of any page.

use bazar_core::price::parse_display_price;
use bazar_core::{matches_query, order_by, NoticeKind, SearchOutcome, SortKey};
use leptos_enhance::{listen, query, query_all, text_in};
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, KeyboardEvent, MouseEvent};

use crate::context::ShopContext;
use crate::dom::{read_card, show};
use crate::notify::show_notification;

pub fn init(ctx: ShopContext) {
    let (Some(search_box), Some(search_btn)) = (query(".search-box"), query(".search-btn")) else {
        return;
    };
    listen(&search_btn, "click", move |_: MouseEvent| perform_search(ctx));
    listen(&search_box, "keypress", move |ev: KeyboardEvent| {
        if ev.key() == "Enter" {
            perform_search(ctx);
        }
    });
}

/// Show cards whose title or price text contains the search box text.
pub fn perform_search(ctx: ShopContext) {
    let raw = query(".search-box")
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value());

    let outcome = SearchOutcome::run(raw.as_deref(), |needle| {
        let mut found = 0;
        for card in query_all(".product") {
            let text = read_card(&card);
            let hit = matches_query(needle, &text.title, &text.price_text);
            show(&card, hit);
            if hit {
                found += 1;
            }
        }
        found
    });
    let Some(outcome) = outcome else {
        log::debug!("performSearch: no search box on this page");
        return;
    };

    let (message, kind) = outcome.message();
    show_notification(ctx, message, kind);
}

/// Show only cards priced within `[min, max]`.
pub fn filter_by_price(ctx: ShopContext, min: f64, max: f64) {
    let mut shown = 0;
    for card in query_all(".product") {
        let price = parse_display_price(&text_in(&card, ".product-price"));
        let hit = price >= min && price <= max;
        show(&card, hit);
        if hit {
            shown += 1;
        }
    }
    show_notification(ctx, format!("Showing {shown} products in price range"), NoticeKind::Success);
}

/// Rebuild `.all-products` with its cards in `criteria` order. Unknown
/// criteria keep the current order.
pub fn sort_products(ctx: ShopContext, criteria: &str) {
    let Some(container) = query(".all-products") else { return };

    let cards = query_all(".product");
    let entries: Vec<(String, f64)> = cards
        .iter()
        .map(|card| {
            let text = read_card(card);
            let price = parse_display_price(&text.price_text);
            (text.title, price)
        })
        .collect();
    let key = criteria.parse::<SortKey>().unwrap_or_default();

    container.set_inner_html("");
    for index in order_by(key, &entries) {
        if let Err(err) = container.append_child(&cards[index]) {
            log::debug!("sort: failed to re-append card {index}: {:?}", err);
        }
    }

    show_notification(ctx, format!("Products sorted by {criteria}"), NoticeKind::Success);
}
