//! Product Card Markup
//!
//! Reading the server-rendered `.product` cards.

use leptos_enhance::{query_in, text_in};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlImageElement};

/// Raw text of one product card.
#[derive(Debug, Clone, Default)]
pub struct CardText {
    pub title: String,
    pub price_text: String,
    pub image: String,
}

pub fn read_card(card: &Element) -> CardText {
    CardText {
        title: text_in(card, ".product-title").trim().to_string(),
        price_text: text_in(card, ".product-price").trim().to_string(),
        image: image_src(card),
    }
}

/// Resolved `src` of the card's first image.
pub fn image_src(card: &Element) -> String {
    query_in(card, "img")
        .and_then(|img| img.dyn_into::<HtmlImageElement>().ok())
        .map(|img| img.src())
        .unwrap_or_default()
}

pub fn show(card: &Element, visible: bool) {
    leptos_enhance::set_style(card, "display", if visible { "block" } else { "none" });
}
