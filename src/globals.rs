//! Global Functions
//!
//! Functions the static pages call from inline handlers, e.g.
//! `onclick="addToCart('iPhone 14', '৳ 1,20,000', 'img/iphone.jpg')"`.
//! Arguments arrive as loose JS values and are coerced leniently.

use bazar_core::NoticeKind;
use js_sys::{Object, Reflect};
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;

use crate::cart::{add_to_cart, remove_from_cart, update_cart_count};
use crate::context::ShopContext;
use crate::navigation::{scroll_to_categories, show_page};
use crate::notify::show_notification;
use crate::search::{filter_by_price, perform_search, sort_products};
use crate::store::ShopStateStoreFields;

pub fn expose(ctx: ShopContext) {
    let Some(window) = web_sys::window() else { return };
    let window: &JsValue = &window;
    let namespace = Object::new();

    let add = Closure::<dyn Fn(JsValue, JsValue, JsValue)>::new(move |title: JsValue, price: JsValue, image: JsValue| {
        add_to_cart(ctx, &text(&title), &text(&price), &text(&image));
    });
    let remove = Closure::<dyn Fn(JsValue)>::new(move |id: JsValue| match id.as_f64() {
        Some(id) if id >= 0.0 => remove_from_cart(ctx, id as u64),
        _ => log::warn!("removeFromCart: invalid id {:?}", id),
    });
    let update_count = Closure::<dyn Fn()>::new(move || update_cart_count(ctx));
    let notify = Closure::<dyn Fn(JsValue, JsValue)>::new(move |message: JsValue, kind: JsValue| {
        let kind = kind.as_string().map(|k| NoticeKind::parse_or_info(&k)).unwrap_or_default();
        show_notification(ctx, text(&message), kind);
    });
    let sort = Closure::<dyn Fn(JsValue)>::new(move |criteria: JsValue| sort_products(ctx, &text(&criteria)));
    let filter = Closure::<dyn Fn(JsValue, JsValue)>::new(move |min: JsValue, max: JsValue| {
        filter_by_price(ctx, min.as_f64().unwrap_or(0.0), max.as_f64().unwrap_or(f64::INFINITY));
    });
    let search = Closure::<dyn Fn()>::new(move || perform_search(ctx));
    let get_cart = Closure::<dyn Fn() -> JsValue>::new(move || {
        ctx.store
            .cart()
            .with_untracked(|cart| serde_wasm_bindgen::to_value(cart))
            .unwrap_or(JsValue::NULL)
    });
    let get_clicks = Closure::<dyn Fn() -> JsValue>::new(move || {
        let counts = Object::new();
        ctx.store.clicks().with_untracked(|clicks| {
            for (label, count) in clicks.iter() {
                export(&counts, label, &JsValue::from_f64(count as f64));
            }
        });
        counts.into()
    });
    let page = Closure::<dyn Fn(JsValue)>::new(move |name: JsValue| show_page(ctx, &text(&name)));
    let slide = Closure::<dyn Fn(JsValue)>::new(move |n: JsValue| {
        let Some(n) = n.as_f64().filter(|n| *n >= 1.0) else { return };
        ctx.slider.update(|s| {
            s.go_to(n as usize);
        });
    });
    let categories = Closure::<dyn Fn()>::new(scroll_to_categories);

    export(window, "addToCart", add.as_ref());
    export(window, "removeFromCart", remove.as_ref());
    export(window, "showPage", page.as_ref());
    export(window, "currentSlide", slide.as_ref());
    export(window, "scrollToCategories", categories.as_ref());

    export(&namespace, "addToCart", add.as_ref());
    export(&namespace, "removeFromCart", remove.as_ref());
    export(&namespace, "updateCartCount", update_count.as_ref());
    export(&namespace, "showNotification", notify.as_ref());
    export(&namespace, "sortProducts", sort.as_ref());
    export(&namespace, "filterByPrice", filter.as_ref());
    export(&namespace, "performSearch", search.as_ref());
    export(&namespace, "getCart", get_cart.as_ref());
    export(&namespace, "getCategoryClicks", get_clicks.as_ref());
    export(window, "BazarBD", &namespace);

    add.forget();
    remove.forget();
    update_count.forget();
    notify.forget();
    sort.forget();
    filter.forget();
    search.forget();
    get_cart.forget();
    get_clicks.forget();
    page.forget();
    slide.forget();
    categories.forget();
}

fn export(target: &JsValue, name: &str, value: &JsValue) {
    if let Err(err) = Reflect::set(target, &JsValue::from_str(name), value) {
        log::warn!("failed to expose {name}: {:?}", err);
    }
}

/// Strings pass through; numbers and other primitives are stringified.
fn text(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    if let Some(n) = value.as_f64() {
        return n.to_string();
    }
    String::new()
}
