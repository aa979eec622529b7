//! Navigation Affordances
//!
//! Mobile menu, smooth in-page scrolling, page jumps and link click logging.

use leptos_enhance::{listen, mount_into, query, query_all, scroll_into_view_smooth, set_style, style_value};
use web_sys::MouseEvent;

use crate::components::MobileMenuButton;
use crate::context::ShopContext;

pub fn init(_ctx: ShopContext) {
    mount_mobile_menu();
    bind_smooth_scroll();
    bind_link_logging();
}

fn mount_mobile_menu() {
    let Some(header) = query(".header-main .container") else { return };
    if query(".mobile-menu-btn").is_some() {
        return;
    }
    mount_into(&header, MobileMenuButton);
}

/// Flip header actions and search between shown and hidden.
pub fn toggle_mobile_menu() {
    let (Some(actions), Some(search)) = (query(".header-actions"), query(".search-container")) else {
        return;
    };
    let display = if style_value(&actions, "display") == "flex" { "none" } else { "flex" };
    set_style(&actions, "display", display);
    set_style(&search, "display", display);
}

fn bind_smooth_scroll() {
    for anchor in query_all(r##"a[href^="#"]"##) {
        let link = anchor.clone();
        listen(&anchor, "click", move |ev: MouseEvent| {
            ev.prevent_default();
            // A bare "#" is not a valid selector; query() treats it as no match.
            let Some(target) = link.get_attribute("href").and_then(|href| query(&href)) else {
                return;
            };
            scroll_into_view_smooth(&target);
        });
    }
}

fn bind_link_logging() {
    for anchor in query_all("a") {
        let link = anchor.clone();
        listen(&anchor, "click", move |_: MouseEvent| {
            let text = link.text_content().unwrap_or_default();
            let href = link.get_attribute("href").unwrap_or_else(|| "null".to_string());
            log::info!("Link clicked: {} -> {}", text.trim(), href);
        });
    }
}

/// Navigate to a named page. Unknown names do nothing.
pub fn show_page(ctx: ShopContext, name: &str) {
    let Some(url) = ctx.config(|c| c.page_url(name).map(str::to_string)) else {
        log::debug!("showPage: unknown page `{name}`");
        return;
    };
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.location().set_href(&url) {
            log::warn!("failed to navigate to {url}: {:?}", err);
        }
    }
}

pub fn scroll_to_categories() {
    if let Some(section) = query(".card_container") {
        scroll_into_view_smooth(&section);
    }
}
