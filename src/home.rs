//! Home Page
//!
//! Banner slider, category card effects and click tracking, and the stats
//! section. Each piece is skipped when its anchors are missing.

use bazar_core::{ClickCounts, SiteConfig};
use leptos::prelude::*;
use leptos_enhance::{after, every, inject_style, listen, mount_before, query, query_all, set_style, text_in};
use web_sys::MouseEvent;

use crate::components::{BannerSlider, StatsSection};
use crate::context::ShopContext;
use crate::storage::with_storage;
use crate::store::ShopStateStoreFields;
use crate::styles;

pub fn init(ctx: ShopContext) {
    bind_category_cards(ctx);
    mount_banner(ctx);
    animate_card_entrance(ctx);
    mount_stats(ctx);
}

fn bind_category_cards(ctx: ShopContext) {
    for card in query_all(".card") {
        let hovered = card.clone();
        listen(&card, "mouseenter", move |_: MouseEvent| {
            set_style(&hovered, "transform", "scale(1.05)");
            set_style(&hovered, "transition", "transform 0.3s ease");
        });

        let left = card.clone();
        listen(&card, "mouseleave", move |_: MouseEvent| {
            set_style(&left, "transform", "scale(1)");
        });

        let clicked = card.clone();
        listen(&card, "click", move |_: MouseEvent| {
            track_category_click(ctx, &text_in(&clicked, "h2"));
        });
    }
}

/// Load stored click counts. Unreadable data is logged and treated as empty.
pub fn load_clicks(config: &SiteConfig) -> ClickCounts {
    with_storage(|storage| match ClickCounts::load(storage, &config.clicks_key) {
        Ok(clicks) => clicks,
        Err(err) => {
            log::warn!("ignoring stored click counts: {err}");
            ClickCounts::default()
        }
    })
}

/// Count a category click. Re-reads storage first so other tabs' clicks
/// are not lost.
pub fn track_category_click(ctx: ShopContext, label: &str) {
    let key = ctx.config(|c| c.clicks_key.clone());
    let result = with_storage(|storage| {
        let mut clicks = ClickCounts::load(storage, &key).unwrap_or_else(|err| {
            log::warn!("resetting click counts: {err}");
            ClickCounts::default()
        });
        clicks.record(label);
        clicks.save(storage, &key).map(|_| clicks)
    });

    match result {
        Ok(clicks) => *ctx.store.clicks().write() = clicks,
        Err(err) => log::error!("failed to save click counts: {err}"),
    }
    log::info!("Category clicked: {label}");
}

fn animate_card_entrance(ctx: ShopContext) {
    let stagger_ms = ctx.config(|c| c.card_stagger_ms);
    for (index, card) in query_all(".card").into_iter().enumerate() {
        set_style(&card, "opacity", "0");
        set_style(&card, "transform", "translateY(30px)");
        set_style(&card, "transition", "all 0.6s ease");

        after(stagger_ms.saturating_mul(index as u32), move || {
            set_style(&card, "opacity", "1");
            set_style(&card, "transform", "translateY(0)");
        });
    }
}

fn mount_banner(ctx: ShopContext) {
    let (Some(_main), Some(categories)) = (query("main"), query(".card_container")) else {
        return;
    };
    if query(".banner-slider").is_some() {
        return;
    }

    inject_style(styles::BANNER);
    if mount_before(&categories, "div", "banner-slider", BannerSlider).is_none() {
        return;
    }

    let interval_ms = ctx.config(|c| c.banner_interval_ms);
    let slider = ctx.slider;
    every(interval_ms, move || {
        slider.update(|s| {
            s.advance();
        });
    });
}

fn mount_stats(_ctx: ShopContext) {
    let (Some(_main), Some(footer)) = (query("main"), query(".footer")) else {
        return;
    };
    if query(".stats-section").is_some() {
        return;
    }

    inject_style(styles::STATS);
    mount_before(&footer, "section", "stats-section", StatsSection);
}
