//! Storefront Bootstrap
//!
//! Installs logging, waits for the DOM, loads the site config and wires
//! every enhancement into the page under one reactive owner.

use bazar_core::SiteConfig;
use leptos::prelude::*;
use leptos_enhance::{document, inject_style, listen, mount_into};
use log::LevelFilter;

use crate::components::NotificationToast;
use crate::context::ShopContext;
use crate::store::ShopState;
use crate::{cart, catalog, globals, home, navigation, search, styles};

const CONFIG_ELEMENT_ID: &str = "bazar-config";

pub fn start() {
    if let Err(err) = console_logger::init(LevelFilter::Info) {
        web_sys::console::warn_1(&format!("logger already installed: {err}").into());
    }

    let Some(doc) = document() else { return };
    if doc.ready_state() == "loading" {
        listen(&doc, "DOMContentLoaded", move |_: web_sys::Event| boot());
    } else {
        boot();
    }
}

fn boot() {
    let config = load_config();
    match config.log_level() {
        Ok(level) => {
            if let Some(logger) = console_logger::global() {
                logger.set_level(level);
            }
        }
        Err(err) => log::warn!("{err}"),
    }

    if let Err(err) = any_spawner::Executor::init_wasm_bindgen() {
        log::debug!("executor already initialised: {err:?}");
    }

    let owner = Owner::new();
    owner.with(|| {
        let state = ShopState::new(cart::load_cart(&config), home::load_clicks(&config));
        let ctx = ShopContext::new(config.clone(), state);
        provide_context(ctx);

        inject_style(styles::ANIMATIONS);
        if let Some(body) = document().and_then(|doc| doc.body()) {
            mount_into(&body, NotificationToast);
        }

        cart::init(ctx);
        search::init(ctx);
        navigation::init(ctx);
        home::init(ctx);
        catalog::init(ctx);
        globals::expose(ctx);
    });
    // Listeners and timers outlive this call; keep their owner alive too.
    std::mem::forget(owner);

    log::info!("BazarBD ready");
}

/// Site config from the page's JSON script tag, or defaults.
fn load_config() -> SiteConfig {
    let raw = document()
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());
    let Some(raw) = raw else {
        return SiteConfig::default();
    };

    match SiteConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            log::error!("invalid #{CONFIG_ELEMENT_ID}, using defaults: {err}");
            SiteConfig::default()
        }
    }
}
