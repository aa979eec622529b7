//! Shop Context
//!
//! Shared handles provided via Leptos Context API and captured by the plain
//! DOM listeners, which run outside any reactive owner.

use bazar_core::{SiteConfig, Slider};
use leptos::prelude::*;

use crate::store::{ShopState, ShopStore};

/// App-wide handles; all fields are arena-backed so this is `Copy`.
#[derive(Clone, Copy)]
pub struct ShopContext {
    /// Cart, click counts and notification slot
    pub store: ShopStore,
    /// Active banner slide
    pub slider: RwSignal<Slider>,
    config: StoredValue<SiteConfig>,
}

impl ShopContext {
    pub fn new(config: SiteConfig, state: ShopState) -> Self {
        Self {
            store: ShopStore::new(state),
            slider: RwSignal::new(Slider::new(config.banners.len())),
            config: StoredValue::new(config),
        }
    }

    /// Read from the site configuration.
    pub fn config<R>(&self, f: impl FnOnce(&SiteConfig) -> R) -> R {
        self.config.with_value(f)
    }
}

pub fn use_shop() -> ShopContext {
    use_context::<ShopContext>().expect("ShopContext should be provided")
}
