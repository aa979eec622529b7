//! Global Storefront State
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use bazar_core::{Cart, ClickCounts, Notice};
use reactive_stores::Store;

/// Page-wide state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ShopState {
    /// Cart mirrored from storage
    pub cart: Cart,
    /// Category click counts, refreshed from storage on every click and
    /// exposed as `BazarBD.getCategoryClicks()`
    pub clicks: ClickCounts,
    /// Toast currently on screen
    pub notice: Option<ActiveNotice>,
    /// Last notice id handed out
    pub notice_seq: u64,
}

/// A notice plus its animation phase.
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveNotice {
    pub notice: Notice,
    /// Slide-out animation is playing
    pub leaving: bool,
}

/// Type alias for the store
pub type ShopStore = Store<ShopState>;

impl ShopState {
    pub fn new(cart: Cart, clicks: ClickCounts) -> Self {
        Self { cart, clicks, ..Default::default() }
    }
}
