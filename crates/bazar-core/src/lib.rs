//! BazarBD Storefront Core
//!
//! Browser-independent domain logic behind the storefront enhancements:
//! - cart: persisted cart with title-keyed quantities
//! - clicks: category click analytics
//! - catalog: scraped product records, filters and sorting
//! - banner / counter: promotional slider and stats animation state
//! - config: site configuration with defaults
//!
//! Persistence goes through the [`KeyValueStore`] trait so the browser's
//! `localStorage` and the in-memory store are interchangeable.

pub mod banner;
pub mod cart;
pub mod catalog;
pub mod category;
pub mod clicks;
pub mod config;
pub mod counter;
pub mod error;
pub mod notice;
pub mod price;
pub mod search;
pub mod sort;
pub mod storage;

#[cfg(test)]
mod tests;

pub use banner::{default_banners, Banner, Slider};
pub use cart::{AddOutcome, Cart, CartItem};
pub use catalog::{results_label, Availability, Catalog, CatalogView, Placement, Product, ProductFilters};
pub use category::{detect_category, Category};
pub use clicks::ClickCounts;
pub use config::SiteConfig;
pub use counter::{default_stats, format_count, CounterAnimation, Stat};
pub use error::{ConfigError, StoreError};
pub use notice::{Notice, NoticeKind};
pub use search::{matches_query, normalize_query, SearchOutcome};
pub use sort::{order_by, SortKey};
pub use storage::{KeyValueStore, MemoryStore};
