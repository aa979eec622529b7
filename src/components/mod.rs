//! UI Components
//!
//! Leptos views mounted into the static pages next to their existing markup.

mod banner_slider;
mod cart_list;
mod filter_panel;
mod mobile_menu;
mod notification;
mod stats_section;

pub use banner_slider::BannerSlider;
pub use cart_list::CartList;
pub use filter_panel::FilterPanel;
pub use mobile_menu::MobileMenuButton;
pub use notification::NotificationToast;
pub use stats_section::StatsSection;
