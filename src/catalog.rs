//! Product Manager
//!
//! Product-listing pages: scrape the cards once, mount the filter panel and
//! re-apply filters and sort whenever the panel changes them.

use std::rc::Rc;

use bazar_core::{Catalog, CatalogView, Product, ProductFilters, SortKey};
use leptos::prelude::*;
use leptos_enhance::{inject_style, mount_before, query, query_all};
use web_sys::Element;

use crate::components::FilterPanel;
use crate::context::ShopContext;
use crate::dom::{read_card, show};
use crate::styles;

/// Filter panel state shared between the panel and the apply effect.
#[derive(Clone, Copy)]
pub struct FilterState {
    pub filters: RwSignal<ProductFilters>,
    pub sort: RwSignal<SortKey>,
    pub list_view: RwSignal<bool>,
    /// Number of products currently shown
    pub visible: RwSignal<usize>,
}

impl FilterState {
    pub fn new(total: usize) -> Self {
        Self {
            filters: RwSignal::new(ProductFilters::default()),
            sort: RwSignal::new(SortKey::Default),
            list_view: RwSignal::new(false),
            visible: RwSignal::new(total),
        }
    }

    /// Back to everything visible in page order.
    pub fn clear(&self) {
        self.filters.set(ProductFilters::default());
        self.sort.set(SortKey::Default);
    }
}

/// Scraped catalog paired with the card elements it came from.
pub struct ProductManager {
    catalog: Catalog,
    elements: Vec<Element>,
}

impl ProductManager {
    pub fn scrape() -> Self {
        let elements = query_all(".product");
        let products = elements
            .iter()
            .enumerate()
            .map(|(index, element)| {
                let card = read_card(element);
                Product::from_card(index, &card.title, &card.price_text, &card.image)
            })
            .collect();
        Self { catalog: Catalog::new(products), elements }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Expose the inferred category to stylesheets.
    fn tag_categories(&self) {
        for (product, element) in self.catalog.products().iter().zip(&self.elements) {
            if let Err(err) = element.set_attribute("data-category", product.category.as_str()) {
                log::debug!("failed to tag product {}: {:?}", product.id, err);
            }
        }
    }

    /// Toggle visibility and move every card to its sorted slot within its
    /// own container.
    pub fn apply(&self, view: &CatalogView) {
        for placement in &view.placements {
            let Some(element) = self.elements.get(placement.id) else { continue };
            show(element, placement.visible);
            if let Some(parent) = element.parent_node() {
                if let Err(err) = parent.append_child(element) {
                    log::debug!("failed to move product {}: {:?}", placement.id, err);
                }
            }
        }
    }
}

pub fn init(_ctx: ShopContext) {
    let (Some(_main), Some(section)) = (query("main"), query(".products")) else {
        return;
    };
    if query(".filter-panel").is_some() {
        return;
    }

    let manager = ProductManager::scrape();
    manager.tag_categories();
    log::debug!("product manager: {} products scraped", manager.catalog().len());

    let state = FilterState::new(manager.catalog().len());
    let categories = manager.catalog().categories();

    inject_style(styles::FILTERS);
    let mounted = mount_before(&section, "div", "filter-panel", move || {
        view! { <FilterPanel state=state categories=categories /> }
    });
    if mounted.is_none() {
        return;
    }

    let manager = Rc::new(manager);
    Effect::new(move |_| {
        let filters = state.filters.get();
        let sort = state.sort.get();
        let view = manager.catalog().view(&filters, sort);
        manager.apply(&view);
        state.visible.set(view.visible_count());
    });

    Effect::new(move |_| {
        let list_view = state.list_view.get();
        if let Err(err) = section.class_list().toggle_with_force("list-view", list_view) {
            log::debug!("failed to toggle list view: {:?}", err);
        }
    });
}
