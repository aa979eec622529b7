//! Filter Panel Component
//!
//! Sort, price, availability and category controls for product listings.
//! The panel only writes `FilterState`; applying it to the cards happens in
//! `catalog::init`.

use bazar_core::{results_label, Availability, Category, SortKey};
use leptos::prelude::*;

use crate::catalog::FilterState;

#[component]
pub fn FilterPanel(state: FilterState, categories: Vec<Category>) -> impl IntoView {
    let (min_input, set_min_input) = signal(String::new());
    let (max_input, set_max_input) = signal(String::new());

    let on_sort = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        state.sort.set(value.parse().unwrap_or_default());
    };

    let apply_price = move |_| {
        state.filters.update(|f| f.set_price_range(&min_input.get_untracked(), &max_input.get_untracked()));
    };

    let on_availability = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        let availability = Availability::parse(&value).unwrap_or_default();
        state.filters.update(|f| f.availability = availability);
    };

    let on_category = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        state.filters.update(|f| f.category = Category::parse(&value));
    };

    let clear = move |_| {
        set_min_input.set(String::new());
        set_max_input.set(String::new());
        state.clear();
    };

    let toggle_view = move |_| state.list_view.update(|list| *list = !*list);

    view! {
        <div class="container">
            <div class="filter-controls">
                <div class="filter-group">
                    <label>"Sort by:"</label>
                    <select id="sortSelect" on:change=on_sort prop:value=move || state.sort.get().as_str()>
                        {SortKey::ALL.into_iter().map(|key| view! {
                            <option value=key.as_str()>{key.label()}</option>
                        }).collect_view()}
                    </select>
                </div>

                <div class="filter-group">
                    <label>"Price Range:"</label>
                    <div class="price-range">
                        <input
                            type="number"
                            id="minPrice"
                            placeholder="Min"
                            min="0"
                            prop:value=move || min_input.get()
                            on:input=move |ev| set_min_input.set(event_target_value(&ev))
                        />
                        <span>"-"</span>
                        <input
                            type="number"
                            id="maxPrice"
                            placeholder="Max"
                            min="0"
                            prop:value=move || max_input.get()
                            on:input=move |ev| set_max_input.set(event_target_value(&ev))
                        />
                        <button id="applyPriceFilter" on:click=apply_price>"Apply"</button>
                    </div>
                </div>

                <div class="filter-group">
                    <label>"Availability:"</label>
                    <select
                        id="availabilityFilter"
                        on:change=on_availability
                        prop:value=move || state.filters.get().availability.as_str()
                    >
                        <option value="all">"All Products"</option>
                        <option value="in-stock">"In Stock"</option>
                        <option value="out-of-stock">"Out of Stock"</option>
                    </select>
                </div>

                {(categories.len() > 1).then(|| view! {
                    <div class="filter-group">
                        <label>"Category:"</label>
                        <select
                            id="categoryFilter"
                            on:change=on_category
                            prop:value=move || state.filters.get().category.map_or("all", |c| c.as_str())
                        >
                            <option value="all">"All Categories"</option>
                            {categories.iter().map(|category| view! {
                                <option value=category.as_str()>{category.label()}</option>
                            }).collect_view()}
                        </select>
                    </div>
                })}

                <div class="filter-group">
                    <button id="clearFilters" on:click=clear>"Clear All"</button>
                    <button id="toggleView" on:click=toggle_view>
                        {move || if state.list_view.get() { "List View" } else { "Grid View" }}
                    </button>
                </div>

                <div class="results-count">
                    <span id="resultsCount">{move || results_label(state.visible.get())}</span>
                </div>
            </div>
        </div>
    }
}
