use leptos::prelude::*;

use crate::navigation::toggle_mobile_menu;

#[component]
pub fn MobileMenuButton() -> impl IntoView {
    view! {
        <button class="mobile-menu-btn" on:click=move |_| toggle_mobile_menu()>
            "☰"
        </button>
    }
}
