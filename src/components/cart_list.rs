//! Cart List Component

use leptos::prelude::*;

use crate::cart::remove_from_cart;
use crate::context::use_shop;
use crate::store::ShopStateStoreFields;

/// Cart lines rendered into a page's `.cart-items` container.
#[component]
pub fn CartList() -> impl IntoView {
    let ctx = use_shop();
    let items = move || ctx.store.cart().read().items().to_vec();
    let is_empty = move || ctx.store.cart().read().is_empty();

    view! {
        <Show
            when=move || !is_empty()
            fallback=|| view! { <p class="cart-empty">"Your cart is empty"</p> }
        >
            <For
                each=items
                key=|item| (item.id, item.quantity)
                children=move |item| {
                    let id = item.id;
                    view! {
                        <div class="cart-line">
                            <img src=item.image alt=item.title.clone() />
                            <span class="cart-line-title">{item.title}</span>
                            <span class="cart-line-price">{item.price}</span>
                            <span class="cart-line-qty">{format!("x{}", item.quantity)}</span>
                            <button class="cart-line-remove" on:click=move |_| remove_from_cart(ctx, id)>
                                "Remove"
                            </button>
                        </div>
                    }
                }
            />
        </Show>
    }
}
