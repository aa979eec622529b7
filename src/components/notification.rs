//! Notification Toast
//!
//! Renders the single active notice from the store.

use leptos::prelude::*;

use crate::context::use_shop;
use crate::store::ShopStateStoreFields;

#[component]
pub fn NotificationToast() -> impl IntoView {
    let ctx = use_shop();
    let exit_ms = ctx.config(|c| c.notification_exit_ms);

    move || {
        let active = ctx.store.notice().get()?;
        let animation = if active.leaving {
            format!("slideOut {exit_ms}ms ease forwards")
        } else {
            format!("slideIn {exit_ms}ms ease")
        };
        let style = format!("background: {}; animation: {};", active.notice.kind.color(), animation);
        let class = active.notice.class_name();
        let message = active.notice.message;

        Some(view! {
            <div class=class style=style>
                {message}
            </div>
        })
    }
}
