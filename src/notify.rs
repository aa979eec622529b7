//! Toast Notifications
//!
//! One toast at a time; a new message replaces the current one. Each toast
//! stays for the configured time, plays its slide-out, then disappears.

use bazar_core::{Notice, NoticeKind};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::ShopContext;
use crate::store::{ActiveNotice, ShopStateStoreFields};

pub fn show_notification(ctx: ShopContext, message: impl Into<String>, kind: NoticeKind) {
    let id = {
        let seq_field = ctx.store.notice_seq();
        let mut seq = seq_field.write();
        *seq += 1;
        *seq
    };
    *ctx.store.notice().write() = Some(ActiveNotice {
        notice: Notice::new(id, message, kind),
        leaving: false,
    });

    let (stay_ms, exit_ms) = ctx.config(|c| (c.notification_ms, c.notification_exit_ms));
    spawn_local(async move {
        TimeoutFuture::new(stay_ms).await;
        if !is_current(ctx, id) {
            return;
        }
        if let Some(active) = &mut *ctx.store.notice().write() {
            active.leaving = true;
        }

        TimeoutFuture::new(exit_ms).await;
        if is_current(ctx, id) {
            *ctx.store.notice().write() = None;
        }
    });
}

/// Whether toast `id` is still the one on screen.
fn is_current(ctx: ShopContext, id: u64) -> bool {
    ctx.store
        .notice()
        .with_untracked(|notice| notice.as_ref().is_some_and(|active| active.notice.id == id))
}
