//! Stats Section Component
//!
//! Headline numbers that count up the first time they scroll into view.

use bazar_core::{format_count, CounterAnimation, Stat};
use gloo_timers::future::TimeoutFuture;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_enhance::observe_once;

use crate::context::use_shop;

#[component]
pub fn StatsSection() -> impl IntoView {
    let ctx = use_shop();
    let stats = ctx.config(|c| c.stats.clone());

    view! {
        <div class="container">
            <h2>"Why Choose BazarBD?"</h2>
            <div class="stats-grid">
                {stats.into_iter().map(|stat| view! { <StatCounter stat=stat /> }).collect_view()}
            </div>
        </div>
    }
}

/// A single stat. Shows only its suffix until first visible, then animates
/// from 0 to the target once.
#[component]
fn StatCounter(stat: Stat) -> impl IntoView {
    let ctx = use_shop();
    let (tick_ms, steps) = ctx.config(|c| (c.counter_tick_ms, c.counter_steps));

    let number_ref = NodeRef::<html::Div>::new();
    let display = RwSignal::new(stat.suffix.clone());
    let started = StoredValue::new(false);

    let target = stat.value;
    let suffix = stat.suffix.clone();
    Effect::new(move |_| {
        let Some(el) = number_ref.get() else { return };
        if started.get_value() {
            return;
        }
        started.set_value(true);

        let suffix = suffix.clone();
        observe_once(&el, move || {
            spawn_local(async move {
                let mut counter = CounterAnimation::new(target, steps);
                while !counter.is_done() {
                    TimeoutFuture::new(tick_ms).await;
                    let value = counter.tick();
                    display.set(format_count(value, &suffix));
                }
            });
        });
    });

    view! {
        <div class="stat-item">
            <div class="stat-number" data-target=target.to_string() node_ref=number_ref>
                {move || display.get()}
            </div>
            <div class="stat-label">{stat.label}</div>
        </div>
    }
}
