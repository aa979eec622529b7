//! Banner Slider Component

use leptos::prelude::*;

use crate::context::use_shop;
use crate::navigation::scroll_to_categories;

/// Promotional banner with one dot per slide. The slide index lives in
/// `ShopContext::slider` so the interval timer and `currentSlide` share it.
#[component]
pub fn BannerSlider() -> impl IntoView {
    let ctx = use_shop();
    let banners = ctx.config(|c| c.banners.clone());
    let slider = ctx.slider;
    let slide_count = banners.len();

    let banner = StoredValue::new(banners);
    let current = move || banner.with_value(|list| list.get(slider.get().current()).cloned());

    view! {
        <div class="banner-container">
            {move || current().map(|b| view! {
                <div class="banner-slide active" style=format!("background-image: url('{}'); background-size: cover;", b.image)>
                    <div class="banner-content">
                        <h1>{b.title}</h1>
                        <p>{b.subtitle}</p>
                        <button class="banner-cta" on:click=move |_| scroll_to_categories()>
                            {b.cta}
                        </button>
                    </div>
                </div>
            })}
        </div>
        <div class="banner-dots">
            {(0..slide_count).map(|index| {
                let dot_class = move || {
                    if slider.get().current() == index { "dot active" } else { "dot" }
                };
                view! {
                    <span
                        class=dot_class
                        on:click=move |_| slider.update(|s| { s.go_to(index + 1); })
                    ></span>
                }
            }).collect_view()}
        </div>
    }
}
