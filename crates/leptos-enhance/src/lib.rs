//! Leptos Enhance Utilities
//!
//! Progressive enhancement over server-rendered pages: look up existing
//! markup, attach listeners to it, mount Leptos views next to it and run
//! timers or one-shot visibility callbacks.
//! Everything here is fire-and-forget: listeners and timers live for the
//! page view.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, HtmlElement, IntersectionObserver, IntersectionObserverEntry, Node};

// ========================
// Lookup
// ========================

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

/// First element matching `selector`. Invalid selectors count as no match.
pub fn query(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

/// All elements matching `selector`, in document order.
pub fn query_all(selector: &str) -> Vec<Element> {
    match document().and_then(|doc| doc.query_selector_all(selector).ok()) {
        Some(list) => (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect(),
        None => Vec::new(),
    }
}

pub fn query_in(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

/// Text content of the first `selector` match under `root`, or "".
pub fn text_in(root: &Element, selector: &str) -> String {
    query_in(root, selector)
        .and_then(|el| el.text_content())
        .unwrap_or_default()
}

// ========================
// Styling
// ========================

/// Set an inline style property. Non-HTML elements are skipped.
pub fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(el) = element.dyn_ref::<HtmlElement>() {
        if let Err(err) = el.style().set_property(property, value) {
            log::debug!("failed to set {property}: {:?}", err);
        }
    }
}

pub fn style_value(element: &Element, property: &str) -> String {
    element
        .dyn_ref::<HtmlElement>()
        .and_then(|el| el.style().get_property_value(property).ok())
        .unwrap_or_default()
}

/// Append a `<style>` block to the document head.
pub fn inject_style(css: &str) {
    let Some(doc) = document() else { return };
    let (Some(head), Ok(style)) = (doc.head(), doc.create_element("style")) else { return };
    style.set_text_content(Some(css));
    if let Err(err) = head.append_child(&style) {
        log::debug!("failed to inject stylesheet: {:?}", err);
    }
}

/// Smoothly scroll `element` to the top of the viewport.
pub fn scroll_into_view_smooth(element: &Element) {
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    options.set_block(web_sys::ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

// ========================
// Events & Timers
// ========================

/// Attach a listener that stays bound for the lifetime of the page.
pub fn listen<E>(target: &EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::<dyn FnMut(E)>::new(handler);
    if let Err(err) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::warn!("failed to bind `{}` listener: {:?}", event, err);
    }
    closure.forget();
}

/// Run `f` once after `ms` milliseconds.
pub fn after(ms: u32, f: impl FnOnce() + 'static) {
    gloo_timers::callback::Timeout::new(ms, f).forget();
}

/// Run `f` every `ms` milliseconds until the page unloads.
pub fn every(ms: u32, f: impl FnMut() + 'static) {
    gloo_timers::callback::Interval::new(ms, f).forget();
}

/// Call `on_visible` the first time `element` intersects the viewport,
/// then stop observing. Without IntersectionObserver support it runs
/// immediately.
pub fn observe_once(element: &Element, on_visible: impl FnOnce() + 'static) {
    let pending = Rc::new(RefCell::new(Some(on_visible)));
    let fire = {
        let pending = Rc::clone(&pending);
        move || {
            if let Some(f) = pending.borrow_mut().take() {
                f();
            }
        }
    };

    let callback_fire = fire.clone();
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let visible = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());
            if visible {
                observer.disconnect();
                callback_fire();
            }
        },
    );

    match IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
        Ok(observer) => {
            observer.observe(element);
            callback.forget();
        }
        Err(err) => {
            log::debug!("IntersectionObserver unavailable ({:?}), running immediately", err);
            fire();
        }
    }
}

// ========================
// Mounting
// ========================

/// Create a `<tag class="...">` host right before `anchor` and mount `view`
/// inside it.
pub fn mount_before<F, N>(anchor: &Element, tag: &str, class: &str, view: F) -> Option<HtmlElement>
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    let parent = anchor.parent_node()?;
    let host = create_host(tag, class)?;
    let anchor: &Node = anchor;
    parent.insert_before(&host, Some(anchor)).ok()?;
    leptos::mount::mount_to(host.clone(), view).forget();
    Some(host)
}

/// Mount `view` at the end of `parent`.
pub fn mount_into<F, N>(parent: &Element, view: F) -> Option<()>
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    let parent = parent.clone().dyn_into::<HtmlElement>().ok()?;
    leptos::mount::mount_to(parent, view).forget();
    Some(())
}

fn create_host(tag: &str, class: &str) -> Option<HtmlElement> {
    let host = document()?.create_element(tag).ok()?;
    host.set_class_name(class);
    host.dyn_into::<HtmlElement>().ok()
}
