#![allow(warnings)]
//! BazarBD Storefront Entry Point

mod app;
mod cart;
mod catalog;
mod components;
mod context;
mod dom;
mod globals;
mod home;
mod navigation;
mod notify;
mod search;
mod storage;
mod store;
mod styles;

fn main() {
    console_error_panic_hook::set_once();
    app::start();
}
