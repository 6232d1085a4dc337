//! # client
//!
//! Leptos front end for the chaos console: login, the role dashboards, and
//! the user, report, punishment, leaderboard, and capture screens.
//!
//! Session handling, the route guard, and every API call come from
//! `console-core`; this crate supplies the browser transport, `localStorage`
//! token persistence, and the views.

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
