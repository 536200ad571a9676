//! VestVault dashboard entry point.
//!
//! Compiled to WASM and mounted onto the host page. Everything else hangs
//! off the Leptos component tree rooted in [`app::App`].

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod app;
mod components;
mod pages;
mod services;
mod state;
mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Panic messages land in the browser console instead of vanishing.
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("VestVault dashboard starting");

    leptos::mount::mount_to_body(|| view! { <App/> });
}
