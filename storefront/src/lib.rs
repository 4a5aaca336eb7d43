//! ==============================================================================
//! lib.rs - Sole&Ankh Storefront
//! ==============================================================================
//!
//! purpose:
//!     leptos wasm front-end for the shoe storefront. renders the site
//!     header and a grid of product cards from the bundled catalog.
//!
//! architecture:
//!     - leptos csr (client-side rendering)
//!     - compiled to wasm, runs in browser
//!     - every render decision comes from the `shared` crate; components
//!       here only turn its view descriptions into markup
//!     - styles are generated from the theme and injected via leptos_meta
//!
//! ==============================================================================

use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use shared::Theme;
use wasm_bindgen::prelude::*;

mod catalog;
mod components;
mod context;

use components::{Header, ShoeGrid, ThemeStyles};
use context::StorefrontContext;

// ==============================================================================
// main entry point
// ==============================================================================

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    mount_to_body(App);
}

// ==============================================================================
// app component
// ==============================================================================

#[component]
fn App() -> impl IntoView {
    provide_meta_context();

    let today = context::today();
    let config = context::load_config();
    provide_context(StorefrontContext::new(config, Theme::default(), today));

    let shoes = catalog::load(today);
    log::info!("rendering {} shoes for {}", shoes.len(), today);

    view! {
        <ThemeStyles />
        <Header />
        <main>
            <ShoeGrid shoes=shoes />
        </main>
    }
}
