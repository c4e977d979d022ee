//! Vitrina storefront.
//!
//! A client-rendered Leptos application: product catalog with a
//! URL-addressable brand filter, session cart, checkout and payment modal
//! flows, lead capture with a WhatsApp hand-off, and a contact form
//! posting to the external CRM. All domain logic lives in the
//! `vitrina-commerce`, `vitrina-leads`, and `vitrina-api` crates; this
//! crate is the reactive shell around them.

pub mod app;
pub mod browser;
pub mod components;
pub mod config;
pub mod store;

pub use app::App;
pub use store::CartStore;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
