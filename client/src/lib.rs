//! # client
//!
//! Leptos + WASM frontend for the WorkflowGene Cloud marketing site.
//!
//! This crate contains pages, presentational components, local reactive
//! state, and the pure calculation utilities behind the ROI calculator,
//! readiness quiz, and SEO editor. The generic block renderer in
//! `components::renderer` maps `content::ContentNode` trees to visual
//! blocks for both the live site and the builder page.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM hydration entry point. Called by the generated JS loader.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
