//! Hello World Landing Page
//!
//! A single static hero view rendered client-side with Leptos. The page is a
//! pure function of the ambient light/dark display mode.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

mod app;
mod components;
pub mod content;
pub mod error;
mod pages;
mod services;
pub mod state;
pub mod theme;
pub mod utils;

use app::App;
use error::{LandingError, Result};
use utils::constants::LOADING_ELEMENT_ID;

#[wasm_bindgen(start)]
pub fn start() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::new(log_level()));
    log::info!("Landing page starting...");

    if let Err(e) = hide_loading_screen() {
        log::warn!("Could not hide loading screen: {}", e);
    }

    leptos::mount::mount_to_body(|| view! { <App/> });
    log::debug!("App mounted to body");
}

fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

/// Hide the loading splash shipped in `index.html`.
///
/// A missing splash is not an error; the page may be embedded without one.
fn hide_loading_screen() -> Result<()> {
    let window = web_sys::window().ok_or(LandingError::NoWindow)?;
    let document = window.document().ok_or(LandingError::NoDocument)?;

    let Some(loading_element) = document.get_element_by_id(LOADING_ELEMENT_ID) else {
        log::debug!("No #{} element, nothing to hide", LOADING_ELEMENT_ID);
        return Ok(());
    };

    if let Some(html_element) = loading_element.dyn_ref::<HtmlElement>() {
        html_element
            .class_list()
            .add_1("hidden")
            .map_err(|e| LandingError::dom(&e))?;
    }
    loading_element
        .set_attribute("style", "display: none !important;")
        .map_err(|e| LandingError::dom(&e))?;

    log::debug!("Loading screen hidden");
    Ok(())
}
