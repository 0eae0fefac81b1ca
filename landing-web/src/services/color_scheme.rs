//! Browser color-scheme preference via `window.matchMedia`.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{MediaQueryList, MediaQueryListEvent};

use crate::error::{LandingError, Result};
use crate::utils::constants::DARK_SCHEME_QUERY;

fn dark_scheme_query() -> Result<MediaQueryList> {
    let window = web_sys::window().ok_or(LandingError::NoWindow)?;
    window
        .match_media(DARK_SCHEME_QUERY)
        .map_err(|e| LandingError::media_query(&e))?
        .ok_or_else(|| LandingError::MediaQuery(format!("{} is not supported", DARK_SCHEME_QUERY)))
}

/// Whether the user currently prefers a dark color scheme.
pub fn prefers_dark() -> Result<bool> {
    Ok(dark_scheme_query()?.matches())
}

/// Call `on_change` with the new preference every time it flips.
///
/// The listener is never removed; it lives as long as the page.
pub fn watch_preference<F>(mut on_change: F) -> Result<()>
where
    F: FnMut(bool) + 'static,
{
    let query = dark_scheme_query()?;

    let listener = Closure::<dyn FnMut(MediaQueryListEvent)>::new(move |event: MediaQueryListEvent| {
        on_change(event.matches());
    });

    query
        .add_event_listener_with_callback("change", listener.as_ref().unchecked_ref())
        .map_err(|e| LandingError::listener(&e))?;

    listener.forget();
    Ok(())
}
