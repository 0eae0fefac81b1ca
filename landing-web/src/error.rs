//! # Error Handling
//!
//! The landing view itself cannot fail. Errors only come from browser interop
//! (reading the color-scheme preference, registering listeners, touching the
//! DOM from the shell). Every caller logs them and falls back to a default, so
//! nothing here ever reaches the rendered page.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Convenience type alias for `Result<T, LandingError>`.
pub type Result<T> = std::result::Result<T, LandingError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LandingError {
    /// No global `window` object (not running in a browser).
    #[error("no global window available")]
    NoWindow,

    /// No `document` attached to the window.
    #[error("no document available")]
    NoDocument,

    /// `matchMedia` threw or returned no list.
    #[error("media query failed: {0}")]
    MediaQuery(String),

    /// Registering a `change` listener failed.
    #[error("failed to register listener: {0}")]
    Listener(String),

    /// A DOM mutation was rejected.
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

impl LandingError {
    /// Wrap a thrown JS value into a [`LandingError::MediaQuery`].
    pub fn media_query(value: &JsValue) -> Self {
        Self::MediaQuery(describe(value))
    }

    pub fn listener(value: &JsValue) -> Self {
        Self::Listener(describe(value))
    }

    pub fn dom(value: &JsValue) -> Self {
        Self::Dom(describe(value))
    }
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
