//! Display mode state management

use leptos::prelude::*;

use crate::services::color_scheme;
use crate::theme::{DisplayMode, Palette};

/// Ambient light/dark signal shared with every view
#[derive(Clone, Copy, Debug)]
pub struct DisplayModeContext {
    pub mode: RwSignal<DisplayMode>,
}

impl DisplayModeContext {
    /// Context pinned to `mode`; does not look at the browser.
    pub fn new(mode: DisplayMode) -> Self {
        Self {
            mode: RwSignal::new(mode),
        }
    }

    /// Context initialised from the browser preference and kept in sync with it.
    ///
    /// Falls back to light mode when the preference is unavailable.
    pub fn from_browser() -> Self {
        let initial = match color_scheme::prefers_dark() {
            Ok(prefers_dark) => DisplayMode::from_prefers_dark(prefers_dark),
            Err(e) => {
                log::warn!("Color scheme preference unavailable, using light mode: {}", e);
                DisplayMode::Light
            }
        };
        log::debug!("Initial display mode: {}", initial.name());

        let context = Self::new(initial);
        let mode = context.mode;
        if let Err(e) = color_scheme::watch_preference(move |prefers_dark| {
            let next = DisplayMode::from_prefers_dark(prefers_dark);
            log::debug!("Display mode changed: {}", next.name());
            mode.set(next);
        }) {
            log::warn!("Not following color scheme changes: {}", e);
        }

        context
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode.get()
    }

    pub fn is_dark(&self) -> bool {
        self.mode.with(|mode| mode.is_dark())
    }

    pub fn palette(&self) -> Palette {
        self.mode.with(|mode| Palette::for_mode(*mode))
    }

    pub fn set_mode(&self, mode: DisplayMode) {
        self.mode.set(mode);
    }
}

impl Default for DisplayModeContext {
    fn default() -> Self {
        Self::new(DisplayMode::default())
    }
}

pub fn provide_display_mode_context() -> DisplayModeContext {
    let context = DisplayModeContext::from_browser();
    provide_context(context);
    context
}

/// Read the ambient display mode; renders light when nothing was provided.
pub fn use_display_mode_context() -> DisplayModeContext {
    use_context::<DisplayModeContext>().unwrap_or_default()
}
