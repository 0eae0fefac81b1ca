//! # Display Modes and Palettes
//!
//! The page has exactly two looks, one per [`DisplayMode`]. Everything that
//! changes between them lives in a [`Palette`]; layout tokens (sizing,
//! spacing, breakpoints, transitions) are mode-independent and live in the
//! `LAYOUT_*` constants so that switching modes can never move or resize
//! anything.
//!
//! Class strings are Tailwind utilities. They are written out in full (no
//! string building) so the Tailwind scanner finds them in the source.

/// Light/dark preference supplied by the hosting environment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DisplayMode {
    #[default]
    Light,
    Dark,
}

impl DisplayMode {
    /// Map a `prefers-color-scheme: dark` match result to a mode.
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark {
            DisplayMode::Dark
        } else {
            DisplayMode::Light
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, DisplayMode::Dark)
    }

    pub fn name(self) -> &'static str {
        match self {
            DisplayMode::Light => "light",
            DisplayMode::Dark => "dark",
        }
    }
}

// Mode-independent layout tokens
pub const LAYOUT_PAGE: &str =
    "flex min-h-screen items-center justify-center bg-gradient-to-br font-sans";
pub const LAYOUT_MAIN: &str = "flex flex-col items-center justify-center gap-8 px-8 text-center";
pub const LAYOUT_HEADER: &str = "space-y-4";
pub const LAYOUT_TITLE: &str = "text-6xl font-bold tracking-tight sm:text-7xl md:text-8xl";
pub const LAYOUT_SUBTITLE: &str = "text-xl sm:text-2xl";
pub const LAYOUT_ACTIONS: &str = "flex flex-col gap-4 sm:flex-row";
pub const LAYOUT_ACTION: &str = "flex h-12 items-center justify-center rounded-lg px-8 text-base font-medium transition-all hover:scale-105";
pub const LAYOUT_ACTION_OUTLINE: &str = "border-2";

/// Color classes for one display mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Diagonal background gradient stops.
    pub page: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    /// Filled action: background, label, hover background.
    pub primary_action: &'static str,
    /// Outlined action: border, label, hover fill and label swap.
    pub secondary_action: &'static str,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        page: "from-zinc-50 to-zinc-100",
        title: "text-zinc-900",
        subtitle: "text-zinc-600",
        primary_action: "bg-zinc-900 text-zinc-50 hover:bg-zinc-800",
        secondary_action: "border-zinc-900 text-zinc-900 hover:bg-zinc-900 hover:text-zinc-50",
    };

    pub const DARK: Palette = Palette {
        page: "from-zinc-950 to-black",
        title: "text-zinc-50",
        subtitle: "text-zinc-400",
        primary_action: "bg-zinc-50 text-zinc-900 hover:bg-zinc-200",
        secondary_action: "border-zinc-50 text-zinc-50 hover:bg-zinc-50 hover:text-zinc-900",
    };

    pub fn for_mode(mode: DisplayMode) -> Palette {
        match mode {
            DisplayMode::Light => Palette::LIGHT,
            DisplayMode::Dark => Palette::DARK,
        }
    }
}

/// Join a layout token with a palette token into one `class` value.
pub fn classes(layout: &str, colors: &str) -> String {
    format!("{} {}", layout, colors)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODES: [DisplayMode; 2] = [DisplayMode::Light, DisplayMode::Dark];

    fn fields(palette: &Palette) -> [&'static str; 5] {
        [
            palette.page,
            palette.title,
            palette.subtitle,
            palette.primary_action,
            palette.secondary_action,
        ]
    }

    #[test]
    fn test_default_mode_is_light() {
        assert_eq!(DisplayMode::default(), DisplayMode::Light);
        assert!(!DisplayMode::default().is_dark());
    }

    #[test]
    fn test_from_prefers_dark() {
        assert_eq!(DisplayMode::from_prefers_dark(true), DisplayMode::Dark);
        assert_eq!(DisplayMode::from_prefers_dark(false), DisplayMode::Light);
    }

    #[test]
    fn test_every_color_differs_between_modes() {
        let light = fields(&Palette::for_mode(DisplayMode::Light));
        let dark = fields(&Palette::for_mode(DisplayMode::Dark));
        for (l, d) in light.iter().zip(dark.iter()) {
            assert_ne!(l, d);
        }
    }

    #[test]
    fn test_light_gradient_is_near_white() {
        let page = Palette::LIGHT.page;
        assert!(page.contains("from-zinc-50"));
        assert!(page.contains("to-zinc-100"));
    }

    #[test]
    fn test_dark_gradient_is_near_black() {
        let page = Palette::DARK.page;
        assert!(page.contains("from-zinc-950"));
        assert!(page.contains("to-black"));
    }

    #[test]
    fn test_actions_swap_colors_on_hover() {
        for mode in MODES {
            let palette = Palette::for_mode(mode);
            assert!(palette.primary_action.contains("hover:bg-"));
            assert!(palette.secondary_action.contains("hover:bg-"));
            assert!(palette.secondary_action.contains("hover:text-"));
        }
    }

    #[test]
    fn test_palettes_carry_no_layout_tokens() {
        let layout_words = ["flex", "h-12", "px-8", "rounded-lg", "scale-105", "text-6xl", "gap-"];
        for mode in MODES {
            for field in fields(&Palette::for_mode(mode)) {
                for word in layout_words {
                    assert!(!field.contains(word), "{} leaked into {:?} palette", word, mode);
                }
            }
        }
    }

    #[test]
    fn test_layout_is_responsive() {
        assert!(LAYOUT_TITLE.contains("sm:text-7xl"));
        assert!(LAYOUT_TITLE.contains("md:text-8xl"));
        assert!(LAYOUT_ACTIONS.contains("flex-col"));
        assert!(LAYOUT_ACTIONS.contains("sm:flex-row"));
        assert!(LAYOUT_ACTION.contains("hover:scale-105"));
    }

    #[test]
    fn test_classes() {
        assert_eq!(classes("a b", "c"), "a b c");
    }
}
