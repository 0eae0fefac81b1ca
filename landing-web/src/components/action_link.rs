//! Call-to-action link

use leptos::prelude::*;

use crate::content::{ActionLink as Action, ActionStyle};
use crate::state::display_mode::use_display_mode_context;
use crate::theme::{Palette, LAYOUT_ACTION, LAYOUT_ACTION_OUTLINE};

/// Full `class` value of an action for a given palette.
pub fn action_classes(style: ActionStyle, palette: &Palette) -> String {
    match style {
        ActionStyle::Filled => format!("{} {}", LAYOUT_ACTION, palette.primary_action),
        ActionStyle::Outlined => format!(
            "{} {} {}",
            LAYOUT_ACTION, LAYOUT_ACTION_OUTLINE, palette.secondary_action
        ),
    }
}

#[component]
pub fn ActionLink(action: Action) -> impl IntoView {
    let display = use_display_mode_context();
    let class = move || action_classes(action.style, &display.palette());

    view! {
        <a
            class=class
            href=action.href
            target=action.target.target
            rel=action.target.rel
        >
            {action.label}
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::DisplayMode;

    #[test]
    fn test_outline_only_on_outlined() {
        let palette = Palette::for_mode(DisplayMode::Light);
        assert!(!action_classes(ActionStyle::Filled, &palette).contains("border-2"));
        assert!(action_classes(ActionStyle::Outlined, &palette).contains("border-2"));
    }

    #[test]
    fn test_filled_uses_background() {
        let light = action_classes(ActionStyle::Filled, &Palette::LIGHT);
        let dark = action_classes(ActionStyle::Filled, &Palette::DARK);
        assert!(light.contains("bg-zinc-900"));
        assert!(dark.contains("bg-zinc-50"));
    }

    #[test]
    fn test_modes_share_layout() {
        for style in [ActionStyle::Filled, ActionStyle::Outlined] {
            let light = action_classes(style, &Palette::LIGHT);
            let dark = action_classes(style, &Palette::DARK);
            assert!(light.starts_with(LAYOUT_ACTION));
            assert!(dark.starts_with(LAYOUT_ACTION));
            assert_ne!(light, dark);
        }
    }
}
