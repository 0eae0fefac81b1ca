//! Landing Page - centered hero with title, subtitle and two actions

use leptos::prelude::*;

use crate::components::ActionLink;
use crate::content::HeroContent;
use crate::state::display_mode::use_display_mode_context;
use crate::theme::{
    classes, LAYOUT_ACTIONS, LAYOUT_HEADER, LAYOUT_MAIN, LAYOUT_PAGE, LAYOUT_SUBTITLE,
    LAYOUT_TITLE,
};

#[component]
pub fn HomePage() -> impl IntoView {
    let display = use_display_mode_context();
    let content = HeroContent::landing();
    let [docs, source] = content.actions;

    view! {
        <div class=move || classes(LAYOUT_PAGE, display.palette().page)>
            <main class=LAYOUT_MAIN>
                <div class=LAYOUT_HEADER>
                    <h1 class=move || classes(LAYOUT_TITLE, display.palette().title)>
                        {content.title}
                    </h1>
                    <p class=move || classes(LAYOUT_SUBTITLE, display.palette().subtitle)>
                        {content.subtitle}
                    </p>
                </div>

                <div class=LAYOUT_ACTIONS>
                    <ActionLink action=docs/>
                    <ActionLink action=source/>
                </div>
            </main>
        </div>
    }
}
