//! Hello World Landing Page - Leptos Frontend
//!
//! Single static page; the only input is the ambient display mode.

use leptos::prelude::*;

use crate::pages::HomePage;
use crate::state::display_mode::provide_display_mode_context;

#[component]
pub fn App() -> impl IntoView {
    provide_display_mode_context();

    view! {
        <HomePage/>
    }
}
