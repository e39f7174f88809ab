//! Light/dark toggle button.

use leptos::prelude::*;

use crate::state::theme::{THEME_TOGGLE_ID, ThemeMode};

/// Button flipping `mode`; the icon follows the current mode.
#[component]
pub fn ThemeToggle(mode: RwSignal<ThemeMode>) -> impl IntoView {
    view! {
        <button
            type="button"
            id=THEME_TOGGLE_ID
            class="btn-soft btn-accent"
            aria-label="Toggle theme"
            on:click=move |_| mode.update(|m| *m = m.toggled())
        >
            <i class=move || mode.get().icon_class()></i>
        </button>
    }
}
