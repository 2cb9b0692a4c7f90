//! Light/dark switch in the navbar.

use leptos::prelude::*;

use crate::state::theme::ThemeState;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeState>>();
    let is_dark = move || theme.with(ThemeState::is_dark);
    let label = move || if is_dark() { "Switch to light mode" } else { "Switch to dark mode" };

    view! {
        <button
            class="theme-toggle"
            on:click=move |_| theme.update(ThemeState::toggle)
            title=label
            aria-label=label
        >
            {move || if is_dark() { "☀" } else { "☾" }}
        </button>
    }
}
