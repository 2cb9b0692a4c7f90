//! Floating "back to top" button.

use leptos::prelude::*;
use pagecore::shell::ShellCommand;

use crate::state::shell::ShellHandle;

/// Shown once the page has scrolled past the back-to-top threshold.
#[component]
pub fn BackToTop() -> impl IntoView {
    let handle = expect_context::<ShellHandle>();
    let visible = move || handle.shell.with(|s| s.show_back_to_top());

    view! {
        <button
            class="back-to-top"
            class:back-to-top--visible=visible
            aria-hidden=move || (!visible()).to_string()
            tabindex=move || if visible() { "0" } else { "-1" }
            title="Back to top (Shift + ↑)"
            aria-label="Back to top"
            on:click=move |_| handle.perform(ShellCommand::ScrollToTop { smooth: true })
        >
            "↑"
        </button>
    }
}
