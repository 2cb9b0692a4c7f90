//! Reading progress bar pinned to the top of the viewport.
//!
//! Width comes from the `--scroll-progress` CSS variable written once per
//! animation frame, so scrolling does not re-render this component.

use leptos::prelude::*;

use crate::state::shell::ShellHandle;

#[component]
pub fn ScrollProgress() -> impl IntoView {
    let handle = expect_context::<ShellHandle>();

    view! {
        <div
            class="scroll-progress"
            role="progressbar"
            aria-label="Reading progress"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow=move || format!("{:.0}", handle.shell.with(|s| s.scroll_progress()))
        >
            <div class="scroll-progress__bar"></div>
        </div>
    }
}
