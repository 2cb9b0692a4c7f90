//! Connectivity banner.

use leptos::prelude::*;

use crate::state::shell::ShellHandle;

#[component]
pub fn OfflineIndicator() -> impl IntoView {
    let handle = expect_context::<ShellHandle>();

    view! {
        <Show when=move || !handle.shell.with(|s| s.is_online())>
            <div class="offline-indicator" role="status" aria-live="polite">
                <span class="offline-indicator__icon" aria-hidden="true">"⚠"</span>
                "You are offline. Some features may be unavailable."
            </div>
        </Show>
    }
}
