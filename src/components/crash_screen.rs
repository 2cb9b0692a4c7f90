//! Static fallback shown when a page fails to render.

use leptos::prelude::*;

#[component]
pub fn CrashScreen() -> impl IntoView {
    let on_reload = move |_| {
        #[cfg(feature = "csr")]
        {
            if let Some(w) = web_sys::window() {
                let _ = w.location().reload();
            }
        }
    };

    view! {
        <div class="crash-screen" role="alert">
            <h1 class="crash-screen__title">"Something went wrong"</h1>
            <p class="crash-screen__body">"The page could not be displayed. Reloading usually fixes it."</p>
            <button class="btn btn--primary" on:click=on_reload>
                "Reload"
            </button>
        </div>
    }
}
