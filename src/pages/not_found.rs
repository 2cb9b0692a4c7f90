//! 404 page for unknown routes and unknown project ids.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="not-found">
            <p class="not-found__code">"404"</p>
            <h1 class="not-found__title">"Page not found"</h1>
            <p class="not-found__body">"The page you are looking for doesn't exist or has been moved."</p>
            <a class="btn btn--primary" href="/">
                "Back to home"
            </a>
        </section>
    }
}
