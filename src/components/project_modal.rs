//! Project detail dialog opened from a card.
//!
//! DESIGN
//! ======
//! Opening and closing go through `ShellHandle`, which holds the modal's
//! scroll lock. The dialog traps Tab inside itself and closes on Escape or a
//! backdrop click. Unmounting releases the lock as well, so leaving the page
//! with the dialog open cannot strand the body in `overflow: hidden`.

use leptos::html::Div;
use leptos::prelude::*;
use pagecore::focus::{FocusMove, modal_key};

use crate::content::Project;
use crate::state::shell::ShellHandle;
use crate::util::focus_dom::FocusTargets;

#[component]
pub fn ProjectModal(project: &'static Project) -> impl IntoView {
    let handle = expect_context::<ShellHandle>();
    let dialog_ref = NodeRef::<Div>::new();

    Effect::new(move || {
        if dialog_ref.get().is_some() {
            FocusTargets::collect(dialog_ref).focus(0);
        }
    });
    on_cleanup(move || {
        if handle.shell.with_untracked(pagecore::shell::PageShell::is_modal_open) {
            handle.close_project();
        }
    });

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        let targets = FocusTargets::collect(dialog_ref);
        match modal_key(&ev.key(), ev.shift_key(), targets.focused(), targets.len()) {
            FocusMove::Stay => {}
            FocusMove::Focus(index) => {
                ev.prevent_default();
                targets.focus(index);
            }
            FocusMove::Close => {
                ev.prevent_default();
                ev.stop_propagation();
                handle.close_project();
            }
        }
    };

    let description = project.description_html();
    let title_id = format!("project-modal-title-{}", project.id);

    view! {
        <div class="project-modal__backdrop" on:click=move |_| handle.close_project()>
            <div
                class="project-modal"
                role="dialog"
                aria-modal="true"
                aria-labelledby=title_id.clone()
                node_ref=dialog_ref
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <header class="project-modal__header">
                    <div>
                        <h2 id=title_id.clone() class="project-modal__title">{project.title.as_str()}</h2>
                        {project.tagline.as_deref().map(|t| view! { <p class="project-modal__tagline">{t}</p> })}
                    </div>
                    <button class="project-modal__close" aria-label="Close" on:click=move |_| handle.close_project()>
                        "✕"
                    </button>
                </header>

                <div class="project-modal__meta">
                    <span class=format!("status-badge status-badge--{}", project.status.css_modifier())>
                        {project.status.label()}
                    </span>
                    <span class="project-modal__category">{project.category.as_str()}</span>
                    {project.duration.as_deref().map(|d| view! { <span class="project-modal__duration">{d}</span> })}
                    {project.role.as_deref().map(|r| view! { <span class="project-modal__role">{r}</span> })}
                </div>

                <div class="project-modal__description markdown-body" inner_html=description></div>

                <Show when=move || !project.features.is_empty()>
                    <h3 class="project-modal__subtitle">"Key features"</h3>
                    <ul class="project-modal__features">
                        {project.features.iter().map(|f| view! { <li>{f.as_str()}</li> }).collect_view()}
                    </ul>
                </Show>

                <div class="project-modal__stack">
                    {project
                        .technologies
                        .iter()
                        .map(|(layer, items)| {
                            view! {
                                <div class="project-modal__stack-layer">
                                    <h4>{layer.as_str()}</h4>
                                    <ul class="tag-list">
                                        {items.iter().map(|t| view! { <li class="tag">{t.as_str()}</li> }).collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <footer class="project-modal__actions">
                    {project
                        .github
                        .as_deref()
                        .map(|href| {
                            view! {
                                <a class="btn btn--secondary" href=href target="_blank" rel="noopener noreferrer">
                                    "Source"
                                </a>
                            }
                        })}
                    {project
                        .live
                        .as_deref()
                        .map(|href| {
                            view! {
                                <a class="btn btn--secondary" href=href target="_blank" rel="noopener noreferrer">
                                    "Live demo"
                                </a>
                            }
                        })}
                    <a
                        class="btn btn--primary"
                        href=format!("/project/{}", project.slug)
                        on:click=move |_| handle.close_project()
                    >
                        "Full case study"
                    </a>
                </footer>
            </div>
        </div>
    }
}
