//! Project grid with category filters, search, and the detail modal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Filter and query live in `UiState` so they survive the modal opening and
//! closing. The visible list is a memo over both and only re-renders the grid
//! when the result set changes.

use leptos::prelude::*;
use pagecore::focus::is_activation_key;

use crate::components::project_modal::ProjectModal;
use crate::content::{CategoryFilter, Portfolio, Project};
use crate::state::shell::ShellHandle;
use crate::state::ui::category_icon;

#[component]
pub fn ProjectsSection(portfolio: &'static Portfolio) -> impl IntoView {
    let handle = expect_context::<ShellHandle>();
    let ui = handle.ui;

    let visible = Memo::new(move |_| ui.with(|u| portfolio.filter_projects(&u.project_filter, &u.project_query)));
    let counts = portfolio.category_counts();

    let modal_project = move || {
        ui.with(|u| u.modal_project)
            .and_then(|id| portfolio.projects.iter().find(|p| p.id == id))
    };

    view! {
        <section id="projects" class="projects section">
            <h2 class="section__title">"Projects"</h2>

            <div class="projects__controls">
                <div class="projects__filters" role="group" aria-label="Filter by category">
                    {counts
                        .into_iter()
                        .map(|(filter, count)| view! { <FilterButton filter count/> })
                        .collect_view()}
                </div>

                <div class="projects__search">
                    <input
                        class="projects__search-input"
                        type="search"
                        placeholder="Search projects..."
                        aria-label="Search projects"
                        prop:value=move || ui.with(|u| u.project_query.clone())
                        on:input=move |ev| ui.update(|u| u.project_query = event_target_value(&ev))
                    />
                    <Show when=move || ui.with(|u| !u.project_query.is_empty())>
                        <button
                            class="projects__search-clear"
                            aria-label="Clear search"
                            on:click=move |_| ui.update(|u| u.project_query.clear())
                        >
                            "✕"
                        </button>
                    </Show>
                </div>
            </div>

            <p class="projects__results" aria-live="polite">
                {move || ui.with(|u| u.results_label(visible.with(Vec::len)))}
            </p>

            <Show
                when=move || visible.with(|v| !v.is_empty())
                fallback=move || {
                    let (title, body) = ui.with(|u| u.empty_message());
                    view! {
                        <div class="projects__empty">
                            <span class="projects__empty-icon" aria-hidden="true">"🔍"</span>
                            <h3>{title}</h3>
                            <p>{body}</p>
                            <button class="btn btn--secondary" on:click=move |_| ui.update(|u| u.clear_filters())>
                                "Clear filters"
                            </button>
                        </div>
                    }
                }
            >
                <div class="projects__grid">
                    <For
                        each=move || visible.get()
                        key=|project| project.id
                        children=move |project| view! { <ProjectCard project/> }
                    />
                </div>
            </Show>

            {move || modal_project().map(|project| view! { <ProjectModal project/> })}
        </section>
    }
}

#[component]
fn FilterButton(filter: CategoryFilter, count: usize) -> impl IntoView {
    let ui = expect_context::<ShellHandle>().ui;
    let icon = category_icon(&filter);
    let label = filter.label().to_owned();
    let active_filter = filter.clone();
    let active = move || ui.with(|u| u.project_filter == active_filter);

    view! {
        <button
            class="projects__filter"
            class:projects__filter--active=active.clone()
            aria-pressed=move || active().to_string()
            on:click=move |_| ui.update(|u| u.project_filter = filter.clone())
        >
            <span class="projects__filter-icon" aria-hidden="true">{icon}</span>
            <span class="projects__filter-label">{label}</span>
            <span class="projects__filter-count">{count}</span>
        </button>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    let handle = expect_context::<ShellHandle>();
    let open = move || handle.open_project(project.id);

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_activation_key(&ev.key()) {
            ev.prevent_default();
            open();
        }
    };

    view! {
        <article
            class="project-card"
            class:project-card--featured=project.featured
            tabindex="0"
            role="button"
            aria-label=format!("Open {}", project.title)
            on:click=move |_| open()
            on:keydown=on_keydown
        >
            <header class="project-card__header">
                <span class="project-card__category">{project.category.as_str()}</span>
                <span class=format!("status-badge status-badge--{}", project.status.css_modifier())>
                    {project.status.label()}
                </span>
            </header>
            <h3 class="project-card__title">{project.title.as_str()}</h3>
            <p class="project-card__description">{project.description.as_str()}</p>
            <ul class="tag-list">
                {project.tags.iter().map(|tag| view! { <li class="tag">{tag.as_str()}</li> }).collect_view()}
            </ul>
            <a
                class="project-card__details"
                href=format!("/project/{}", project.slug)
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev| ev.stop_propagation()
            >
                "Details →"
            </a>
        </article>
    }
}
