//! Full case-study page for one project.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reached at `/project/:id`, where `id` is a slug or numeric id. Unknown ids
//! redirect to `/404` so the not-found title and page apply.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::content::{self, Portfolio, Project};

const RELATED_LIMIT: usize = 3;

#[component]
pub fn ProjectDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();

    let lookup = move || -> Option<(&'static Portfolio, &'static Project)> {
        let key = params.with(|p| p.get("id"))?;
        let portfolio = content::portfolio().ok()?;
        Some((portfolio, portfolio.find_project(&key)?))
    };

    Effect::new(move || {
        if lookup().is_none() {
            navigate("/404", NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    move || lookup().map(|(portfolio, project)| view! { <ProjectDetails portfolio project/> })
}

#[component]
fn ProjectDetails(portfolio: &'static Portfolio, project: &'static Project) -> impl IntoView {
    let related = portfolio.related_projects(project, RELATED_LIMIT);

    view! {
        <article class="project-details">
            <a class="project-details__back" href="/#projects">
                "← All projects"
            </a>

            <header class="project-details__header">
                <span class="project-details__category">{project.category.as_str()}</span>
                <h1 class="project-details__title">{project.title.as_str()}</h1>
                {project.tagline.as_deref().map(|t| view! { <p class="project-details__tagline">{t}</p> })}
                <div class="project-details__meta">
                    <span class=format!("status-badge status-badge--{}", project.status.css_modifier())>
                        {project.status.label()}
                    </span>
                    {project.duration.as_deref().map(|d| view! { <span>{d}</span> })}
                    {project.role.as_deref().map(|r| view! { <span>{r}</span> })}
                </div>
                <div class="project-details__links">
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
                                <a class="btn btn--primary" href=href target="_blank" rel="noopener noreferrer">
                                    "Live demo"
                                </a>
                            }
                        })}
                </div>
            </header>

            <section class="project-details__section markdown-body" inner_html=project.description_html()></section>

            <Show when=move || !project.features.is_empty()>
                <section class="project-details__section">
                    <h2>"Key features"</h2>
                    <ul class="project-details__features">
                        {project.features.iter().map(|f| view! { <li>{f.as_str()}</li> }).collect_view()}
                    </ul>
                </section>
            </Show>

            <Show when=move || !project.challenges.is_empty()>
                <section class="project-details__section">
                    <h2>"Challenges & solutions"</h2>
                    {project
                        .challenges
                        .iter()
                        .map(|c| {
                            view! {
                                <div class="project-details__challenge">
                                    <h3>{c.title.as_str()}</h3>
                                    <p>{c.description.as_str()}</p>
                                    <p class="project-details__solution">
                                        <strong>"Solution: "</strong>
                                        {c.solution.as_str()}
                                    </p>
                                </div>
                            }
                        })
                        .collect_view()}
                </section>
            </Show>

            <Show when=move || !project.results.is_empty()>
                <section class="project-details__section">
                    <h2>"Results"</h2>
                    <ul class="project-details__results">
                        {project
                            .results
                            .iter()
                            .map(|r| {
                                view! {
                                    <li class="project-details__result">
                                        <span class="project-details__result-value">{r.value.as_str()}</span>
                                        <span class="project-details__result-label">{r.label.as_str()}</span>
                                        {r.description.as_deref().map(|d| view! { <p>{d}</p> })}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </section>
            </Show>

            <section class="project-details__section">
                <h2>"Tech stack"</h2>
                {project
                    .technologies
                    .iter()
                    .map(|(layer, items)| {
                        view! {
                            <div class="project-details__stack-layer">
                                <h3>{layer.as_str()}</h3>
                                <ul class="tag-list">
                                    {items.iter().map(|t| view! { <li class="tag">{t.as_str()}</li> }).collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>

            {(!related.is_empty())
                .then(|| {
                    view! {
                        <section class="project-details__section project-details__related">
                            <h2>"Related projects"</h2>
                            <ul class="project-details__related-list">
                                {related
                                    .into_iter()
                                    .map(|p| {
                                        view! {
                                            <li>
                                                <a href=format!("/project/{}", p.slug)>{p.title.as_str()}</a>
                                                <p>{p.description.as_str()}</p>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </section>
                    }
                })}
        </article>
    }
}
