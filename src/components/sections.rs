//! Static home-page sections: hero, about, skills, experience, footer.
//!
//! Each section renders from the embedded portfolio and carries the anchor id
//! the navbar and the active-section tracker look for.

use leptos::prelude::*;

use crate::content::{self, Experience, Owner, Portfolio, SkillGroup};
use crate::state::shell::ShellHandle;

#[component]
pub fn Hero(owner: &'static Owner) -> impl IntoView {
    let handle = expect_context::<ShellHandle>();

    view! {
        <section id="home" class="hero">
            <div class="hero__content">
                <p class="hero__greeting">"Hi, I'm"</p>
                <h1 class="hero__name">{owner.name.as_str()}</h1>
                <h2 class="hero__headline">{owner.headline.as_str()}</h2>
                <p class="hero__summary">{owner.summary.as_str()}</p>
                <div class="hero__actions">
                    <button class="btn btn--primary" on:click=move |_| handle.scroll_to_section("projects")>
                        "View my work"
                    </button>
                    <button class="btn btn--secondary" on:click=move |_| handle.scroll_to_section("contact")>
                        "Get in touch"
                    </button>
                </div>
            </div>
            <button
                class="hero__scroll-hint"
                aria-label="Scroll to about"
                on:click=move |_| handle.scroll_to_section("about")
            >
                "↓"
            </button>
        </section>
    }
}

#[component]
pub fn About(portfolio: &'static Portfolio) -> impl IntoView {
    let owner = &portfolio.owner;
    let stats = [
        (portfolio.projects.len(), "Projects"),
        (portfolio.total_skills(), "Skills"),
        (portfolio.experience.len(), "Roles"),
    ];

    view! {
        <section id="about" class="about section">
            <h2 class="section__title">"About me"</h2>
            <div class="about__body">
                <p class="about__summary">{owner.summary.as_str()}</p>
                {owner.location.as_deref().map(|loc| view! { <p class="about__location">"📍 " {loc}</p> })}
            </div>
            <ul class="about__stats">
                {stats
                    .into_iter()
                    .map(|(value, label)| {
                        view! {
                            <li class="about__stat">
                                <span class="about__stat-value">{value}</span>
                                <span class="about__stat-label">{label}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}

#[component]
pub fn Skills(portfolio: &'static Portfolio) -> impl IntoView {
    view! {
        <section id="skills" class="skills section">
            <h2 class="section__title">"Skills"</h2>
            <div class="skills__groups">
                {portfolio.skill_groups.iter().map(|group| view! { <SkillGroupCard group/> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn SkillGroupCard(group: &'static SkillGroup) -> impl IntoView {
    let accent = group.color.as_deref().map(|c| format!("--skill-accent: {c}")).unwrap_or_default();

    view! {
        <article class="skill-group" style=accent>
            <header class="skill-group__header">
                {group.icon.as_deref().map(|icon| view! { <span class="skill-group__icon" aria-hidden="true">{icon}</span> })}
                <h3 class="skill-group__title">{group.category.as_str()}</h3>
            </header>
            {group.description.as_deref().map(|d| view! { <p class="skill-group__description">{d}</p> })}
            <ul class="skill-group__skills">
                {group
                    .skills
                    .iter()
                    .map(|skill| {
                        let level = skill.level.min(100);
                        view! {
                            <li class="skill">
                                <div class="skill__label">
                                    <span class="skill__name">{skill.name.as_str()}</span>
                                    {skill.years.as_deref().map(|y| view! { <span class="skill__years">{y} " yrs"</span> })}
                                </div>
                                <div
                                    class="skill__bar"
                                    role="meter"
                                    aria-valuemin="0"
                                    aria-valuemax="100"
                                    aria-valuenow=level.to_string()
                                >
                                    <div class="skill__fill" style=format!("width: {level}%")></div>
                                </div>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </article>
    }
}

#[component]
pub fn ExperienceSection(portfolio: &'static Portfolio) -> impl IntoView {
    view! {
        <section id="experience" class="experience section">
            <h2 class="section__title">"Experience"</h2>
            <ol class="timeline">
                {portfolio.timeline().into_iter().map(|entry| view! { <TimelineEntry entry/> }).collect_view()}
            </ol>
        </section>
    }
}

#[component]
fn TimelineEntry(entry: &'static Experience) -> impl IntoView {
    view! {
        <li class="timeline__entry" class:timeline__entry--current=entry.current>
            <div class="timeline__marker" aria-hidden="true"></div>
            <div class="timeline__content">
                <h3 class="timeline__position">{entry.position.as_str()}</h3>
                <p class="timeline__company">
                    {entry.company.as_str()}
                    <span class="timeline__kind">{entry.kind.as_str()}</span>
                </p>
                <p class="timeline__meta">
                    <span class="timeline__period">{entry.period()}</span>
                    {entry.location.as_deref().map(|loc| view! { <span class="timeline__location">{loc}</span> })}
                </p>
                {entry.description.as_deref().map(|d| view! { <p class="timeline__description">{d}</p> })}
                <ul class="timeline__responsibilities">
                    {entry.responsibilities.iter().map(|r| view! { <li>{r.as_str()}</li> }).collect_view()}
                </ul>
                <ul class="tag-list">
                    {entry.technologies.iter().map(|t| view! { <li class="tag">{t.as_str()}</li> }).collect_view()}
                </ul>
            </div>
        </li>
    }
}

/// Site footer with contact links. Falls back to the configured owner name
/// when content is unavailable.
#[component]
pub fn Footer() -> impl IntoView {
    let config = expect_context::<pagecore::config::ShellConfig>();
    let owner = content::portfolio().ok().map(|p| &p.owner);

    let links = owner
        .map(|o| {
            [
                o.github.as_deref().map(|href| ("GitHub", href.to_owned())),
                o.linkedin.as_deref().map(|href| ("LinkedIn", href.to_owned())),
                o.email.as_deref().map(|email| ("Email", format!("mailto:{email}"))),
            ]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
        })
        .unwrap_or_default();

    view! {
        <footer class="footer">
            <ul class="footer__links">
                {links
                    .into_iter()
                    .map(|(label, href)| {
                        view! {
                            <li>
                                <a class="footer__link" href=href target="_blank" rel="noopener noreferrer">
                                    {label}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <p class="footer__copyright">"© " {config.site_owner} ". All rights reserved."</p>
        </footer>
    }
}
