//! Single-page home route with every section in scroll order.

use leptos::prelude::*;

use crate::components::contact_form::ContactSection;
use crate::components::projects::ProjectsSection;
use crate::components::sections::{About, ExperienceSection, Hero, Skills};
use crate::content;

/// Renders the home sections, or hands a content error to the error
/// boundary.
#[component]
pub fn HomePage() -> impl IntoView {
    content::portfolio().map(|portfolio| {
        view! {
            <Hero owner=&portfolio.owner/>
            <About portfolio/>
            <Skills portfolio/>
            <ProjectsSection portfolio/>
            <ExperienceSection portfolio/>
            <ContactSection owner=&portfolio.owner/>
        }
    })
}
