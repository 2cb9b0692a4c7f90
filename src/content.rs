//! Typed portfolio content and the queries the sections run over it.
//!
//! SYSTEM CONTEXT
//! ==============
//! Content ships inside the binary as `content/portfolio.json` and is parsed
//! once on first access. Every optional attribute is an explicit `Option` or
//! a defaulted collection, so views never check for missing keys.
//!
//! ERROR HANDLING
//! ==============
//! A malformed document surfaces as [`ContentError`] from [`portfolio`]. The
//! home page returns it into the top-level error boundary.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use pulldown_cmark::{Event, Options, Parser, html};
use serde::Deserialize;

const RAW: &str = include_str!("../content/portfolio.json");

static CONTENT: LazyLock<Result<Portfolio, ContentError>> = LazyLock::new(|| Portfolio::from_json(RAW));

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    #[error("portfolio content is malformed: {0}")]
    Malformed(String),
}

/// The embedded portfolio, parsed on first use.
///
/// # Errors
///
/// Returns [`ContentError::Malformed`] when the embedded document does not
/// match the content model.
pub fn portfolio() -> Result<&'static Portfolio, ContentError> {
    CONTENT.as_ref().map_err(Clone::clone)
}

// =============================================================================
// ENTITIES
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub owner: Owner,
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skill_groups: Vec<SkillGroup>,
    #[serde(default)]
    pub experience: Vec<Experience>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    pub name: String,
    pub headline: String,
    pub summary: String,
    pub location: Option<String>,
    pub email: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ProjectStatus {
    Completed,
    #[serde(rename = "In progress")]
    InProgress,
    Archived,
}

impl ProjectStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::InProgress => "In progress",
            Self::Archived => "Archived",
        }
    }

    /// BEM modifier used on status badges.
    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::InProgress => "in-progress",
            Self::Archived => "archived",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Challenge {
    pub title: String,
    pub description: String,
    pub solution: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Outcome {
    pub value: String,
    pub label: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u32,
    pub slug: String,
    pub title: String,
    pub tagline: Option<String>,
    pub description: String,
    /// Markdown.
    pub full_description: Option<String>,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Stack layer (frontend, backend, ...) → technologies.
    #[serde(default)]
    pub technologies: BTreeMap<String, Vec<String>>,
    pub github: Option<String>,
    pub live: Option<String>,
    #[serde(default)]
    pub featured: bool,
    pub status: ProjectStatus,
    pub duration: Option<String>,
    pub role: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub challenges: Vec<Challenge>,
    #[serde(default)]
    pub results: Vec<Outcome>,
}

impl Project {
    /// Long description rendered to HTML, falling back to the short one.
    /// Raw HTML in the source is dropped.
    #[must_use]
    pub fn description_html(&self) -> String {
        render_markdown(self.full_description.as_deref().unwrap_or(&self.description))
    }

    /// Case-insensitive match over title, description and tags. An empty
    /// query matches everything.
    #[must_use]
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(&needle))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency, 0–100.
    pub level: u8,
    pub years: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SkillGroup {
    pub id: u32,
    pub category: String,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub description: Option<String>,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: u32,
    pub company: String,
    pub position: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub location: Option<String>,
    /// `YYYY-MM`.
    pub start_date: String,
    pub end_date: Option<String>,
    #[serde(default)]
    pub current: bool,
    pub description: Option<String>,
    #[serde(default)]
    pub responsibilities: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

impl Experience {
    /// `"2019-06 – 2022-02"`, or `"… – Present"` for the current role.
    #[must_use]
    pub fn period(&self) -> String {
        let end = match (&self.end_date, self.current) {
            (_, true) | (None, false) => "Present",
            (Some(end), false) => end.as_str(),
        };
        format!("{} – {end}", self.start_date)
    }
}

// =============================================================================
// QUERIES
// =============================================================================

/// Project category filter. `All` is the default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::All => "All",
            Self::Only(category) => category,
        }
    }

    #[must_use]
    pub fn admits(&self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => project.category == *category,
        }
    }
}

impl Portfolio {
    /// # Errors
    ///
    /// Returns [`ContentError::Malformed`] when `raw` is not a valid content
    /// document.
    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        serde_json::from_str(raw).map_err(|e| ContentError::Malformed(e.to_string()))
    }

    /// Look a project up by slug or numeric id.
    #[must_use]
    pub fn find_project(&self, key: &str) -> Option<&Project> {
        let id = key.parse::<u32>().ok();
        self.projects.iter().find(|p| p.slug == key || Some(p.id) == id)
    }

    /// Distinct categories in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for project in &self.projects {
            if !seen.contains(&project.category.as_str()) {
                seen.push(&project.category);
            }
        }
        seen
    }

    /// Every filter with the number of projects it admits, `All` first.
    #[must_use]
    pub fn category_counts(&self) -> Vec<(CategoryFilter, usize)> {
        let mut counts = vec![(CategoryFilter::All, self.projects.len())];
        counts.extend(self.categories().into_iter().map(|category| {
            let n = self.projects.iter().filter(|p| p.category == category).count();
            (CategoryFilter::Only(category.to_owned()), n)
        }));
        counts
    }

    /// Projects admitted by `filter` and matching `query`, featured first.
    /// Order is otherwise stable.
    #[must_use]
    pub fn filter_projects(&self, filter: &CategoryFilter, query: &str) -> Vec<&Project> {
        let mut hits = self
            .projects
            .iter()
            .filter(|p| filter.admits(p) && p.matches_query(query))
            .collect::<Vec<_>>();
        hits.sort_by_key(|p| !p.featured);
        hits
    }

    /// Up to `limit` other projects in the same category.
    #[must_use]
    pub fn related_projects(&self, project: &Project, limit: usize) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| p.category == project.category && p.id != project.id)
            .take(limit)
            .collect()
    }

    #[must_use]
    pub fn total_skills(&self) -> usize {
        self.skill_groups.iter().map(|g| g.skills.len()).sum()
    }

    /// Highest-level skills across all groups, best first.
    #[must_use]
    pub fn top_skills(&self, limit: usize) -> Vec<&Skill> {
        let mut all = self.skill_groups.iter().flat_map(|g| g.skills.iter()).collect::<Vec<_>>();
        all.sort_by(|a, b| b.level.cmp(&a.level));
        all.truncate(limit);
        all
    }

    /// Experience entries, most recent start first.
    #[must_use]
    pub fn timeline(&self) -> Vec<&Experience> {
        let mut entries = self.experience.iter().collect::<Vec<_>>();
        entries.sort_by(|a, b| b.start_date.cmp(&a.start_date));
        entries
    }
}

fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options).filter(|event| !matches!(event, Event::Html(_) | Event::InlineHtml(_)));

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
