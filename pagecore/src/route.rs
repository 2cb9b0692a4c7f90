//! Client-side route table.
//!
//! | Path | Route |
//! |------|-------|
//! | `/` | [`Route::Home`] |
//! | `/project/:id` | [`Route::Project`] |
//! | `/404`, anything else | [`Route::NotFound`] |

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

use crate::config::ShellConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Project(String),
    NotFound,
}

impl Route {
    /// Map a location path to a route. Query strings, fragments and one
    /// trailing slash are ignored.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = path.strip_suffix('/').filter(|p| !p.is_empty()).unwrap_or(path);
        if path.is_empty() || path == "/" {
            return Self::Home;
        }
        match path.strip_prefix("/project/") {
            Some(id) if !id.is_empty() && !id.contains('/') => Self::Project(id.to_owned()),
            _ => Self::NotFound,
        }
    }

    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_owned(),
            Self::Project(id) => format!("/project/{id}"),
            Self::NotFound => "/404".to_owned(),
        }
    }

    /// Document title for this route. `project_title` is the display name of
    /// the project when the id resolved to one.
    #[must_use]
    pub fn title(&self, config: &ShellConfig, project_title: Option<&str>) -> String {
        match self {
            Self::Home => config.site_title.clone(),
            Self::Project(id) => format!("{} | {}", project_title.unwrap_or(id), config.site_owner),
            Self::NotFound => format!("404 - Page Not Found | {}", config.site_title),
        }
    }
}
