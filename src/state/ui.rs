//! Local UI state: document title, project filters, the open project modal.
//!
//! DESIGN
//! ======
//! Page-level behavior lives in `pagecore::shell::PageShell`; this struct
//! only holds presentation choices the user makes inside sections.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::content::CategoryFilter;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub document_title: String,
    pub project_filter: CategoryFilter,
    pub project_query: String,
    /// Id of the project shown in the modal.
    pub modal_project: Option<u32>,
}

impl UiState {
    #[must_use]
    pub fn with_title(title: &str) -> Self {
        Self { document_title: title.to_owned(), ..Self::default() }
    }

    #[must_use]
    pub fn has_filters(&self) -> bool {
        self.project_filter != CategoryFilter::All || !self.project_query.trim().is_empty()
    }

    pub fn clear_filters(&mut self) {
        self.project_filter = CategoryFilter::All;
        self.project_query.clear();
    }

    /// Summary line above the project grid.
    #[must_use]
    pub fn results_label(&self, count: usize) -> String {
        let noun = if count == 1 { "project" } else { "projects" };
        let query = self.project_query.trim();
        if !query.is_empty() {
            return format!("Found {count} {noun} matching \"{query}\"");
        }
        match &self.project_filter {
            CategoryFilter::All => format!("Showing {count} {noun}"),
            CategoryFilter::Only(category) => format!("Showing {count} {noun} in {category}"),
        }
    }

    /// Title and body for the empty-results panel.
    #[must_use]
    pub fn empty_message(&self) -> (String, String) {
        let query = self.project_query.trim();
        if query.is_empty() {
            (
                "No projects in this category".to_owned(),
                format!("There are no projects in the {} category yet.", self.project_filter.label()),
            )
        } else {
            ("No projects found".to_owned(), format!("No projects match \"{query}\". Try adjusting your search terms."))
        }
    }
}

/// Icon shown next to a category filter button.
#[must_use]
pub fn category_icon(filter: &CategoryFilter) -> &'static str {
    match filter.label() {
        "All" => "📚",
        "Full-Stack" => "🌐",
        "AI/ML" => "🤖",
        "Mobile" => "📱",
        "Security" => "🔒",
        _ => "📁",
    }
}
