use super::*;

// =============================================================
// Filters
// =============================================================

#[test]
fn default_has_no_filters() {
    let state = UiState::default();
    assert!(!state.has_filters());
    assert_eq!(state.modal_project, None);
}

#[test]
fn whitespace_query_is_not_a_filter() {
    let state = UiState { project_query: "   ".to_owned(), ..UiState::default() };
    assert!(!state.has_filters());
}

#[test]
fn clear_filters_resets_both() {
    let mut state = UiState {
        project_filter: CategoryFilter::Only("Mobile".to_owned()),
        project_query: "sync".to_owned(),
        ..UiState::default()
    };
    assert!(state.has_filters());
    state.clear_filters();
    assert!(!state.has_filters());
}

// =============================================================
// Labels
// =============================================================

#[test]
fn results_label_pluralizes() {
    let state = UiState::default();
    assert_eq!(state.results_label(1), "Showing 1 project");
    assert_eq!(state.results_label(4), "Showing 4 projects");
}

#[test]
fn results_label_names_category() {
    let state = UiState { project_filter: CategoryFilter::Only("Security".to_owned()), ..UiState::default() };
    assert_eq!(state.results_label(2), "Showing 2 projects in Security");
}

#[test]
fn results_label_prefers_query() {
    let state = UiState {
        project_filter: CategoryFilter::Only("Security".to_owned()),
        project_query: " rust ".to_owned(),
        ..UiState::default()
    };
    assert_eq!(state.results_label(0), "Found 0 projects matching \"rust\"");
}

#[test]
fn empty_message_depends_on_query() {
    let mut state = UiState { project_filter: CategoryFilter::Only("Mobile".to_owned()), ..UiState::default() };
    assert_eq!(state.empty_message().0, "No projects in this category");
    assert!(state.empty_message().1.contains("Mobile"));

    state.project_query = "zzz".to_owned();
    assert_eq!(state.empty_message().0, "No projects found");
}

#[test]
fn category_icons_fall_back() {
    assert_eq!(category_icon(&CategoryFilter::All), "📚");
    assert_eq!(category_icon(&CategoryFilter::Only("Games".to_owned())), "📁");
}
