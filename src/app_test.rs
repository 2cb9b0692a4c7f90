use super::*;

#[test]
fn project_routes_resolve_titles_by_slug_or_id() {
    assert_eq!(project_title("/project/tidepool-analytics"), Some("Tidepool Analytics"));
    assert_eq!(project_title("/project/2"), Some("Lumen Notes"));
}

#[test]
fn other_routes_have_no_project_title() {
    assert_eq!(project_title("/"), None);
    assert_eq!(project_title("/404"), None);
    assert_eq!(project_title("/project/does-not-exist"), None);
}
