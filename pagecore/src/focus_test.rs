use super::*;

#[test]
fn escape_closes() {
    assert_eq!(modal_key("Escape", false, Some(1), 3), FocusMove::Close);
    assert_eq!(modal_key("Escape", true, None, 0), FocusMove::Close);
}

#[test]
fn tab_on_last_wraps_to_first() {
    assert_eq!(modal_key("Tab", false, Some(2), 3), FocusMove::Focus(0));
}

#[test]
fn shift_tab_on_first_wraps_to_last() {
    assert_eq!(modal_key("Tab", true, Some(0), 3), FocusMove::Focus(2));
}

#[test]
fn tab_in_the_middle_is_left_to_browser() {
    assert_eq!(modal_key("Tab", false, Some(0), 3), FocusMove::Stay);
    assert_eq!(modal_key("Tab", true, Some(2), 3), FocusMove::Stay);
}

#[test]
fn focus_outside_set_is_pulled_in() {
    assert_eq!(modal_key("Tab", false, None, 3), FocusMove::Focus(0));
    assert_eq!(modal_key("Tab", true, None, 3), FocusMove::Focus(2));
}

#[test]
fn single_focusable_element_keeps_focus() {
    assert_eq!(modal_key("Tab", false, Some(0), 1), FocusMove::Focus(0));
    assert_eq!(modal_key("Tab", true, Some(0), 1), FocusMove::Focus(0));
}

#[test]
fn tab_with_nothing_focusable_is_ignored() {
    assert_eq!(modal_key("Tab", false, None, 0), FocusMove::Stay);
}

#[test]
fn other_keys_pass_through() {
    assert_eq!(modal_key("a", false, Some(0), 3), FocusMove::Stay);
}

#[test]
fn activation_keys() {
    assert!(is_activation_key("Enter"));
    assert!(is_activation_key(" "));
    assert!(!is_activation_key("Tab"));
}
