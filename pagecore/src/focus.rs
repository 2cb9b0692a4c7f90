//! Keyboard handling inside an open modal.
//!
//! The modal knows how many focusable elements it holds and which one has
//! focus; [`modal_key`] says where focus goes next. Tab wraps from last to
//! first and Shift+Tab from first to last, so focus never escapes the dialog.

#[cfg(test)]
#[path = "focus_test.rs"]
mod focus_test;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusMove {
    /// Let the browser handle the key.
    Stay,
    /// Prevent the default and focus element `i`.
    Focus(usize),
    /// Dismiss the modal.
    Close,
}

/// `focused` is the index of the currently focused element, or `None` when
/// focus sits outside the focusable set.
#[must_use]
pub fn modal_key(key: &str, shift: bool, focused: Option<usize>, count: usize) -> FocusMove {
    match key {
        "Escape" => FocusMove::Close,
        "Tab" if count == 0 => FocusMove::Stay,
        "Tab" => {
            let last = count - 1;
            match (shift, focused) {
                (true, Some(0) | None) => FocusMove::Focus(last),
                (false, Some(i)) if i >= last => FocusMove::Focus(0),
                (false, None) => FocusMove::Focus(0),
                _ => FocusMove::Stay,
            }
        }
        _ => FocusMove::Stay,
    }
}

/// Keys that open a focused card the same way a click does.
#[must_use]
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}
