//! Focusable elements inside a dialog.

#[cfg(test)]
#[path = "focus_dom_test.rs"]
mod focus_dom_test;

use leptos::html::Div;
use leptos::prelude::*;

#[cfg(feature = "csr")]
const FOCUSABLE: &str =
    "a[href], button:not([disabled]), input:not([disabled]), textarea:not([disabled]), select, [tabindex]:not([tabindex=\"-1\"])";

/// Snapshot of the focusable descendants of a container, in DOM order.
#[derive(Default)]
pub struct FocusTargets {
    #[cfg(feature = "csr")]
    elements: Vec<web_sys::HtmlElement>,
    focused: Option<usize>,
}

impl FocusTargets {
    pub fn collect(root: NodeRef<Div>) -> Self {
        #[cfg(feature = "csr")]
        {
            use wasm_bindgen::JsCast;

            let Some(root) = root.get_untracked() else {
                return Self::default();
            };
            let Ok(list) = root.query_selector_all(FOCUSABLE) else {
                return Self::default();
            };
            let elements: Vec<web_sys::HtmlElement> =
                (0..list.length()).filter_map(|i| list.item(i)?.dyn_into::<web_sys::HtmlElement>().ok()).collect();
            let active = web_sys::window().and_then(|w| w.document()).and_then(|d| d.active_element());
            let focused = active.and_then(|active| elements.iter().position(|el| el.is_same_node(Some(&active))));
            Self { elements, focused }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = root;
            Self::default()
        }
    }

    pub fn len(&self) -> usize {
        #[cfg(feature = "csr")]
        {
            self.elements.len()
        }
        #[cfg(not(feature = "csr"))]
        {
            0
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// Move focus to element `index`. Out-of-range indexes are ignored.
    pub fn focus(&self, index: usize) {
        #[cfg(feature = "csr")]
        {
            if let Some(el) = self.elements.get(index) {
                let _ = el.focus();
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = index;
        }
    }
}
