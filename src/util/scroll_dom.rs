//! Window scroll reads and writes.
//!
//! SYSTEM CONTEXT
//! ==============
//! The scroll tracker and page shell are pure; this module is where their
//! numbers come from and where their decisions land: scroll metrics, section
//! offsets, animated scrolling, the body scroll lock, and the
//! `--scroll-progress` CSS variable.
//!
//! ERROR HANDLING
//! ==============
//! A missing scroll target is normal before the first render and is ignored
//! without logging. Every DOM call is best-effort.

#[cfg(test)]
#[path = "scroll_dom_test.rs"]
mod scroll_dom_test;

#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::Rc;

use pagecore::consts::SECTION_IDS;
use pagecore::easing::Easing;
#[cfg(feature = "csr")]
use pagecore::easing::Tween;
use pagecore::scroll::ScrollMetrics;
#[cfg(feature = "csr")]
use pagecore::scroll::{Rect, element_scroll_target, is_rect_in_viewport, scroll_to_top_target};
use pagecore::shell::SectionOffset;
#[cfg(feature = "csr")]
use wasm_bindgen::{JsCast, closure::Closure};

/// Viewport width assumed outside a browser.
pub const FALLBACK_VIEWPORT_WIDTH: f64 = 1024.0;

pub fn read_metrics() -> ScrollMetrics {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return ScrollMetrics::default();
        };
        let document_height = window
            .document()
            .and_then(|d| d.document_element())
            .map_or(0.0, |el| f64::from(el.scroll_height()));
        ScrollMetrics {
            offset_x: window.scroll_x().unwrap_or(0.0),
            offset_y: window.scroll_y().unwrap_or(0.0),
            viewport_height: window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0),
            document_height,
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        ScrollMetrics::default()
    }
}

pub fn viewport_width() -> f64 {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(FALLBACK_VIEWPORT_WIDTH)
    }
    #[cfg(not(feature = "csr"))]
    {
        FALLBACK_VIEWPORT_WIDTH
    }
}

/// Document-relative tops of the home page sections, `None` for any not
/// rendered yet.
pub fn section_offsets() -> Vec<SectionOffset> {
    SECTION_IDS.iter().map(|id| SectionOffset::new(id, section_top(id))).collect()
}

fn section_top(id: &str) -> Option<f64> {
    #[cfg(feature = "csr")]
    {
        let window = web_sys::window()?;
        let el = window.document()?.get_element_by_id(id)?;
        Some(el.get_bounding_client_rect().top() + window.scroll_y().unwrap_or(0.0))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
        None
    }
}

// =============================================================================
// SCROLL WRITES
// =============================================================================

pub fn scroll_to_top(smooth: bool, duration_ms: f64, easing: Easing) {
    #[cfg(feature = "csr")]
    {
        if smooth {
            smooth_scroll_to(scroll_to_top_target(), duration_ms, easing);
        } else if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, scroll_to_top_target());
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (smooth, duration_ms, easing);
    }
}

/// Animate to section `id`, leaving `header_offset` pixels for the fixed
/// navbar. Unknown ids are ignored.
pub fn scroll_to_section(id: &str, header_offset: f64, duration_ms: f64, easing: Easing) {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(el) = window.document().and_then(|d| d.get_element_by_id(id)) else {
            return;
        };
        let top = el.get_bounding_client_rect().top();
        let target = element_scroll_target(top, window.scroll_y().unwrap_or(0.0), header_offset);
        smooth_scroll_to(target, duration_ms, easing);
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (id, header_offset, duration_ms, easing);
    }
}

/// Animate element `id` into view when any part of it is hidden behind the
/// navbar or below the fold. Returns whether a scroll was started.
pub fn reveal_element(id: &str, header_offset: f64, duration_ms: f64, easing: Easing) -> bool {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let Some(el) = window.document().and_then(|d| d.get_element_by_id(id)) else {
            return false;
        };
        let bounds = el.get_bounding_client_rect();
        let below_header = Rect {
            top: bounds.top() - header_offset,
            left: bounds.left(),
            bottom: bounds.bottom() - header_offset,
            right: bounds.right(),
        };
        let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(FALLBACK_VIEWPORT_WIDTH);
        let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0) - header_offset;
        if is_rect_in_viewport(below_header, width, height, 0.0) {
            return false;
        }
        let target = element_scroll_target(bounds.top(), window.scroll_y().unwrap_or(0.0), header_offset);
        smooth_scroll_to(target, duration_ms, easing);
        true
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (id, header_offset, duration_ms, easing);
        false
    }
}

/// Eased scroll to `target` over `duration_ms`, one step per animation frame.
#[cfg(feature = "csr")]
fn smooth_scroll_to(target: f64, duration_ms: f64, easing: Easing) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let start = window.scroll_y().unwrap_or(0.0);
    let tween = Tween::new(start, target, duration_ms, easing);
    let started_ms = js_sys::Date::now();

    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let cb = Closure::wrap(Box::new(move |_ts: f64| {
        let elapsed = js_sys::Date::now() - started_ms;
        let Some(window) = web_sys::window() else {
            holder_for_cb.borrow_mut().take();
            return;
        };
        window.scroll_to_with_x_and_y(0.0, tween.value_at(elapsed));
        if tween.is_finished(elapsed) {
            holder_for_cb.borrow_mut().take();
            return;
        }
        let rescheduled = holder_for_cb
            .borrow()
            .as_ref()
            .is_some_and(|next| window.request_animation_frame(next.as_ref().unchecked_ref()).is_ok());
        if !rescheduled {
            window.scroll_to_with_x_and_y(0.0, target);
            holder_for_cb.borrow_mut().take();
        }
    }) as Box<dyn FnMut(f64)>);

    if window.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok() {
        *holder.borrow_mut() = Some(cb);
    } else {
        window.scroll_to_with_x_and_y(0.0, target);
    }
}

/// Run `f` on the next animation frame, or right away when frames are not
/// available.
pub fn request_frame(f: impl FnOnce() + 'static) {
    #[cfg(feature = "csr")]
    {
        let job = Rc::new(RefCell::new(Some(f)));
        let Some(window) = web_sys::window() else {
            let taken = job.borrow_mut().take();
            if let Some(f) = taken {
                f();
            }
            return;
        };
        let job_for_cb = Rc::clone(&job);
        let cb = Closure::once_into_js(move |_ts: f64| {
            let taken = job_for_cb.borrow_mut().take();
            if let Some(f) = taken {
                f();
            }
        });
        if window.request_animation_frame(cb.unchecked_ref()).is_err() {
            let taken = job.borrow_mut().take();
            if let Some(f) = taken {
                f();
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        f();
    }
}

// =============================================================================
// DOCUMENT FLAGS
// =============================================================================

pub fn set_body_scroll_locked(locked: bool) {
    #[cfg(feature = "csr")]
    {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        let _ = body.style().set_property("overflow", if locked { "hidden" } else { "" });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = locked;
    }
}

/// Root class set while the tab is in the background.
pub const PAGE_HIDDEN_CLASS: &str = "page-hidden";

pub fn set_page_hidden(hidden: bool) {
    #[cfg(feature = "csr")]
    {
        let Some(root) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) else {
            return;
        };
        let _ = root.class_list().toggle_with_force(PAGE_HIDDEN_CLASS, hidden);
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = hidden;
    }
}

/// Publish progress to CSS as `--scroll-progress: <n>%`.
pub fn set_scroll_progress(percent: f64) {
    #[cfg(feature = "csr")]
    {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            return;
        };
        let _ = root.style().set_property("--scroll-progress", &progress_css(percent));
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = percent;
    }
}

pub fn progress_css(percent: f64) -> String {
    format!("{:.1}%", percent.clamp(0.0, 100.0))
}
