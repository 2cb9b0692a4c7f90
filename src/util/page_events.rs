//! Raw window and document listeners republished on the page event bus.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app root calls [`attach`] once. Scroll, resize, connectivity,
//! visibility, key presses, and the system color scheme each get one DOM
//! listener, and every component that cares subscribes to the bus instead.
//!
//! TRADE-OFFS
//! ==========
//! Scroll events publish raw metrics on every event; coalescing to one sample
//! per frame happens in the scroll tracker, not here.

#[cfg(test)]
#[path = "page_events_test.rs"]
mod page_events_test;

use pagecore::events::{EventBus, PageEvent};

/// Listener guards. Dropping the value detaches every listener.
#[derive(Default)]
pub struct PageListeners {
    #[cfg(feature = "csr")]
    guards: Vec<crate::util::listener::EventListener>,
}

impl PageListeners {
    pub fn len(&self) -> usize {
        #[cfg(feature = "csr")]
        {
            self.guards.len()
        }
        #[cfg(not(feature = "csr"))]
        {
            0
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Attach every page-level listener and forward what it sees to `bus`.
pub fn attach(bus: &EventBus<PageEvent>) -> PageListeners {
    #[cfg(feature = "csr")]
    {
        attach_browser(bus)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = bus;
        PageListeners::default()
    }
}

#[cfg(feature = "csr")]
fn attach_browser(bus: &EventBus<PageEvent>) -> PageListeners {
    use pagecore::events::KeyInput;
    use wasm_bindgen::JsCast;

    use crate::util::listener::EventListener;
    use crate::util::scroll_dom;

    let mut listeners = PageListeners::default();
    let Some(window) = web_sys::window() else {
        return listeners;
    };
    let mut push = |guard: Option<EventListener>| listeners.guards.extend(guard);

    let on_scroll = bus.clone();
    push(EventListener::attach(&window, "scroll", move |_| {
        on_scroll.publish(&PageEvent::Scroll(scroll_dom::read_metrics()));
    }));

    let on_resize = bus.clone();
    push(EventListener::attach(&window, "resize", move |_| {
        on_resize.publish(&PageEvent::Resize { width: scroll_dom::viewport_width() });
    }));

    let on_online = bus.clone();
    push(EventListener::attach(&window, "online", move |_| on_online.publish(&PageEvent::Online(true))));
    let on_offline = bus.clone();
    push(EventListener::attach(&window, "offline", move |_| on_offline.publish(&PageEvent::Online(false))));

    if let Some(document) = window.document() {
        let on_visibility = bus.clone();
        let doc = document.clone();
        push(EventListener::attach(&document, "visibilitychange", move |_| {
            let visible = doc.visibility_state() == web_sys::VisibilityState::Visible;
            on_visibility.publish(&PageEvent::Visibility(visible));
        }));

        let on_key = bus.clone();
        push(EventListener::attach(&document, "keydown", move |ev| {
            if let Some(key) = ev.dyn_ref::<web_sys::KeyboardEvent>() {
                on_key.publish(&PageEvent::Key(KeyInput::new(&key.key(), key.shift_key())));
            }
        }));
    }

    if let Ok(Some(query)) = window.match_media("(prefers-color-scheme: dark)") {
        let on_scheme = bus.clone();
        push(EventListener::attach(&query, "change", move |ev| {
            if let Some(change) = ev.dyn_ref::<web_sys::MediaQueryListEvent>() {
                on_scheme.publish(&PageEvent::SystemTheme { dark: change.matches() });
            }
        }));
    }

    log::debug!("attached {} page listeners", listeners.len());
    listeners
}

/// Initial connectivity flag. `true` outside a browser.
pub fn is_online() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window().is_none_or(|w| w.navigator().on_line())
    }
    #[cfg(not(feature = "csr"))]
    {
        true
    }
}
