//! Single-threaded publish/subscribe for page-level browser events.
//!
//! The app attaches each raw window listener exactly once and republishes what
//! it sees as [`PageEvent`]s. Components subscribe and hold the returned
//! [`Subscription`]; dropping it unsubscribes, so an unmounted component can
//! never be called again.
//!
//! Handlers may subscribe or unsubscribe while an event is being dispatched:
//! `publish` works from a snapshot of the handler list taken before the first
//! call.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::scroll::ScrollMetrics;

/// A key press reduced to what the page reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
    /// `KeyboardEvent.key` value, e.g. `"Escape"`, `"ArrowUp"`, `"Tab"`.
    pub key: String,
    pub shift: bool,
}

impl KeyInput {
    #[must_use]
    pub fn new(key: &str, shift: bool) -> Self {
        Self { key: key.to_owned(), shift }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    Scroll(ScrollMetrics),
    Resize { width: f64 },
    Online(bool),
    Visibility(bool),
    Key(KeyInput),
    SystemTheme { dark: bool },
}

type Handler<E> = Rc<dyn Fn(&E)>;

struct Registry<E> {
    handlers: Vec<(u64, Handler<E>)>,
    next_id: u64,
}

pub struct EventBus<E> {
    inner: Rc<RefCell<Registry<E>>>,
}

impl<E> Clone for EventBus<E> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl<E> Default for EventBus<E> {
    fn default() -> Self {
        Self { inner: Rc::new(RefCell::new(Registry { handlers: Vec::new(), next_id: 0 })) }
    }
}

impl<E: 'static> EventBus<E> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, handler: impl Fn(&E) + 'static) -> Subscription {
        let mut registry = self.inner.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.handlers.push((id, Rc::new(handler)));
        drop(registry);

        let weak: Weak<RefCell<Registry<E>>> = Rc::downgrade(&self.inner);
        Subscription {
            cancel: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.borrow_mut().handlers.retain(|(hid, _)| *hid != id);
                }
            })),
        }
    }

    /// Call every handler registered at the moment of the call.
    pub fn publish(&self, event: &E) {
        let snapshot = self.inner.borrow().handlers.iter().map(|(_, h)| Rc::clone(h)).collect::<Vec<_>>();
        for handler in snapshot {
            handler(event);
        }
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().handlers.len()
    }
}

/// Live registration on an [`EventBus`]. Unsubscribes on drop.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Unsubscribe now. Same as dropping.
    pub fn cancel(mut self) {
        self.run_cancel();
    }

    fn run_cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_cancel();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("active", &self.cancel.is_some()).finish()
    }
}
