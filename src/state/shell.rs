//! Reactive wrapper around the page shell.
//!
//! DESIGN
//! ======
//! `PageShell` decides; [`ShellHandle::dispatch`] mutates it inside the
//! signal and then carries out the returned commands, so every caller gets
//! the same side effects for the same decision.

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

use leptos::prelude::*;
use pagecore::route::Route;
use pagecore::shell::{PageShell, ShellCommand};

use crate::state::ui::UiState;
use crate::util::scroll_dom;

#[derive(Clone, Copy)]
pub struct ShellHandle {
    pub shell: RwSignal<PageShell>,
    pub ui: RwSignal<UiState>,
}

impl ShellHandle {
    pub fn new(shell: PageShell, ui: UiState) -> Self {
        Self { shell: RwSignal::new(shell), ui: RwSignal::new(ui) }
    }

    /// Run `f` against the shell, then perform the commands it returns.
    pub fn dispatch(self, f: impl FnOnce(&mut PageShell) -> Vec<ShellCommand>) {
        let commands = self.shell.try_update(f).unwrap_or_default();
        for command in commands {
            self.perform(command);
        }
    }

    pub fn perform(self, command: ShellCommand) {
        match command {
            ShellCommand::ScrollToTop { smooth } => {
                let (duration, easing) = self.shell.with_untracked(|s| (s.config().smooth_scroll_ms, s.config().easing()));
                scroll_dom::scroll_to_top(smooth, duration, easing);
            }
            ShellCommand::SetTitle(title) => self.ui.update(|u| u.document_title = title),
            ShellCommand::SetBodyScrollLocked(locked) => scroll_dom::set_body_scroll_locked(locked),
            ShellCommand::SetPageHidden(hidden) => scroll_dom::set_page_hidden(hidden),
        }
    }

    /// Close the mobile menu, then animate to home section `id` below the
    /// fixed navbar.
    pub fn scroll_to_section(self, id: &str) {
        self.dispatch(PageShell::close_menu);
        let (offset, duration, easing) = self.shell.with_untracked(|s| {
            let config = s.config();
            (config.header_offset_px, config.smooth_scroll_ms, config.easing())
        });
        scroll_dom::scroll_to_section(id, offset, duration, easing);
    }

    /// Bring element `id` fully into view below the navbar, if it is not.
    pub fn reveal(self, id: &str) -> bool {
        let (offset, duration, easing) = self.shell.with_untracked(|s| {
            let config = s.config();
            (config.header_offset_px, config.smooth_scroll_ms, config.easing())
        });
        scroll_dom::reveal_element(id, offset, duration, easing)
    }

    /// Show project `id` in the modal and lock page scroll.
    pub fn open_project(self, id: u32) {
        self.ui.update(|u| u.modal_project = Some(id));
        self.dispatch(PageShell::open_modal);
    }

    pub fn close_project(self) {
        self.ui.update(|u| u.modal_project = None);
        self.dispatch(PageShell::close_modal);
    }

    pub fn is_home(self) -> bool {
        self.shell.with(|s| *s.route() == Route::Home)
    }
}
