//! Page-level coordinator.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app feeds [`PageShell`] route changes, scroll samples, resizes, key
//! presses and the online/visibility signals. The shell updates its flags and
//! returns [`ShellCommand`]s for the side effects the DOM layer must perform.
//! It never touches the DOM itself.
//!
//! DESIGN
//! ======
//! The mobile menu and the project modal each hold their own
//! [`LockToken`]; body scrolling comes back only when both have let go. The
//! menu only locks in the mobile layout, where it covers the page.
//! Online and visibility flags are display-only: nothing retries or queues
//! when the page goes offline, and a hidden page only gets a root class.

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

use crate::config::ShellConfig;
use crate::consts::SECTION_IDS;
use crate::events::KeyInput;
use crate::route::Route;
use crate::scroll::ScrollState;
use crate::scroll_lock::{LockChange, LockHolder, LockToken, ScrollLock};

/// A section anchor and its measured top, `None` when the element is not in
/// the document yet.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionOffset {
    pub id: String,
    pub top: Option<f64>,
}

impl SectionOffset {
    #[must_use]
    pub fn new(id: &str, top: Option<f64>) -> Self {
        Self { id: id.to_owned(), top }
    }
}

/// Side effect the DOM layer must carry out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Jump (`smooth: false`) or animate back to the top of the page.
    ScrollToTop { smooth: bool },
    SetTitle(String),
    /// Freeze (`true`) or restore (`false`) body scrolling.
    SetBodyScrollLocked(bool),
    /// Add (`true`) or remove (`false`) the `page-hidden` root class.
    SetPageHidden(bool),
}

/// The last section whose top is at or above `scroll_y + offset`.
///
/// Sections without a measured top are skipped. When nothing qualifies the
/// first listed section stays active; `None` only for an empty list.
#[must_use]
pub fn active_section(sections: &[SectionOffset], scroll_y: f64, offset: f64) -> Option<&str> {
    let position = scroll_y + offset;
    sections
        .iter()
        .rev()
        .find(|s| s.top.is_some_and(|top| top <= position))
        .or_else(|| sections.first())
        .map(|s| s.id.as_str())
}

#[derive(Debug)]
pub struct PageShell {
    config: ShellConfig,
    route: Route,
    active_section: String,
    is_mobile: bool,
    menu_open: bool,
    menu_lock: Option<LockToken>,
    modal_lock: Option<LockToken>,
    lock: ScrollLock,
    online: bool,
    visible: bool,
    navbar_scrolled: bool,
    show_back_to_top: bool,
    scroll_progress: f64,
}

impl PageShell {
    #[must_use]
    pub fn new(config: ShellConfig, viewport_width: f64) -> Self {
        let is_mobile = viewport_width <= config.mobile_breakpoint_px;
        Self {
            config,
            route: Route::Home,
            active_section: SECTION_IDS[0].to_owned(),
            is_mobile,
            menu_open: false,
            menu_lock: None,
            modal_lock: None,
            lock: ScrollLock::new(),
            online: true,
            visible: true,
            navbar_scrolled: false,
            show_back_to_top: false,
            scroll_progress: 0.0,
        }
    }

    // --- Routing ---

    /// Always scrolls to top and closes the mobile menu, then retitles the
    /// document. `project_title` names the project for detail routes.
    pub fn on_route_change(&mut self, path: &str, project_title: Option<&str>) -> Vec<ShellCommand> {
        self.route = Route::parse(path);
        log::debug!("route change: {path} -> {:?}", self.route);

        let mut commands = vec![ShellCommand::ScrollToTop { smooth: false }];
        commands.extend(self.close_menu());
        commands.push(ShellCommand::SetTitle(self.route.title(&self.config, project_title)));
        commands
    }

    // --- Scroll ---

    /// Update scroll-derived flags. Returns `true` when the active section
    /// changed.
    pub fn on_scroll_sample(&mut self, state: &ScrollState, sections: &[SectionOffset]) -> bool {
        self.navbar_scrolled = state.offset_y > self.config.navbar_scrolled_px;
        self.show_back_to_top = state.offset_y > self.config.back_to_top_px;
        self.scroll_progress = state.progress_percent;

        let Some(next) = active_section(sections, state.offset_y, self.config.active_section_offset_px) else {
            return false;
        };
        if next == self.active_section {
            return false;
        }
        next.clone_into(&mut self.active_section);
        true
    }

    // --- Mobile menu ---

    pub fn toggle_menu(&mut self) -> Vec<ShellCommand> {
        if self.menu_open { self.close_menu() } else { self.open_menu() }
    }

    /// Open the menu. Body scroll is locked only in the mobile layout.
    pub fn open_menu(&mut self) -> Vec<ShellCommand> {
        if self.menu_open {
            return Vec::new();
        }
        self.menu_open = true;
        self.lock_menu()
    }

    /// Close the menu and release its scroll lock. No-op when closed.
    pub fn close_menu(&mut self) -> Vec<ShellCommand> {
        if !self.menu_open {
            return Vec::new();
        }
        self.menu_open = false;
        let Some(token) = self.menu_lock.take() else {
            return Vec::new();
        };
        lock_commands(self.lock.release(&token))
    }

    fn lock_menu(&mut self) -> Vec<ShellCommand> {
        if !self.is_mobile || self.menu_lock.is_some() {
            return Vec::new();
        }
        let (token, change) = self.lock.acquire(LockHolder::MobileMenu);
        self.menu_lock = Some(token);
        lock_commands(change)
    }

    // --- Project modal ---

    pub fn open_modal(&mut self) -> Vec<ShellCommand> {
        if self.modal_lock.is_some() {
            return Vec::new();
        }
        let (token, change) = self.lock.acquire(LockHolder::Modal);
        self.modal_lock = Some(token);
        lock_commands(change)
    }

    pub fn close_modal(&mut self) -> Vec<ShellCommand> {
        let Some(token) = self.modal_lock.take() else {
            return Vec::new();
        };
        lock_commands(self.lock.release(&token))
    }

    // --- Environment signals ---

    /// Leaving the mobile layout closes the menu; entering it with the menu
    /// open takes the menu's scroll lock.
    pub fn on_resize(&mut self, width: f64) -> Vec<ShellCommand> {
        self.is_mobile = width <= self.config.mobile_breakpoint_px;
        match (self.is_mobile, self.menu_open) {
            (false, _) => self.close_menu(),
            (true, true) => self.lock_menu(),
            (true, false) => Vec::new(),
        }
    }

    pub fn set_online(&mut self, online: bool) {
        self.online = online;
    }

    /// Record page visibility. Emits `SetPageHidden` only on a change.
    pub fn set_visible(&mut self, visible: bool) -> Vec<ShellCommand> {
        if self.visible == visible {
            return Vec::new();
        }
        self.visible = visible;
        vec![ShellCommand::SetPageHidden(!visible)]
    }

    /// Page-wide shortcuts. Shift+ArrowUp jumps to top; Escape closes the
    /// menu. Keys inside an open modal belong to the modal.
    pub fn on_key(&mut self, input: &KeyInput) -> Vec<ShellCommand> {
        if self.modal_lock.is_some() {
            return Vec::new();
        }
        match input.key.as_str() {
            "ArrowUp" if input.shift => vec![ShellCommand::ScrollToTop { smooth: true }],
            "Escape" => self.close_menu(),
            _ => Vec::new(),
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    #[must_use]
    pub fn route(&self) -> &Route {
        &self.route
    }

    #[must_use]
    pub fn active(&self) -> &str {
        &self.active_section
    }

    #[must_use]
    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    #[must_use]
    pub fn is_modal_open(&self) -> bool {
        self.modal_lock.is_some()
    }

    #[must_use]
    pub fn is_mobile(&self) -> bool {
        self.is_mobile
    }

    #[must_use]
    pub fn is_scroll_locked(&self) -> bool {
        self.lock.is_locked()
    }

    #[must_use]
    pub fn is_online(&self) -> bool {
        self.online
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn navbar_scrolled(&self) -> bool {
        self.navbar_scrolled
    }

    #[must_use]
    pub fn show_back_to_top(&self) -> bool {
        self.show_back_to_top
    }

    #[must_use]
    pub fn scroll_progress(&self) -> f64 {
        self.scroll_progress
    }
}

fn lock_commands(change: LockChange) -> Vec<ShellCommand> {
    match change {
        LockChange::Locked => vec![ShellCommand::SetBodyScrollLocked(true)],
        LockChange::Unlocked => vec![ShellCommand::SetBodyScrollLocked(false)],
        LockChange::Unchanged => Vec::new(),
    }
}
