//! Reference-counted body scroll lock.
//!
//! The mobile menu and the project modal can both want the page frozen at the
//! same time. Each caller gets its own [`LockToken`]; the body is released only
//! when the last outstanding token is returned. Returning a token twice does
//! nothing.

#[cfg(test)]
#[path = "scroll_lock_test.rs"]
mod scroll_lock_test;

/// Who is holding the page still.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LockHolder {
    MobileMenu,
    Modal,
}

/// Proof of one acquisition. Not `Clone`: a token can be released once.
#[derive(Debug, PartialEq, Eq)]
pub struct LockToken {
    id: u64,
    holder: LockHolder,
}

impl LockToken {
    #[must_use]
    pub fn holder(&self) -> LockHolder {
        self.holder
    }
}

/// What the DOM needs to do after an acquire or release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockChange {
    /// First holder arrived: freeze body scrolling.
    Locked,
    /// Last holder left: restore body scrolling.
    Unlocked,
    /// Lock state is unchanged.
    Unchanged,
}

#[derive(Debug, Default)]
pub struct ScrollLock {
    held: Vec<(u64, LockHolder)>,
    next_id: u64,
}

impl ScrollLock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn acquire(&mut self, holder: LockHolder) -> (LockToken, LockChange) {
        let id = self.next_id;
        self.next_id += 1;
        let change = if self.held.is_empty() { LockChange::Locked } else { LockChange::Unchanged };
        self.held.push((id, holder));
        (LockToken { id, holder }, change)
    }

    pub fn release(&mut self, token: &LockToken) -> LockChange {
        let Some(pos) = self.held.iter().position(|(id, _)| *id == token.id) else {
            return LockChange::Unchanged;
        };
        self.held.remove(pos);
        if self.held.is_empty() { LockChange::Unlocked } else { LockChange::Unchanged }
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        !self.held.is_empty()
    }

    /// Current holders, oldest first.
    pub fn holders(&self) -> impl Iterator<Item = LockHolder> + '_ {
        self.held.iter().map(|(_, h)| *h)
    }
}
