//! Transient notification state.
//!
//! A single toast exists per page. Every `show` issues a new ticket; the
//! delayed hide only applies while its ticket is still current, so a newer
//! message supersedes any pending hide.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

pub const DEFAULT_TOAST_MS: u32 = 1600;
pub const TOAST_ID: &str = "toast-lite";

/// Anything that can surface a short confirmation message.
pub trait Notify {
    fn notify(&self, message: &str);
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub message: String,
    pub visible: bool,
    ticket: u64,
}

impl ToastState {
    /// Show `message` and return the ticket its hide timer must present.
    pub fn show(&mut self, message: impl Into<String>) -> u64 {
        self.message = message.into();
        self.visible = true;
        self.ticket = self.ticket.wrapping_add(1);
        self.ticket
    }

    /// Hide the toast if `ticket` belongs to the latest `show`.
    pub fn expire(&mut self, ticket: u64) -> bool {
        if ticket != self.ticket || !self.visible {
            return false;
        }
        self.visible = false;
        true
    }
}
