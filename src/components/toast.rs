//! Transient notification element and its page-wide handle.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

use crate::state::toast::{Notify, TOAST_ID, ToastState};

/// Copyable handle through which any component raises a toast.
#[derive(Clone, Copy)]
pub struct Toaster {
    state: RwSignal<ToastState>,
    hide_after_ms: u32,
}

impl Toaster {
    pub fn new(hide_after_ms: u32) -> Self {
        Self { state: RwSignal::new(ToastState::default()), hide_after_ms }
    }

    /// Render the toast element into `<body>`, once per page.
    ///
    /// Later calls return the handle created by the first one.
    #[cfg(feature = "csr")]
    pub fn install(document: &web_sys::Document, hide_after_ms: u32) -> Self {
        if let Some(existing) = INSTALLED.with(std::cell::Cell::get) {
            return existing;
        }
        let toaster = Self::new(hide_after_ms);
        if let Some(body) = document.body() {
            // Static markup may ship its own placeholder; ours replaces it.
            if let Some(stale) = document.get_element_by_id(TOAST_ID) {
                stale.remove();
            }
            let state = toaster.state;
            leptos::mount::mount_to(body, move || view! { <Toast state/> }).forget();
        }
        INSTALLED.with(|cell| cell.set(Some(toaster)));
        toaster
    }
}

#[cfg(feature = "csr")]
thread_local! {
    static INSTALLED: std::cell::Cell<Option<Toaster>> = const { std::cell::Cell::new(None) };
}

impl Notify for Toaster {
    fn notify(&self, message: &str) {
        let ticket = self.state.try_update(|t| t.show(message)).unwrap_or_default();
        #[cfg(feature = "csr")]
        {
            let state = self.state;
            gloo_timers::callback::Timeout::new(self.hide_after_ms, move || {
                state.update(|t| {
                    t.expire(ticket);
                });
            })
            .forget();
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = ticket;
        }
    }
}

/// The single toast element.
#[component]
pub fn Toast(state: RwSignal<ToastState>) -> impl IntoView {
    view! {
        <div id=TOAST_ID class="toast-lite" class:show=move || state.with(|t| t.visible) role="status" aria-live="polite">
            {move || state.with(|t| t.message.clone())}
        </div>
    }
}
