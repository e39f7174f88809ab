//! Leptos views injected into the static page.
//!
//! ARCHITECTURE
//! ============
//! Components render only from their state signals. Side effects that touch
//! markup the page already owns (body classes, existing nav links, storage)
//! are registered by the matching `mount` task.

pub mod publication_search;
pub mod section_drawer;
pub mod theme_toggle;
pub mod toast;
