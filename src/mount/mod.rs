//! Setup tasks run once the document is ready.
//!
//! DESIGN
//! ======
//! Each task checks its preconditions before touching the page and reports a
//! failed check as a [`MountSkip`]. Tasks are independent: a skip never stops
//! the ones after it. Only the toast handle is shared.

pub mod animation;
pub mod copy_fields;
pub mod drawer;
pub mod scroll_spy;
pub mod search;
pub mod theme;

use web_sys::Document;

use crate::components::toast::Toaster;
use crate::config::SiteConfig;
use crate::error::MountSkip;

/// Everything a setup task may use.
pub struct MountContext {
    pub document: Document,
    pub config: SiteConfig,
    pub toaster: Toaster,
}

pub type SetupTask = fn(&MountContext) -> Result<(), MountSkip>;

/// Setup tasks in mount order.
pub const TASKS: &[(&str, SetupTask)] = &[
    ("theme toggle", theme::mount),
    ("scroll spy", scroll_spy::mount),
    ("publication search", search::mount),
    ("copy fields", copy_fields::mount),
    ("animation", animation::mount),
    ("section drawer", drawer::mount),
];

pub fn run_all(ctx: &MountContext) {
    for (name, task) in TASKS {
        match task(ctx) {
            Ok(()) => log::debug!("mounted {name}"),
            Err(skip) => log::debug!("skipped {name}: {skip}"),
        }
    }
}
