//! Section drawer state machine and build policy.
//!
//! The drawer is `closed` or `open`. The body class `drawer-open`, the
//! trigger's `aria-expanded` and the panel's `aria-hidden` are all derived
//! from [`DrawerState`].

#[cfg(test)]
#[path = "drawer_test.rs"]
mod drawer_test;

use serde::Deserialize;

use crate::error::MountSkip;
use crate::state::spy::fragment_target;

pub const DRAWER_BODY_CLASS: &str = "drawer-open";
pub const DRAWER_ID: &str = "sectionDrawer";
pub const DRAWER_TOGGLE_ID: &str = "drawerToggle";
pub const DEFAULT_MIN_LINKS: usize = 3;

/// Something that happened to the drawer or its controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawerEvent {
    ToggleClicked,
    BackdropClicked,
    CloseClicked,
    EscapePressed,
    LinkActivated,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrawerState {
    open: bool,
}

impl DrawerState {
    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Apply `event`. Returns whether the state changed.
    pub fn handle(&mut self, event: DrawerEvent) -> bool {
        let before = self.open;
        match event {
            DrawerEvent::ToggleClicked => self.open = !self.open,
            DrawerEvent::BackdropClicked
            | DrawerEvent::CloseClicked
            | DrawerEvent::EscapePressed
            | DrawerEvent::LinkActivated => self.open = false,
        }
        before != self.open
    }

    #[must_use]
    pub fn aria_expanded(self) -> &'static str {
        if self.open { "true" } else { "false" }
    }

    #[must_use]
    pub fn aria_hidden(self) -> &'static str {
        if self.open { "false" } else { "true" }
    }
}

/// In-page section link copied from the primary navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionLink {
    pub href: String,
    pub label: String,
}

impl SectionLink {
    /// Build from a nav anchor's `href` and text, rejecting anything that is
    /// not a fragment pointing at an existing element.
    pub fn from_anchor(href: &str, text: &str, target_exists: impl Fn(&str) -> bool) -> Option<Self> {
        let id = fragment_target(href)?;
        if !target_exists(id) {
            return None;
        }
        let label = text.trim();
        let label = if label.is_empty() { id.to_owned() } else { label.to_owned() };
        Some(Self { href: href.to_owned(), label })
    }

    #[must_use]
    pub fn target_id(&self) -> &str {
        self.href.trim_start_matches('#')
    }
}

/// How a page gets its drawer trigger.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum DrawerPolicy {
    /// The page ships `#drawerToggle`; with no links it is hidden.
    #[default]
    ExistingToggle,
    /// The drawer creates its own trigger once enough links exist.
    SynthesizedToggle {
        #[serde(default = "default_min_links")]
        min_links: usize,
    },
}

fn default_min_links() -> usize {
    DEFAULT_MIN_LINKS
}

/// Outcome of the build precondition check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawerPlan {
    Build { synthesize_toggle: bool },
    HideToggle,
}

impl DrawerPolicy {
    /// Decide what to build for `links` section links.
    pub fn plan(self, links: usize, has_toggle: bool) -> Result<DrawerPlan, MountSkip> {
        match self {
            Self::ExistingToggle => {
                if !has_toggle {
                    return Err(MountSkip::MissingAnchor("#drawerToggle"));
                }
                if links == 0 {
                    return Ok(DrawerPlan::HideToggle);
                }
                Ok(DrawerPlan::Build { synthesize_toggle: false })
            }
            Self::SynthesizedToggle { min_links } => {
                if links == 0 {
                    return Err(MountSkip::NoSections);
                }
                if links < min_links {
                    return Err(MountSkip::TooFewLinks { found: links, required: min_links });
                }
                Ok(DrawerPlan::Build { synthesize_toggle: !has_toggle })
            }
        }
    }
}

/// Scroll animation for drawer navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollMode {
    Smooth,
    Instant,
}

impl ScrollMode {
    #[must_use]
    pub fn for_reduced_motion(reduced: bool) -> Self {
        if reduced { Self::Instant } else { Self::Smooth }
    }
}
