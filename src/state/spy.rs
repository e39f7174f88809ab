//! Scroll-spy selection.
//!
//! One observer callback delivers a batch of visibility samples. The most
//! visible intersecting section wins and its link becomes the only active
//! one. When nothing in a batch intersects, the previous marking is kept.
//! Equal ratios resolve to the first sample in callback order; the browser
//! does not specify that order.

#[cfg(test)]
#[path = "spy_test.rs"]
mod spy_test;

pub const DEFAULT_THRESHOLDS: [f64; 3] = [0.25, 0.5, 0.75];
pub const ACTIVE_CLASS: &str = "active";
pub const NAV_LINK_SELECTOR: &str = "#navbar a.nav-link.scrollto";

/// Visibility sample for one observed section.
#[derive(Clone, Debug, PartialEq)]
pub struct Observation {
    pub target_id: String,
    pub intersecting: bool,
    pub ratio: f64,
}

impl Observation {
    pub fn new(target_id: impl Into<String>, intersecting: bool, ratio: f64) -> Self {
        Self { target_id: target_id.into(), intersecting, ratio }
    }
}

/// Pick the intersecting sample with the highest ratio.
#[must_use]
pub fn most_visible(samples: &[Observation]) -> Option<&Observation> {
    samples
        .iter()
        .filter(|s| s.intersecting)
        .fold(None, |best: Option<&Observation>, s| match best {
            Some(b) if b.ratio >= s.ratio => Some(b),
            _ => Some(s),
        })
}

/// Active-link bookkeeping for one set of navigation links.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SpyState {
    hrefs: Vec<String>,
    active: Option<usize>,
}

impl SpyState {
    pub fn new(hrefs: Vec<String>) -> Self {
        Self { hrefs, active: None }
    }

    /// Apply one callback batch.
    ///
    /// Returns `true` when the link classes must be re-projected. The new
    /// active link may be `None` if the winning section has no link.
    pub fn observe(&mut self, samples: &[Observation]) -> bool {
        let Some(winner) = most_visible(samples) else {
            return false;
        };
        let fragment = format!("#{}", winner.target_id);
        self.active = self.hrefs.iter().position(|href| *href == fragment);
        true
    }

    #[must_use]
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }
}

/// Section id referenced by an in-page link, if the href is a fragment.
#[must_use]
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}
