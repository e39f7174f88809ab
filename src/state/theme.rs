//! Light/dark theme state.
//!
//! The stored preference lives under a single `localStorage` key with value
//! `"dark"` or `"light"`. Anything else, including absence, reads as light.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::util::preference::PreferenceStore;

pub const THEME_STORAGE_KEY: &str = "theme";
pub const DARK_BODY_CLASS: &str = "theme-dark";
pub const THEME_TOGGLE_ID: &str = "themeToggle";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Icon shown on the toggle: a moon while light, a sun while dark.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => "bi bi-moon-stars",
            Self::Dark => "bi bi-sun",
        }
    }

    /// Toast text announcing the mode just switched to.
    #[must_use]
    pub fn announcement(self) -> &'static str {
        match self {
            Self::Light => "Light mode",
            Self::Dark => "Dark mode",
        }
    }
}

/// Theme mode bound to its persistence.
#[derive(Debug)]
pub struct ThemeController<S> {
    store: S,
    key: String,
    mode: ThemeMode,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Read the initial mode from `store`.
    pub fn load(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let mode = ThemeMode::from_stored(store.get(&key).as_deref());
        Self { store, key, mode }
    }

    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Switch to `mode` and persist it. Returns whether anything changed.
    pub fn set(&mut self, mode: ThemeMode) -> bool {
        if self.mode == mode {
            return false;
        }
        self.mode = mode;
        self.store.set(&self.key, mode.as_str());
        true
    }

    /// Flip the mode, persist it, and return the new mode.
    pub fn toggle(&mut self) -> ThemeMode {
        let next = self.mode.toggled();
        self.set(next);
        next
    }
}
