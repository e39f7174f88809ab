//! Copyable contact fields.
//!
//! Fields are preferably marked in markup with `data-copy="<value>"` (and an
//! optional `data-copy-hint`). Pages without the attribute still work: leaf
//! elements whose trimmed text equals a configured literal are picked up.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use serde::Deserialize;

pub const EMAIL: &str = "rahul.barthwal@mathematik.uni-stuttgart.de";
pub const PHONE: &str = "+49 711 685 65884";
pub const COPY_MARKER_CLASS: &str = "copy-hover";
pub const COPY_ATTR: &str = "data-copy";
pub const COPY_HINT_ATTR: &str = "data-copy-hint";
pub const DEFAULT_COPY_HINT: &str = "Click to copy";

/// A value that can be copied, with the hint shown on hover.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ContactField {
    pub value: String,
    #[serde(default = "default_hint")]
    pub hint: String,
}

fn default_hint() -> String {
    DEFAULT_COPY_HINT.to_owned()
}

pub fn default_contacts() -> Vec<ContactField> {
    vec![
        ContactField { value: EMAIL.to_owned(), hint: "Click to copy email".to_owned() },
        ContactField { value: PHONE.to_owned(), hint: "Click to copy phone".to_owned() },
    ]
}

impl ContactField {
    /// Read a field from `data-copy` / `data-copy-hint` attribute values.
    pub fn from_data_attributes(value: Option<String>, hint: Option<String>) -> Option<Self> {
        let value = value?.trim().to_owned();
        if value.is_empty() {
            return None;
        }
        let hint = hint
            .map(|h| h.trim().to_owned())
            .filter(|h| !h.is_empty())
            .unwrap_or_else(default_hint);
        Some(Self { value, hint })
    }
}

/// Literal whose value equals the trimmed `text` exactly.
#[must_use]
pub fn match_literal<'a>(text: &str, fields: &'a [ContactField]) -> Option<&'a ContactField> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    fields.iter().find(|f| f.value == text)
}

/// Enter and Space activate a copy field from the keyboard.
#[must_use]
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}
