//! Publication list filtering.
//!
//! Entries are the list items present when the search row mounts. Each entry
//! belongs to a visibility group, its nearest enclosing list (or itself when
//! it has none). A group is shown when the query is empty or any of its
//! entries contains the query, case-insensitively.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

pub const CLEARED_MESSAGE: &str = "Cleared";
pub const SEARCH_INPUT_ID: &str = "pubSearch";

#[derive(Clone, Debug, PartialEq, Eq)]
struct FilterEntry {
    text: String,
    group: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PublicationFilter {
    entries: Vec<FilterEntry>,
    groups: usize,
}

impl PublicationFilter {
    /// Build from `(text, group)` pairs. Group indices are dense from zero.
    pub fn new(entries: impl IntoIterator<Item = (String, usize)>) -> Self {
        let entries = entries
            .into_iter()
            .map(|(text, group)| FilterEntry { text: text.to_lowercase(), group })
            .collect::<Vec<_>>();
        let groups = entries.iter().map(|e| e.group + 1).max().unwrap_or(0);
        Self { entries, groups }
    }

    #[must_use]
    pub fn normalize(query: &str) -> String {
        query.trim().to_lowercase()
    }

    /// Visibility per group for `query`.
    #[must_use]
    pub fn visibility(&self, query: &str) -> Vec<bool> {
        let query = Self::normalize(query);
        let mut visible = vec![query.is_empty(); self.groups];
        if query.is_empty() {
            return visible;
        }
        for entry in &self.entries {
            if entry.text.contains(&query) {
                visible[entry.group] = true;
            }
        }
        visible
    }
}

/// Assign each entry a dense group index from its visibility container.
///
/// Equal containers share an index, numbered in order of first appearance.
/// Returns the distinct containers alongside the per-entry indices.
pub fn group_by_container<T: PartialEq>(containers: impl IntoIterator<Item = T>) -> (Vec<T>, Vec<usize>) {
    let mut distinct: Vec<T> = Vec::new();
    let mut indices = Vec::new();
    for container in containers {
        let index = match distinct.iter().position(|c| *c == container) {
            Some(index) => index,
            None => {
                distinct.push(container);
                distinct.len() - 1
            }
        };
        indices.push(index);
    }
    (distinct, indices)
}
