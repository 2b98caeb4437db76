//! Bounded selection of tools for side-by-side comparison.

use crate::domain::ToolRecord;

/// Maximum number of tools that can be compared at once
pub const MAX_SELECTION: usize = 3;

/// Insertion-ordered set of selected tool ids, never larger than
/// [`MAX_SELECTION`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: Vec<String>,
}

impl SelectionSet {
    /// Create an empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a selection from ids, keeping the first [`MAX_SELECTION`]
    /// distinct entries.
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut selection = Self::new();
        for id in ids {
            let id = id.into();
            if selection.is_full() {
                break;
            }
            if !selection.contains(&id) {
                selection.ids.push(id);
            }
        }
        selection
    }

    /// Selected ids in the order they were added
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.ids.len() >= MAX_SELECTION
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|s| s == id)
    }

    /// Return a new selection with `tool` removed if present, appended if
    /// there is room, or unchanged if already at capacity.
    pub fn toggled(&self, tool: &ToolRecord) -> Self {
        if self.contains(&tool.id) {
            log::debug!("Deselecting tool {}", tool.id);
            return Self {
                ids: self.ids.iter().filter(|id| **id != tool.id).cloned().collect(),
            };
        }

        if self.is_full() {
            log::debug!("Selection full, ignoring tool {}", tool.id);
            return self.clone();
        }

        log::debug!("Selecting tool {}", tool.id);
        let mut ids = self.ids.clone();
        ids.push(tool.id.clone());
        Self { ids }
    }

    /// Comma-separated ids, as accepted by `parse_compare_ids`
    pub fn to_query(&self) -> String {
        self.ids.join(",")
    }
}

/// Toggle `tool` in `current`, returning the new selection.
pub fn toggle_selection(current: &SelectionSet, tool: &ToolRecord) -> SelectionSet {
    current.toggled(tool)
}

/// Membership test
pub fn is_selected(selection: &SelectionSet, id: &str) -> bool {
    selection.contains(id)
}
