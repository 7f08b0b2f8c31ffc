//! Row selection bookkeeping.
//!
//! Selection is tracked by row identifier. The list of selected rows is
//! always derived from the current rows, so rows that disappear from the
//! source drop out of the report without the set being touched.

use std::collections::HashSet;

use super::identity::IdentifiedRow;

/// Set of selected row ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    selected: HashSet<String>,
}

impl Selection {
    /// Create a new empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a selection holding the given ids.
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            selected: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Selected ids in ascending order.
    pub fn selected(&self) -> Vec<String> {
        let mut ids: Vec<_> = self.selected.iter().cloned().collect();
        ids.sort();
        ids
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Flip an id in or out of the set.
    pub fn toggle(&mut self, id: &str) {
        if !self.selected.remove(id) {
            self.selected.insert(id.to_string());
        }
    }

    /// Add every given id.
    pub fn select_all<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) {
        self.selected.extend(ids.into_iter().map(str::to_string));
    }
}

/// A new selection together with the rows it selects.
#[derive(Debug, Clone)]
pub struct SelectionOutcome<'a, T> {
    pub selection: Selection,
    /// Selected raw rows, in source order.
    pub selected_rows: Vec<&'a T>,
}

/// Rows whose id is in the selection, in source order.
pub fn selected_rows<'a, T>(rows: &[IdentifiedRow<'a, T>], selection: &Selection) -> Vec<&'a T> {
    rows.iter()
        .filter(|r| selection.is_selected(&r.id))
        .map(|r| r.row)
        .collect()
}

/// Whether the select-all control reads as checked.
pub fn all_selected<T>(rows: &[IdentifiedRow<'_, T>], selection: &Selection) -> bool {
    !rows.is_empty() && selection.len() == rows.len()
}

/// Select every row, or clear the selection if every row is already selected.
///
/// "Every row" is judged by count. With duplicate ids the set can never reach
/// the row count, so this keeps selecting all.
pub fn toggle_all<'a, T>(
    rows: &[IdentifiedRow<'a, T>],
    current: &Selection,
) -> SelectionOutcome<'a, T> {
    let selection = if all_selected(rows, current) {
        Selection::new()
    } else {
        let mut all = Selection::new();
        all.select_all(rows.iter().map(|r| r.id.as_str()));
        all
    };

    SelectionOutcome {
        selected_rows: selected_rows(rows, &selection),
        selection,
    }
}

/// Flip a single id in or out of the selection.
pub fn toggle_one<'a, T>(
    rows: &[IdentifiedRow<'a, T>],
    current: &Selection,
    id: &str,
) -> SelectionOutcome<'a, T> {
    let mut selection = current.clone();
    selection.toggle(id);

    SelectionOutcome {
        selected_rows: selected_rows(rows, &selection),
        selection,
    }
}
