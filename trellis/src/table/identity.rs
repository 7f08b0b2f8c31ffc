//! Row identity assignment.

use std::fmt;
use std::sync::Arc;

/// Caller-supplied identity function: `(row, position) -> id`.
pub type RowIdFn<T> = Arc<dyn Fn(&T, usize) -> String + Send + Sync>;

/// A row paired with the identifier used for selection tracking.
pub struct IdentifiedRow<'a, T> {
    pub id: String,
    pub row: &'a T,
}

impl<T> Clone for IdentifiedRow<'_, T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            row: self.row,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for IdentifiedRow<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdentifiedRow")
            .field("id", &self.id)
            .field("row", self.row)
            .finish()
    }
}

/// Give every row an identifier.
///
/// Without an identity function the identifier is the row's position as a
/// string. Positional ids move with the data: reordering or filtering the
/// source list silently re-targets any selection recorded against them.
/// Duplicate ids are not detected.
pub fn assign_identities<'a, T>(
    rows: &'a [T],
    id_fn: Option<&RowIdFn<T>>,
) -> Vec<IdentifiedRow<'a, T>> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| IdentifiedRow {
            id: match id_fn {
                Some(f) => f(row, index),
                None => index.to_string(),
            },
            row,
        })
        .collect()
}
