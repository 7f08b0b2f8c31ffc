//! Single-column sorting.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::AccessError;
use crate::record::Record;
use crate::value::CellValue;

use super::identity::IdentifiedRow;
use super::item::Column;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn flip(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// The active sort key: a column and a direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    /// Key of the sorted column (see [`Column::key`]).
    pub column: String,
    pub direction: SortDirection,
}

impl SortState {
    pub fn ascending(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: SortDirection::Descending,
        }
    }
}

/// Compare two sort keys. Nulls go last in either direction.
pub fn compare_keys(a: &CellValue, b: &CellValue, direction: SortDirection) -> Ordering {
    match (a.is_null(), b.is_null()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => direction.apply(a.compare(b)),
    }
}

/// Produce the sorted projection of `rows`.
///
/// The input is left untouched. With no sort state, or a sort state naming no
/// known column, the rows come back in input order. Ties keep input order.
///
/// Each row's key is read once before sorting; the first accessor failure is
/// returned instead of a partial ordering.
pub fn apply_sort<'a, T: Record>(
    rows: &[IdentifiedRow<'a, T>],
    sort: Option<&SortState>,
    columns: &[Column<T>],
) -> Result<Vec<IdentifiedRow<'a, T>>, AccessError> {
    let Some(sort) = sort else {
        return Ok(rows.to_vec());
    };
    let Some(column) = columns.iter().find(|c| c.key() == sort.column) else {
        return Ok(rows.to_vec());
    };

    let mut keyed = rows
        .iter()
        .map(|r| -> Result<_, AccessError> {
            Ok((column.value(r.row, &r.id)?.sort_key(), r.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    // slice::sort_by is stable
    keyed.sort_by(|(a, _), (b, _)| compare_keys(a, b, sort.direction));

    Ok(keyed.into_iter().map(|(_, row)| row).collect())
}

/// Compute the sort state after the header of `column_id` is activated.
///
/// A new column starts ascending; the current column flips direction. There is
/// no way back to unsorted. Unknown or non-sortable columns leave the state
/// unchanged.
pub fn toggle_sort_column<T>(
    current: Option<&SortState>,
    columns: &[Column<T>],
    column_id: &str,
) -> Option<SortState> {
    let sortable = columns
        .iter()
        .find(|c| c.key() == column_id)
        .is_some_and(|c| c.sortable);

    if !sortable {
        return current.cloned();
    }

    Some(match current {
        Some(state) if state.column == column_id => SortState {
            column: column_id.to_string(),
            direction: state.direction.flip(),
        },
        _ => SortState::ascending(column_id),
    })
}
