//! Notifications emitted by the table.

use super::sort::SortState;

/// Something the caller should hear about after a table interaction.
#[derive(Debug, Clone, PartialEq)]
pub enum TableEvent<T> {
    /// The selection changed. Carries every selected raw row, in source order.
    SelectionChanged(Vec<T>),
    /// A header click changed the sort state.
    SortChanged(SortState),
}
