//! Data table: row identity, sorting, selection and view derivation.
//!
//! The free functions in [`identity`], [`sort`] and [`selection`] are the
//! pure transformations. [`DataTable`] wires them to the transient state a
//! table instance owns and turns interactions into [`TableEvent`]s.

pub mod events;
pub mod identity;
pub mod item;
pub mod render;
pub mod selection;
pub mod sort;
mod state;

pub use events::TableEvent;
pub use identity::{IdentifiedRow, RowIdFn, assign_identities};
pub use item::{Accessor, CellRenderer, Column, DeriveFn};
pub use render::{AriaSort, CellContent, CellView, EmptyRow, HeaderCell, RowView, TableView};
pub use selection::{Selection, SelectionOutcome, toggle_all, toggle_one};
pub use sort::{SortDirection, SortState, apply_sort, toggle_sort_column};
pub use state::{DEFAULT_EMPTY_MESSAGE, DataTable, TableId};
