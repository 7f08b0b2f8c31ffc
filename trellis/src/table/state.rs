//! Table view-binding state.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::AccessError;
use crate::events::EventResult;
use crate::record::Record;

use super::events::TableEvent;
use super::identity::{IdentifiedRow, RowIdFn, assign_identities};
use super::item::Column;
use super::selection::{self, Selection};
use super::sort::{self, SortState};

/// Message shown when there are no rows and nothing is loading.
pub const DEFAULT_EMPTY_MESSAGE: &str = "No data to display.";

/// Unique identifier for a table instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableId(usize);

impl TableId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for TableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__table_{}", self.0)
    }
}

/// A sortable, selectable data table.
///
/// `DataTable<T>` holds the caller's props (rows, columns, flags) next to the
/// transient UI state the table owns itself: the sort key and the selection
/// set. Rows are never reordered in place; sorting is a projection computed
/// when the view is derived.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use serde_json::json;
/// use trellis::prelude::*;
///
/// let rows = vec![
///     json!({"id": "u1", "name": "Mohit", "age": 21}),
///     json!({"id": "u2", "name": "Bhavesh", "age": 31}),
/// ];
/// let mut table = DataTable::with_rows(
///     vec![Column::new("Age", Accessor::field("age")).id("age").sortable()],
///     rows,
/// )
/// .row_id(Arc::new(|row: &serde_json::Value, _: usize| row["id"].as_str().unwrap_or_default().to_string()))
/// .selectable(true);
///
/// table.on_header_click("age");
/// table.on_header_click("age");
/// let order: Vec<_> = table.sorted_rows().unwrap().into_iter().map(|r| r.id).collect();
/// assert_eq!(order, ["u2", "u1"]);
///
/// let result = table.toggle_row("u1");
/// assert_eq!(result.into_event(), Some(TableEvent::SelectionChanged(vec![json!({"id": "u1", "name": "Mohit", "age": 21})])));
/// ```
pub struct DataTable<T> {
    id: TableId,
    rows: Vec<T>,
    columns: Vec<Column<T>>,
    row_id: Option<RowIdFn<T>>,
    selectable: bool,
    loading: bool,
    empty_message: String,
    sort: Option<SortState>,
    selection: Selection,
    dirty: bool,
}

impl<T> DataTable<T> {
    /// Create a new table with column definitions.
    pub fn new(columns: Vec<Column<T>>) -> Self {
        Self::with_rows(columns, Vec::new())
    }

    /// Create a table with initial rows.
    pub fn with_rows(columns: Vec<Column<T>>, rows: Vec<T>) -> Self {
        Self {
            id: TableId::new(),
            rows,
            columns,
            row_id: None,
            selectable: false,
            loading: false,
            empty_message: DEFAULT_EMPTY_MESSAGE.to_string(),
            sort: None,
            selection: Selection::new(),
            dirty: false,
        }
    }

    /// Use a deterministic identity function instead of row positions.
    pub fn row_id(mut self, id_fn: RowIdFn<T>) -> Self {
        self.row_id = Some(id_fn);
        self
    }

    /// Enable row selection checkboxes.
    pub fn selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    /// Set the loading flag.
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Set the message shown when there are no rows.
    pub fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    // -------------------------------------------------------------------------
    // Props
    // -------------------------------------------------------------------------

    pub fn id(&self) -> TableId {
        self.id
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    pub fn is_selectable(&self) -> bool {
        self.selectable
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn message_when_empty(&self) -> &str {
        &self.empty_message
    }

    /// Replace the rows.
    ///
    /// The selection set is kept as is; the reported selection is re-derived
    /// against the new rows, so ids no longer present simply stop matching.
    pub fn set_rows(&mut self, rows: Vec<T>) {
        self.rows = rows;
        self.dirty = true;
    }

    /// Replace the column definitions. The sort state is kept even if its
    /// column is gone, in which case sorting becomes a no-op.
    pub fn set_columns(&mut self, columns: Vec<Column<T>>) {
        self.columns = columns;
        self.dirty = true;
    }

    /// Replace the identity function.
    pub fn set_row_id(&mut self, id_fn: Option<RowIdFn<T>>) {
        self.row_id = id_fn;
        self.dirty = true;
    }

    pub fn set_loading(&mut self, loading: bool) {
        if self.loading != loading {
            self.loading = loading;
            self.dirty = true;
        }
    }

    pub fn set_selectable(&mut self, selectable: bool) {
        if self.selectable != selectable {
            self.selectable = selectable;
            self.dirty = true;
        }
    }

    /// Check if the table needs to be re-rendered.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the table as rendered.
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Rows paired with their identifiers, in source order.
    pub fn identified_rows(&self) -> Vec<IdentifiedRow<'_, T>> {
        assign_identities(&self.rows, self.row_id.as_ref())
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// Get current sort state.
    pub fn sort(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    /// Set the sort state directly.
    pub fn set_sort(&mut self, sort: Option<SortState>) {
        self.sort = sort;
        self.dirty = true;
    }

    /// Handle a click on the header of `column_id`.
    pub fn on_header_click(&mut self, column_id: &str) -> EventResult<TableEvent<T>> {
        let next = sort::toggle_sort_column(self.sort.as_ref(), &self.columns, column_id);
        if next == self.sort {
            return EventResult::Ignored;
        }

        let Some(state) = next else {
            return EventResult::Ignored;
        };
        log::debug!(
            "{}: sort by '{}' {:?}",
            self.id,
            state.column,
            state.direction
        );
        self.sort = Some(state.clone());
        self.dirty = true;
        EventResult::Emit(TableEvent::SortChanged(state))
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Get the selection set.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Check if a row is selected by ID.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.is_selected(id)
    }

    /// Whether the select-all checkbox reads as checked.
    pub fn is_all_selected(&self) -> bool {
        selection::all_selected(&self.identified_rows(), &self.selection)
    }
}

impl<T: Clone> DataTable<T> {
    /// Get all selected rows, in source order.
    pub fn selected_rows(&self) -> Vec<T> {
        selection::selected_rows(&self.identified_rows(), &self.selection)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Handle the select-all checkbox.
    pub fn toggle_all(&mut self) -> EventResult<TableEvent<T>> {
        if !self.selectable {
            return EventResult::Ignored;
        }

        let (next, rows) = {
            let identified = self.identified_rows();
            let outcome = selection::toggle_all(&identified, &self.selection);
            let rows: Vec<T> = outcome.selected_rows.into_iter().cloned().collect();
            (outcome.selection, rows)
        };
        log::debug!("{}: toggle all, {} selected", self.id, rows.len());

        self.selection = next;
        self.dirty = true;
        EventResult::Emit(TableEvent::SelectionChanged(rows))
    }

    /// Handle the checkbox of a single row.
    pub fn toggle_row(&mut self, id: &str) -> EventResult<TableEvent<T>> {
        if !self.selectable {
            return EventResult::Ignored;
        }

        let (next, rows) = {
            let identified = self.identified_rows();
            let outcome = selection::toggle_one(&identified, &self.selection, id);
            let rows: Vec<T> = outcome.selected_rows.into_iter().cloned().collect();
            (outcome.selection, rows)
        };
        log::debug!("{}: toggle row '{}', {} selected", self.id, id, rows.len());

        self.selection = next;
        self.dirty = true;
        EventResult::Emit(TableEvent::SelectionChanged(rows))
    }
}

impl<T: Record> DataTable<T> {
    /// Rows in display order under the current sort state.
    pub fn sorted_rows(&self) -> Result<Vec<IdentifiedRow<'_, T>>, AccessError> {
        sort::apply_sort(&self.identified_rows(), self.sort.as_ref(), &self.columns)
    }
}

impl<T> std::fmt::Debug for DataTable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataTable")
            .field("id", &self.id)
            .field("rows", &self.rows.len())
            .field("columns", &self.columns)
            .field("selectable", &self.selectable)
            .field("loading", &self.loading)
            .field("sort", &self.sort)
            .field("selection", &self.selection)
            .finish()
    }
}
