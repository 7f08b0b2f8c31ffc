//! Derivation of the table view handed to the rendering layer.

use serde::{Deserialize, Serialize};

use crate::error::AccessError;
use crate::record::Record;

use super::item::Column;
use super::sort::{SortDirection, SortState};
use super::state::DataTable;

/// Label of the busy overlay shown while loading.
pub const LOADING_LABEL: &str = "Loading…";

/// Accessible label of the select-all checkbox.
pub const SELECT_ALL_LABEL: &str = "Select all rows";

/// Accessible label of a row checkbox.
pub const SELECT_ROW_LABEL: &str = "Select row";

/// ARIA sort state of a header cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AriaSort {
    #[default]
    None,
    Ascending,
    Descending,
}

impl AriaSort {
    /// The `aria-sort` attribute value.
    pub fn as_str(self) -> &'static str {
        match self {
            AriaSort::None => "none",
            AriaSort::Ascending => "ascending",
            AriaSort::Descending => "descending",
        }
    }
}

/// A header cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    /// Column key.
    pub key: String,
    pub label: String,
    pub width: Option<u16>,
    pub sortable: bool,
    pub aria_sort: AriaSort,
    /// "▲", "▼" or "↕" for sortable columns.
    pub indicator: Option<&'static str>,
}

/// Content of a body cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellContent {
    Text(String),
    /// The accessor failed. The renderer decides between a blank cell and halting.
    Fault(AccessError),
}

impl CellContent {
    /// The text, or an empty string for a fault.
    pub fn text_or_blank(&self) -> &str {
        match self {
            CellContent::Text(s) => s,
            CellContent::Fault(_) => "",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellView {
    /// Column key.
    pub column: String,
    pub content: CellContent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: String,
    /// Checkbox state, `None` when the table is not selectable.
    pub selected: Option<bool>,
    /// `aria-label` of the row checkbox, present when selectable.
    pub select_label: Option<&'static str>,
    pub cells: Vec<CellView>,
}

/// The row shown in place of the body when there is nothing to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyRow {
    pub message: String,
    /// Number of columns the message spans, including the checkbox column.
    pub span: usize,
}

/// Everything the rendering layer needs to draw one frame of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub id: String,
    pub headers: Vec<HeaderCell>,
    /// Select-all checkbox state, `None` when the table is not selectable.
    pub select_all: Option<bool>,
    /// `aria-label` of the select-all checkbox, present when selectable.
    pub select_all_label: Option<&'static str>,
    /// Body rows in display order.
    pub rows: Vec<RowView>,
    pub empty: Option<EmptyRow>,
    /// `aria-busy`; the body is dimmed and the overlay shown.
    pub busy: bool,
    pub loading_label: Option<&'static str>,
}

/// Header cells for the given columns under the given sort state.
pub fn header_cells<T>(columns: &[Column<T>], sort: Option<&SortState>) -> Vec<HeaderCell> {
    columns
        .iter()
        .map(|col| {
            let key = col.key();
            let direction = sort.filter(|s| s.column == key).map(|s| s.direction);

            let aria_sort = match direction {
                Some(SortDirection::Ascending) => AriaSort::Ascending,
                Some(SortDirection::Descending) => AriaSort::Descending,
                None => AriaSort::None,
            };
            let indicator = col.sortable.then_some(match direction {
                Some(SortDirection::Ascending) => "▲",
                Some(SortDirection::Descending) => "▼",
                None => "↕",
            });

            HeaderCell {
                key: key.to_string(),
                label: col.header.clone(),
                width: col.width,
                sortable: col.sortable,
                aria_sort,
                indicator,
            }
        })
        .collect()
}

impl<T: Record> DataTable<T> {
    /// Derive the view for the current props and state.
    ///
    /// Fails only when the active sort column's accessor fails for some row;
    /// failures while reading other cells are reported per cell.
    pub fn view(&self) -> Result<TableView, AccessError> {
        let sorted = self.sorted_rows()?;
        let selectable = self.is_selectable();
        let columns = self.columns();

        let rows = sorted
            .iter()
            .map(|r| RowView {
                id: r.id.clone(),
                selected: selectable.then(|| self.is_selected(&r.id)),
                select_label: selectable.then_some(SELECT_ROW_LABEL),
                cells: columns
                    .iter()
                    .map(|col| CellView {
                        column: col.key().to_string(),
                        content: match col.value(r.row, &r.id) {
                            Ok(value) => CellContent::Text(col.display(&value, r.row)),
                            Err(e) => {
                                log::warn!("{}: {}: {}", self.id(), e, e.source);
                                CellContent::Fault(e)
                            }
                        },
                    })
                    .collect(),
            })
            .collect::<Vec<_>>();

        let empty = (!self.is_loading() && rows.is_empty()).then(|| EmptyRow {
            message: self.message_when_empty().to_string(),
            span: columns.len() + usize::from(selectable),
        });

        log::trace!("{}: derived view with {} rows", self.id(), rows.len());

        Ok(TableView {
            id: self.id().to_string(),
            headers: header_cells(columns, self.sort()),
            select_all: selectable.then(|| self.is_all_selected()),
            select_all_label: selectable.then_some(SELECT_ALL_LABEL),
            rows,
            empty,
            busy: self.is_loading(),
            loading_label: self.is_loading().then_some(LOADING_LABEL),
        })
    }
}
