//! Column descriptors and value accessors.

use std::fmt;
use std::sync::Arc;

use crate::error::{AccessError, ValueError};
use crate::record::Record;
use crate::value::CellValue;

/// Derivation function computing a cell value from a row.
pub type DeriveFn<T> = Arc<dyn Fn(&T) -> Result<CellValue, ValueError> + Send + Sync>;

/// Custom cell renderer: receives the resolved value and the raw row.
pub type CellRenderer<T> = Arc<dyn Fn(&CellValue, &T) -> String + Send + Sync>;

/// How a column reads its value from a row.
pub enum Accessor<T> {
    /// Look the value up by field name through [`Record`].
    Field(String),
    /// Compute the value from the row.
    Derive(DeriveFn<T>),
}

impl<T> Accessor<T> {
    /// Read the named field.
    pub fn field(name: impl Into<String>) -> Self {
        Accessor::Field(name.into())
    }

    /// Compute the value with an infallible function.
    pub fn derive<V, F>(f: F) -> Self
    where
        T: 'static,
        V: Into<CellValue>,
        F: Fn(&T) -> V + Send + Sync + 'static,
    {
        Accessor::Derive(Arc::new(move |row: &T| -> Result<CellValue, ValueError> {
            Ok(f(row).into())
        }))
    }

    /// Compute the value with a function that may fail for some rows.
    pub fn try_derive<F>(f: F) -> Self
    where
        F: Fn(&T) -> Result<CellValue, ValueError> + Send + Sync + 'static,
    {
        Accessor::Derive(Arc::new(f))
    }
}

impl<T: Record> Accessor<T> {
    /// Resolve the accessor against a row.
    ///
    /// A missing field resolves to [`CellValue::Null`]; only derivation
    /// functions can fail.
    pub fn resolve(&self, row: &T) -> Result<CellValue, ValueError> {
        match self {
            Accessor::Field(name) => Ok(row.field(name).unwrap_or_default()),
            Accessor::Derive(f) => f(row),
        }
    }
}

impl<T> Clone for Accessor<T> {
    fn clone(&self) -> Self {
        match self {
            Accessor::Field(name) => Accessor::Field(name.clone()),
            Accessor::Derive(f) => Accessor::Derive(Arc::clone(f)),
        }
    }
}

impl<T> fmt::Debug for Accessor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Accessor::Field(name) => f.debug_tuple("Field").field(name).finish(),
            Accessor::Derive(_) => f.write_str("Derive(..)"),
        }
    }
}

/// Column configuration.
///
/// # Examples
///
/// ```
/// use trellis::table::{Accessor, Column};
///
/// let columns: Vec<Column<serde_json::Value>> = vec![
///     Column::new("Name", Accessor::field("name")).id("name").sortable(),
///     Column::new("Email", Accessor::field("email")),
///     Column::new("Age", Accessor::field("age")).sortable().fixed(8),
/// ];
/// assert_eq!(columns[2].key(), "Age");
/// ```
pub struct Column<T> {
    /// Explicit column identifier. Falls back to the header when unset.
    pub id: Option<String>,
    /// Column header text
    pub header: String,
    /// How cell values are read from rows
    pub accessor: Accessor<T>,
    /// Whether clicking the header sorts by this column
    pub sortable: bool,
    /// Fixed width in character cells, if any
    pub width: Option<u16>,
    /// Custom renderer; raw value display when unset
    pub cell: Option<CellRenderer<T>>,
}

impl<T> Column<T> {
    /// Create a new column with a header and accessor.
    pub fn new(header: impl Into<String>, accessor: Accessor<T>) -> Self {
        Self {
            id: None,
            header: header.into(),
            accessor,
            sortable: false,
            width: None,
            cell: None,
        }
    }

    /// Set an explicit column id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Make the column sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Set a fixed width.
    pub fn fixed(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    /// Set a custom cell renderer.
    pub fn cell<F>(mut self, render: F) -> Self
    where
        F: Fn(&CellValue, &T) -> String + Send + Sync + 'static,
    {
        self.cell = Some(Arc::new(render));
        self
    }

    /// Key identifying this column in sort state: the id, else the header.
    pub fn key(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.header)
    }

    /// Display text for a resolved value.
    pub fn display(&self, value: &CellValue, row: &T) -> String {
        match &self.cell {
            Some(render) => render(value, row),
            None => value.to_string(),
        }
    }
}

impl<T: Record> Column<T> {
    /// Resolve this column's value for a row, attaching column and row context
    /// to any accessor failure.
    pub fn value(&self, row: &T, row_id: &str) -> Result<CellValue, AccessError> {
        self.accessor.resolve(row).map_err(|source| AccessError {
            column: self.key().to_string(),
            row: row_id.to_string(),
            source,
        })
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            header: self.header.clone(),
            accessor: self.accessor.clone(),
            sortable: self.sortable,
            width: self.width,
            cell: self.cell.clone(),
        }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("id", &self.id)
            .field("header", &self.header)
            .field("accessor", &self.accessor)
            .field("sortable", &self.sortable)
            .field("width", &self.width)
            .field("cell", &self.cell.as_ref().map(|_| ".."))
            .finish()
    }
}
