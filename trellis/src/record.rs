//! Field-name lookup for rows.

use std::collections::{BTreeMap, HashMap};

use crate::value::CellValue;

/// Rows that can be read by field name.
///
/// Columns built with [`Accessor::field`](crate::table::Accessor::field)
/// resolve through this trait. A row type only used with derivation
/// accessors can rely on the default, which reports every field as missing.
///
/// # Example
///
/// ```
/// use trellis::{CellValue, Record};
///
/// struct User {
///     name: String,
///     age: Option<i64>,
/// }
///
/// impl Record for User {
///     fn field(&self, name: &str) -> Option<CellValue> {
///         match name {
///             "name" => Some(self.name.as_str().into()),
///             "age" => Some(self.age.into()),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait Record {
    /// Read a field by name. `None` means the field does not exist.
    fn field(&self, _name: &str) -> Option<CellValue> {
        None
    }
}

impl Record for serde_json::Value {
    fn field(&self, name: &str) -> Option<CellValue> {
        self.get(name).map(CellValue::from)
    }
}

impl Record for serde_json::Map<String, serde_json::Value> {
    fn field(&self, name: &str) -> Option<CellValue> {
        self.get(name).map(CellValue::from)
    }
}

impl Record for HashMap<String, CellValue> {
    fn field(&self, name: &str) -> Option<CellValue> {
        self.get(name).cloned()
    }
}

impl Record for BTreeMap<String, CellValue> {
    fn field(&self, name: &str) -> Option<CellValue> {
        self.get(name).cloned()
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn field(&self, name: &str) -> Option<CellValue> {
        (**self).field(name)
    }
}
