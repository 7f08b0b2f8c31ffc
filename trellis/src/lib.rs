//! Headless models for a sortable, selectable data table and a text input field.
//!
//! Nothing in this crate draws anything. Each component is split into pure
//! derivations (sorting, selection bookkeeping, input affordances) and a thin
//! view-binding struct that owns the transient UI state and hands a plain view
//! description to whatever layer renders it.

pub mod error;
pub mod events;
pub mod field;
pub mod record;
pub mod table;
pub mod value;

pub use error::{AccessError, ValueError};
pub use events::EventResult;
pub use record::Record;
pub use value::CellValue;

pub mod prelude {
    pub use crate::error::{AccessError, ValueError};
    pub use crate::events::EventResult;
    pub use crate::field::{FieldEvent, FieldView, InputField, InputSize, InputType, InputVariant};
    pub use crate::record::Record;
    pub use crate::table::{
        Accessor, AriaSort, Column, DataTable, IdentifiedRow, RowIdFn, Selection, SortDirection,
        SortState, TableEvent, TableView,
    };
    pub use crate::value::CellValue;
}
