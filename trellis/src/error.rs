//! Error types for value access.

use thiserror::Error;

/// Failure raised by a derivation accessor for a single row.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValueError {
    /// Error message
    pub message: String,
}

impl ValueError {
    /// Create a new value error
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A column's accessor could not produce a value for a row.
///
/// The table never decides how to recover from this. It is handed to the
/// rendering layer, which picks between a blank cell and halting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot read value of column '{column}' for row '{row}'")]
pub struct AccessError {
    /// Key of the column whose accessor failed.
    pub column: String,
    /// Identifier of the row the accessor was applied to.
    pub row: String,
    /// Underlying accessor failure.
    #[source]
    pub source: ValueError,
}
