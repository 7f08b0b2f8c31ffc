//! Notifications emitted by input fields.

/// Something the caller should hear about after a field interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEvent {
    /// The value should change. Clearing emits an empty value.
    Change(String),
}
