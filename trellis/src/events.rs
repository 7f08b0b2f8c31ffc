//! Event result type shared by the table and field components.

/// Result of handling a user interaction.
///
/// Components never invoke caller callbacks themselves. Anything the caller
/// must be told about comes back as [`EventResult::Emit`].
#[derive(Debug, Clone, PartialEq)]
pub enum EventResult<E> {
    /// Interaction was ignored (disabled affordance, non-sortable column...).
    Ignored,
    /// Interaction changed transient UI state only.
    Consumed,
    /// Interaction produced a notification for the caller.
    Emit(E),
}

impl<E> EventResult<E> {
    /// Check if the interaction was handled.
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }

    /// Borrow the emitted event, if any.
    pub fn event(&self) -> Option<&E> {
        match self {
            EventResult::Emit(event) => Some(event),
            _ => None,
        }
    }

    /// Take the emitted event, if any.
    pub fn into_event(self) -> Option<E> {
        match self {
            EventResult::Emit(event) => Some(event),
            _ => None,
        }
    }
}
