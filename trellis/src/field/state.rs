use uuid::Uuid;

use crate::events::EventResult;

use super::controller;
use super::events::FieldEvent;
use super::item::{InputSize, InputType, InputVariant};

/// A text input field.
///
/// The value is controlled by the caller: typing and clearing produce
/// [`FieldEvent::Change`] and the caller writes the new value back with
/// [`InputField::set_value`]. The only state the field owns is whether a
/// password is currently revealed.
///
/// # Example
///
/// ```
/// use trellis::prelude::*;
///
/// let mut field = InputField::new()
///     .label("Password")
///     .input_type(InputType::Password)
///     .value("hunter2");
///
/// assert_eq!(field.effective_type(), InputType::Password);
/// field.on_toggle_reveal();
/// assert_eq!(field.effective_type(), InputType::Text);
///
/// let result = field.on_clear();
/// assert_eq!(result.into_event(), Some(FieldEvent::Change(String::new())));
/// ```
#[derive(Debug, Clone)]
pub struct InputField {
    id: String,
    value: String,
    label: Option<String>,
    placeholder: Option<String>,
    helper_text: Option<String>,
    error_message: Option<String>,
    disabled: bool,
    invalid: bool,
    loading: bool,
    clearable: bool,
    reveal_toggle: bool,
    input_type: InputType,
    size: InputSize,
    variant: InputVariant,
    revealed: bool,
    dirty: bool,
}

impl Default for InputField {
    fn default() -> Self {
        Self {
            id: format!("input-{}", Uuid::new_v4().simple()),
            value: String::new(),
            label: None,
            placeholder: None,
            helper_text: None,
            error_message: None,
            disabled: false,
            invalid: false,
            loading: false,
            clearable: true,
            reveal_toggle: true,
            input_type: InputType::default(),
            size: InputSize::default(),
            variant: InputVariant::default(),
            revealed: false,
            dirty: false,
        }
    }
}

impl InputField {
    /// Create an empty field with a generated id.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an explicit element id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn helper_text(mut self, text: impl Into<String>) -> Self {
        self.helper_text = Some(text.into());
        self
    }

    pub fn error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Show a clear button while there is a value (default: true).
    pub fn clearable(mut self, clearable: bool) -> Self {
        self.clearable = clearable;
        self
    }

    /// Allow revealing a password (default: true).
    pub fn reveal_toggle(mut self, permitted: bool) -> Self {
        self.reveal_toggle = permitted;
        self
    }

    pub fn input_type(mut self, input_type: InputType) -> Self {
        self.input_type = input_type;
        self
    }

    pub fn size(mut self, size: InputSize) -> Self {
        self.size = size;
        self
    }

    pub fn variant(mut self, variant: InputVariant) -> Self {
        self.variant = variant;
        self
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    pub fn field_id(&self) -> &str {
        &self.id
    }

    pub fn current_value(&self) -> &str {
        &self.value
    }

    /// Empty texts count as absent here and in the two readers below.
    pub fn label_text(&self) -> Option<&str> {
        self.label.as_deref().filter(|s| !s.is_empty())
    }

    pub fn placeholder_text(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    pub fn helper(&self) -> Option<&str> {
        self.helper_text.as_deref().filter(|s| !s.is_empty())
    }

    pub fn error(&self) -> Option<&str> {
        self.error_message.as_deref().filter(|s| !s.is_empty())
    }

    pub fn declared_type(&self) -> InputType {
        self.input_type
    }

    pub fn input_size(&self) -> InputSize {
        self.size
    }

    pub fn input_variant(&self) -> InputVariant {
        self.variant
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_invalid(&self) -> bool {
        self.invalid
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_clearable(&self) -> bool {
        self.clearable
    }

    pub fn is_reveal_permitted(&self) -> bool {
        self.reveal_toggle
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// The input element is disabled while the field is disabled or loading.
    pub fn is_input_disabled(&self) -> bool {
        self.disabled || self.loading
    }

    /// Type the input currently renders with.
    pub fn effective_type(&self) -> InputType {
        controller::effective_type(self.input_type, self.revealed, self.reveal_toggle)
    }

    pub fn shows_clear(&self) -> bool {
        controller::clear_affordance_visible(
            &self.value,
            self.disabled,
            self.loading,
            self.clearable,
        )
    }

    pub fn shows_reveal_toggle(&self) -> bool {
        controller::reveal_affordance_visible(self.input_type, self.reveal_toggle, self.loading)
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Write back the value after a change notification.
    pub fn set_value(&mut self, value: impl Into<String>) {
        let value = value.into();
        if self.value != value {
            self.value = value;
            self.dirty = true;
        }
    }

    pub fn set_loading(&mut self, loading: bool) {
        if self.loading != loading {
            self.loading = loading;
            self.dirty = true;
        }
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        if self.disabled != disabled {
            self.disabled = disabled;
            self.dirty = true;
        }
    }

    pub fn set_invalid(&mut self, invalid: bool) {
        if self.invalid != invalid {
            self.invalid = invalid;
            self.dirty = true;
        }
    }

    pub fn set_error_message(&mut self, message: Option<String>) {
        self.error_message = message;
        self.dirty = true;
    }

    /// Check if the field needs to be re-rendered.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the field as rendered.
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// Handle text typed into the input.
    pub fn on_input(&mut self, value: impl Into<String>) -> EventResult<FieldEvent> {
        if self.is_input_disabled() {
            return EventResult::Ignored;
        }
        EventResult::Emit(FieldEvent::Change(value.into()))
    }

    /// Handle the clear button.
    pub fn on_clear(&mut self) -> EventResult<FieldEvent> {
        if !self.shows_clear() {
            return EventResult::Ignored;
        }
        log::debug!("{}: cleared", self.id);
        EventResult::Emit(FieldEvent::Change(String::new()))
    }

    /// Handle the reveal toggle.
    pub fn on_toggle_reveal(&mut self) -> EventResult<FieldEvent> {
        if !self.input_type.is_secret() || !self.reveal_toggle {
            return EventResult::Ignored;
        }

        let revealed = controller::toggle_reveal(self.revealed, self.loading);
        if revealed == self.revealed {
            return EventResult::Ignored;
        }

        log::debug!("{}: revealed = {}", self.id, revealed);
        self.revealed = revealed;
        self.dirty = true;
        EventResult::Consumed
    }
}
