//! Derivation of the field view handed to the rendering layer.

use super::controller;
use super::item::{InputSize, InputType, InputVariant};
use super::state::InputField;

/// Accessible label of the clear button.
pub const CLEAR_LABEL: &str = "Clear input";

/// Accessible label of the reveal toggle.
pub const REVEAL_LABEL: &str = "Toggle password visibility";

/// Helper or error text below the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextNote {
    pub id: String,
    pub text: String,
}

/// Everything the rendering layer needs to draw one frame of the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub id: String,
    pub label: Option<String>,
    pub value: String,
    pub placeholder: Option<String>,
    pub input_type: InputType,
    pub disabled: bool,
    pub invalid: bool,
    /// `aria-invalid`, present only when invalid.
    pub aria_invalid: Option<bool>,
    pub aria_described_by: Option<String>,
    /// Shown only when there is no error message.
    pub helper: Option<TextNote>,
    pub error: Option<TextNote>,
    pub show_spinner: bool,
    pub show_clear: bool,
    pub show_reveal_toggle: bool,
    /// `aria-label` of the clear button, present when it is shown.
    pub clear_label: Option<&'static str>,
    pub reveal_label: Option<&'static str>,
    pub size: InputSize,
    pub variant: InputVariant,
}

impl InputField {
    /// Derive the view for the current props and state.
    pub fn view(&self) -> FieldView {
        let id = self.field_id();
        let error = self.error().map(|text| TextNote {
            id: controller::error_id(id),
            text: text.to_string(),
        });
        let helper = self.helper().filter(|_| error.is_none()).map(|text| TextNote {
            id: controller::helper_id(id),
            text: text.to_string(),
        });

        FieldView {
            id: id.to_string(),
            label: self.label_text().map(str::to_string),
            value: self.current_value().to_string(),
            placeholder: self.placeholder_text().map(str::to_string),
            input_type: self.effective_type(),
            disabled: self.is_input_disabled(),
            invalid: self.is_invalid(),
            aria_invalid: self.is_invalid().then_some(true),
            aria_described_by: controller::described_by(
                id,
                self.helper().is_some(),
                self.error().is_some(),
            ),
            helper,
            error,
            show_spinner: self.is_loading(),
            show_clear: self.shows_clear(),
            show_reveal_toggle: self.shows_reveal_toggle(),
            clear_label: self.shows_clear().then_some(CLEAR_LABEL),
            reveal_label: self.shows_reveal_toggle().then_some(REVEAL_LABEL),
            size: self.input_size(),
            variant: self.input_variant(),
        }
    }
}
