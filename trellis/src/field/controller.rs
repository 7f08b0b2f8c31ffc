//! Pure derivations for input fields.

use super::item::InputType;

/// Type the input renders with.
///
/// A revealed secret renders as plain text when revealing is permitted.
/// Every other combination keeps the declared type.
pub fn effective_type(declared: InputType, revealed: bool, reveal_permitted: bool) -> InputType {
    if declared.is_secret() && reveal_permitted && revealed {
        InputType::Text
    } else {
        declared
    }
}

/// Flip the reveal flag, unless the field is busy.
pub fn toggle_reveal(revealed: bool, busy: bool) -> bool {
    if busy { revealed } else { !revealed }
}

/// Whether the clear button is shown.
pub fn clear_affordance_visible(value: &str, disabled: bool, busy: bool, clearable: bool) -> bool {
    clearable && !disabled && !busy && !value.is_empty()
}

/// Whether the reveal toggle is shown.
pub fn reveal_affordance_visible(declared: InputType, reveal_permitted: bool, busy: bool) -> bool {
    declared.is_secret() && reveal_permitted && !busy
}

/// Id of the helper text element.
pub fn helper_id(field_id: &str) -> String {
    format!("{}-help", field_id)
}

/// Id of the error message element.
pub fn error_id(field_id: &str) -> String {
    format!("{}-err", field_id)
}

/// `aria-describedby` value linking the input to its helper and error text.
pub fn described_by(field_id: &str, has_helper: bool, has_error: bool) -> Option<String> {
    let ids: Vec<String> = [
        has_helper.then(|| helper_id(field_id)),
        has_error.then(|| error_id(field_id)),
    ]
    .into_iter()
    .flatten()
    .collect();

    (!ids.is_empty()).then(|| ids.join(" "))
}
