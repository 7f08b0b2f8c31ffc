//! Input field configuration enums.

use serde::{Deserialize, Serialize};

/// Declared type of an input element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    #[default]
    Text,
    /// The secret type: masked unless revealed.
    Password,
    Email,
    Number,
    Search,
    Tel,
    Url,
}

impl InputType {
    /// The `type` attribute value.
    pub fn as_str(self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Password => "password",
            InputType::Email => "email",
            InputType::Number => "number",
            InputType::Search => "search",
            InputType::Tel => "tel",
            InputType::Url => "url",
        }
    }

    /// Whether values of this type are masked.
    pub fn is_secret(self) -> bool {
        self == InputType::Password
    }
}

/// Input size. Cosmetic only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputSize {
    Sm,
    #[default]
    Md,
    Lg,
}

/// Input visual variant. Cosmetic only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputVariant {
    Filled,
    #[default]
    Outlined,
    Ghost,
}

impl InputSize {
    pub fn as_str(self) -> &'static str {
        match self {
            InputSize::Sm => "sm",
            InputSize::Md => "md",
            InputSize::Lg => "lg",
        }
    }
}

impl InputVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            InputVariant::Filled => "filled",
            InputVariant::Outlined => "outlined",
            InputVariant::Ghost => "ghost",
        }
    }
}
