use trellis::prelude::*;

use crate::registration::StoryRegistration;
use crate::render::field_lines;

const TITLE: &str = "Form/InputField";

fn email() -> InputField {
    InputField::new()
        .label("Email")
        .placeholder("you@example.com")
        .input_type(InputType::Email)
}

fn default() -> Vec<String> {
    field_lines(&email().helper_text("We never share your email.").view())
}

fn filled() -> Vec<String> {
    field_lines(&email().value("mohit@demo.com").view())
}

fn password() -> Vec<String> {
    let mut field = InputField::new()
        .label("Password")
        .input_type(InputType::Password)
        .value("hunter22");

    let mut lines = field_lines(&field.view());
    field.on_toggle_reveal();
    lines.push(String::new());
    lines.push("after reveal:".to_string());
    lines.extend(field_lines(&field.view()));
    lines
}

fn error() -> Vec<String> {
    field_lines(
        &email()
            .value("mohit@")
            .helper_text("We never share your email.")
            .invalid(true)
            .error_message("Enter a valid email address.")
            .view(),
    )
}

fn loading() -> Vec<String> {
    field_lines(&email().value("checking@demo.com").loading(true).view())
}

fn disabled() -> Vec<String> {
    field_lines(&email().value("mohit@demo.com").disabled(true).view())
}

fn sizes() -> Vec<String> {
    [InputSize::Sm, InputSize::Md, InputSize::Lg]
        .into_iter()
        .flat_map(|size| field_lines(&email().size(size).view()))
        .collect()
}

fn variants() -> Vec<String> {
    [InputVariant::Filled, InputVariant::Outlined, InputVariant::Ghost]
        .into_iter()
        .flat_map(|variant| field_lines(&email().variant(variant).value("x@y.z").view()))
        .collect()
}

inventory::submit! { StoryRegistration::new(TITLE, "Default", default) }
inventory::submit! { StoryRegistration::new(TITLE, "Filled", filled) }
inventory::submit! { StoryRegistration::new(TITLE, "Password", password) }
inventory::submit! { StoryRegistration::new(TITLE, "Error", error) }
inventory::submit! { StoryRegistration::new(TITLE, "Loading", loading) }
inventory::submit! { StoryRegistration::new(TITLE, "Disabled", disabled) }
inventory::submit! { StoryRegistration::new(TITLE, "Sizes", sizes) }
inventory::submit! { StoryRegistration::new(TITLE, "Variants", variants) }
