//! Text Input Component
//!
//! Single-line input with an optional inline error underneath.

use dioxus::prelude::*;
use signform_core::ValidationError;

use super::FieldError;

/// Properties for the TextInput component
#[derive(Clone, PartialEq, Props)]
pub struct TextInputProps {
    /// Name attribute, also used as the element id
    pub name: String,
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Handler called when the input loses focus
    #[props(default)]
    pub onblur: Option<EventHandler<()>>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Input type (text, email, password)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Error to show below the input
    #[props(default)]
    pub error: Option<ValidationError>,
}

/// Text input with inline error
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     TextInput {
///         name: "email".to_string(),
///         input_type: "email".to_string(),
///         value: form.read().values().email.clone(),
///         placeholder: "Enter email".to_string(),
///         oninput: move |s| on_change(Field::Email, s),
///         error: form.read().visible_error(Field::Email),
///     }
/// }
/// ```
#[component]
pub fn TextInput(props: TextInputProps) -> Element {
    let input_class = input_class(props.error.is_some());

    rsx! {
        div { class: "form-field",
            input {
                id: "{props.name}",
                name: "{props.name}",
                class: "{input_class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                oninput: move |e| props.oninput.call(e.value()),
                onblur: move |_| {
                    if let Some(handler) = &props.onblur {
                        handler.call(());
                    }
                },
            }
            FieldError { error: props.error }
        }
    }
}

fn input_class(invalid: bool) -> &'static str {
    if invalid {
        "input-field input-field--invalid"
    } else {
        "input-field"
    }
}
