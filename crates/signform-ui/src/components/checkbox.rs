//! Checkbox Component

use dioxus::prelude::*;
use signform_core::ValidationError;

use super::FieldError;

/// Properties for the Checkbox component
#[derive(Clone, PartialEq, Props)]
pub struct CheckboxProps {
    /// Name attribute, also used as the element id
    pub name: String,
    /// Whether the box is ticked
    pub checked: bool,
    /// Text shown next to the box
    pub label: String,
    /// Handler called with the new checked state
    pub onchange: EventHandler<bool>,
    /// Error to show below the checkbox
    #[props(default)]
    pub error: Option<ValidationError>,
}

/// Labelled checkbox with inline error
#[component]
pub fn Checkbox(props: CheckboxProps) -> Element {
    rsx! {
        div { class: "form-field form-field--checkbox",
            input {
                id: "{props.name}",
                name: "{props.name}",
                class: "checkbox",
                r#type: "checkbox",
                checked: props.checked,
                onchange: move |e| props.onchange.call(e.checked()),
            }
            label { class: "checkbox-label", r#for: "{props.name}", "{props.label}" }
            FieldError { error: props.error }
        }
    }
}
