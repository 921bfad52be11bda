//! Select Component
//!
//! Drop-down of fixed options led by an empty placeholder entry.

use dioxus::prelude::*;
use signform_core::ValidationError;

use super::FieldError;

/// Properties for the Select component
#[derive(Clone, PartialEq, Props)]
pub struct SelectProps {
    /// Name attribute, also used as the element id
    pub name: String,
    /// Selected value; empty selects the placeholder
    pub value: String,
    /// Selectable values, in display order
    pub options: Vec<String>,
    /// Label of the leading empty option
    pub placeholder: String,
    /// Handler called with the newly selected value
    pub onchange: EventHandler<String>,
    /// Handler called when the select loses focus
    #[props(default)]
    pub onblur: Option<EventHandler<()>>,
    /// Error to show below the select
    #[props(default)]
    pub error: Option<ValidationError>,
}

#[component]
pub fn Select(props: SelectProps) -> Element {
    rsx! {
        div { class: "form-field form-field--select",
            select {
                id: "{props.name}",
                name: "{props.name}",
                class: "select-field",
                value: "{props.value}",
                onchange: move |e| props.onchange.call(e.value()),
                onblur: move |_| {
                    if let Some(handler) = &props.onblur {
                        handler.call(());
                    }
                },
                option { value: "", selected: props.value.is_empty(), "{props.placeholder}" }
                for opt in props.options.iter() {
                    option {
                        key: "{opt}",
                        value: "{opt}",
                        selected: *opt == props.value,
                        "{opt}"
                    }
                }
            }
            FieldError { error: props.error }
        }
    }
}
