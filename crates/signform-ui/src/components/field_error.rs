//! Inline validation message shown under a field

use dioxus::prelude::*;
use signform_core::ValidationError;

/// Renders `error` in red below its field, or nothing when `None`.
#[component]
pub fn FieldError(error: Option<ValidationError>) -> Element {
    match error {
        Some(err) => rsx! {
            div { class: "field-error", role: "alert", "{err}" }
        },
        None => rsx! {},
    }
}
