//! Notice Banner Component
//!
//! Short green confirmation shown above the form card.

use dioxus::prelude::*;

/// Properties for the Notice component
#[derive(Clone, PartialEq, Props)]
pub struct NoticeProps {
    /// Message text
    pub message: String,
}

/// Banner with a single line of text
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     if let Some(message) = form.read().success_message() {
///         Notice { message: message.to_string() }
///     }
/// }
/// ```
#[component]
pub fn Notice(props: NoticeProps) -> Element {
    rsx! {
        div { class: "notice", role: "status", "{props.message}" }
    }
}
