use dioxus::prelude::*;

use crate::components::FormContainer;
use crate::context::{get_launch_options, use_launch_options};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and launch options, then mounts the form.
#[component]
pub fn App() -> Element {
    use_context_provider(get_launch_options);

    rsx! {
        style { {GLOBAL_STYLES} }
        Page {}
    }
}

/// Full-window blue backdrop centring the form card
#[component]
fn Page() -> Element {
    let options = use_launch_options();

    rsx! {
        main { class: "page",
            FormContainer { initial_mode: options.mode }
        }
    }
}
