//! File Picker Component
//!
//! Native file dialog behind a button. Only the chosen path is reported;
//! the file is never opened.

use dioxus::prelude::*;
use rfd::FileDialog;
use signform_core::{PickedFile, ValidationError};
use signform_ui::FieldError;

/// File picker with the selected file name next to it
///
/// Bumping `reset_token` clears the displayed selection. The form sends this
/// after a successful submit, since the selection label lives here rather
/// than in the form state.
#[component]
pub fn FilePicker(
    /// Changes whenever the displayed selection must be cleared
    reset_token: u64,
    /// Called with the picked file, or `None` when the dialog was cancelled
    on_pick: EventHandler<Option<PickedFile>>,
    /// Error to show below the picker
    #[props(default)]
    error: Option<ValidationError>,
) -> Element {
    let mut selected: Signal<Option<String>> = use_signal(|| None);
    let mut picking = use_signal(|| false);

    use_effect(use_reactive!(|reset_token| {
        tracing::debug!(reset_token, "Clearing file picker selection");
        selected.set(None);
    }));

    let open_dialog = move |_| {
        picking.set(true);

        spawn(async move {
            // Dialog blocks, keep it off the UI thread
            let picked = tokio::task::spawn_blocking(move || {
                FileDialog::new().set_title("Select File").pick_file()
            })
            .await;

            match picked {
                Ok(Some(path)) => {
                    let file = PickedFile::from_path(path);
                    selected.set(Some(file.name.clone()));
                    on_pick.call(Some(file));
                }
                Ok(None) => {
                    // User cancelled
                    on_pick.call(None);
                }
                Err(e) => {
                    tracing::warn!("File picker failed: {}", e);
                    on_pick.call(None);
                }
            }

            picking.set(false);
        });
    };

    rsx! {
        div { class: "form-field form-field--file",
            div { class: "file-picker",
                button {
                    class: "file-picker-btn",
                    r#type: "button",
                    disabled: picking(),
                    onclick: open_dialog,
                    "Choose File"
                }
                span { class: "file-picker-name",
                    {selection_label(selected().as_deref())}
                }
            }
            FieldError { error: error }
        }
    }
}

fn selection_label(name: Option<&str>) -> String {
    name.unwrap_or("No file chosen").to_string()
}
