//! Form Container - the toggleable login / registration card.
//!
//! Owns the [`FormState`] for its lifetime and maps every widget event onto
//! it. Also owns the success banner timer: one Dioxus task per showing,
//! cancelled when a newer submit replaces it. Tasks belong to this
//! component's scope, so unmounting drops any pending timer.

use std::time::Instant;

use dioxus::prelude::*;
use signform_core::{City, Field, FieldValue, FormState, Mode, SubmitOutcome, ViewCommand};
use signform_ui::{Button, ButtonVariant, Checkbox, Notice, Select, TextInput};

use super::FilePicker;

/// Props for FormContainer component
#[derive(Props, Clone, PartialEq)]
pub struct FormContainerProps {
    /// Mode shown on mount
    #[props(default)]
    pub initial_mode: Mode,
}

#[component]
pub fn FormContainer(props: FormContainerProps) -> Element {
    let mut form = use_signal(|| FormState::new(props.initial_mode));
    let mut banner_task: Signal<Option<Task>> = use_signal(|| None);
    let mut file_reset: Signal<u64> = use_signal(|| 0);

    let mut on_change = move |field: Field, value: FieldValue| {
        if let Err(e) = form.write().change(field, value) {
            tracing::warn!("Ignoring input for {}: {}", field, e);
        }
    };

    let mut on_blur = move |field: Field| {
        form.write().blur(field);
    };

    let mut schedule_banner_reset = move || {
        if let Some(previous) = banner_task.write().take() {
            previous.cancel();
        }

        let Some((ticket, delay)) = form.read().pending_banner(Instant::now()) else {
            return;
        };
        tracing::debug!(?delay, "Scheduling success banner reset");

        let task = spawn(async move {
            tokio::time::sleep(delay).await;
            form.write().expire_banner(ticket, Instant::now());
            banner_task.set(None);
        });
        banner_task.set(Some(task));
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let outcome = form.write().submit(Instant::now());
        if let SubmitOutcome::Accepted(accepted) = outcome {
            for command in &accepted.commands {
                match command {
                    ViewCommand::ClearFileInput => *file_reset.write() += 1,
                }
            }
            schedule_banner_reset();
        }
    };

    let state = form.read();
    let mode = state.mode();
    let values = state.values();
    let is_sign_up = mode == Mode::SignUp;
    let title = mode.title();
    let submit_label = mode.submit_label();
    let toggle_prompt = mode.toggle_prompt();
    let city_options: Vec<String> = City::ALL.iter().map(|c| c.name().to_string()).collect();
    let city_value = values.city.map(|c| c.name().to_string()).unwrap_or_default();

    rsx! {
        div { class: "form-column",
            if let Some(message) = state.success_message() {
                Notice { message: message.to_string() }
            }

            div { class: "form-card",
                h1 { class: "form-title", "{title}" }
                div { class: "form-divider" }

                form { class: "form-body", onsubmit: on_submit,
                    if is_sign_up {
                        TextInput {
                            name: Field::Name.as_str().to_string(),
                            value: values.name.clone(),
                            placeholder: placeholder(Field::Name),
                            oninput: move |s: String| on_change(Field::Name, s.into()),
                            onblur: move |_| on_blur(Field::Name),
                            error: state.visible_error(Field::Name),
                        }
                    }

                    TextInput {
                        name: Field::Email.as_str().to_string(),
                        input_type: "email".to_string(),
                        value: values.email.clone(),
                        placeholder: placeholder(Field::Email),
                        oninput: move |s: String| on_change(Field::Email, s.into()),
                        onblur: move |_| on_blur(Field::Email),
                        error: state.visible_error(Field::Email),
                    }

                    TextInput {
                        name: Field::Password.as_str().to_string(),
                        input_type: "password".to_string(),
                        value: values.password.clone(),
                        placeholder: placeholder(Field::Password),
                        oninput: move |s: String| on_change(Field::Password, s.into()),
                        onblur: move |_| on_blur(Field::Password),
                        error: state.visible_error(Field::Password),
                    }

                    if is_sign_up {
                        TextInput {
                            name: Field::ConfirmPassword.as_str().to_string(),
                            input_type: "password".to_string(),
                            value: values.confirm_password.clone(),
                            placeholder: placeholder(Field::ConfirmPassword),
                            oninput: move |s: String| on_change(Field::ConfirmPassword, s.into()),
                            onblur: move |_| on_blur(Field::ConfirmPassword),
                            error: state.visible_error(Field::ConfirmPassword),
                        }

                        Select {
                            name: Field::City.as_str().to_string(),
                            value: city_value,
                            options: city_options,
                            placeholder: "Select a city".to_string(),
                            onchange: move |s: String| on_change(Field::City, s.into()),
                            onblur: move |_| on_blur(Field::City),
                            error: state.visible_error(Field::City),
                        }

                        FilePicker {
                            reset_token: file_reset(),
                            on_pick: move |file| form.write().pick_file(file),
                            error: state.visible_error(Field::File),
                        }

                        Checkbox {
                            name: Field::Checkbox.as_str().to_string(),
                            checked: values.checkbox,
                            label: "Accept privacy policy and terms".to_string(),
                            onchange: move |checked: bool| on_change(Field::Checkbox, checked.into()),
                            error: state.visible_error(Field::Checkbox),
                        }
                    }

                    Button {
                        button_type: "submit".to_string(),
                        class: "form-submit".to_string(),
                        "{submit_label}"
                    }
                }

                Button {
                    variant: ButtonVariant::Link,
                    class: "form-toggle".to_string(),
                    onclick: move |_| form.write().toggle_mode(),
                    "{toggle_prompt}"
                }
            }
        }
    }
}

fn placeholder(field: Field) -> String {
    field.placeholder().unwrap_or_default().to_string()
}
