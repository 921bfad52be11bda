//! SignForm UI Components
//!
//! Dioxus widgets for the login/sign-up form: text inputs, a select, a
//! checkbox, buttons and a notice banner. Widgets are stateless; values and
//! errors come in through props and changes go out through event handlers.
//!
//! Class names match the stylesheet shipped by the desktop shell.

pub mod components;

pub use components::*;
