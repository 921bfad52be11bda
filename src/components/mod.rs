//! Components of the SignForm desktop window.

mod file_picker;
mod form_container;

pub use file_picker::FilePicker;
pub use form_container::FormContainer;
