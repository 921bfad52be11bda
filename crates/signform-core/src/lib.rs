//! SignForm Core Library
//!
//! UI-free model of a toggleable login/sign-up form.
//!
//! ## Overview
//!
//! The form has two modes. Login asks for an email and a password; sign-up
//! adds a name, a password confirmation, a city from a fixed list, a file and
//! a terms checkbox. Values are validated against the active mode's ruleset
//! on every change, errors are shown only for touched fields, and a valid
//! submit resets the form and raises a success banner for five seconds.
//!
//! Nothing is sent anywhere: there is no backend, and a picked file is never
//! opened.
//!
//! ## Quick Start
//!
//! ```
//! use std::time::Instant;
//! use signform_core::{Field, FormState, Mode, SubmitOutcome};
//!
//! let mut form = FormState::new(Mode::Login);
//! form.change(Field::Email, "bad-email").unwrap();
//! form.change(Field::Password, "x").unwrap();
//!
//! let outcome = form.submit(Instant::now());
//! assert!(matches!(outcome, SubmitOutcome::Rejected(_)));
//! assert_eq!(
//!     form.visible_error(Field::Email).map(|e| e.to_string()).as_deref(),
//!     Some("Invalid email"),
//! );
//! ```

pub mod banner;
pub mod error;
pub mod form;
pub mod types;
pub mod validation;
pub mod values;

// Re-exports
pub use banner::{BannerTicket, SuccessBanner, SUCCESS_BANNER_DURATION};
pub use error::{FormError, FormResult};
pub use form::{Accepted, FormState, SubmitOutcome, ViewCommand};
pub use types::{City, Field, Mode, PickedFile};
pub use validation::{validate, FieldErrors, ValidationError, MIN_PASSWORD_LEN};
pub use values::{FieldValue, FormValues};
