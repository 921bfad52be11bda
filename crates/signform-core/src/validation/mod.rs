//! Validation rulesets for the two form modes.
//!
//! Each mode has a pure ruleset mapping [`FormValues`] to [`FieldErrors`].
//! A field reports at most one error: the first failing check in the order
//! listed below. For most fields "required" comes first; the sign-up
//! password checks its length first (so an empty password reports the length
//! message) and the confirmation checks for a match first.
//!
//! | Field            | Login    | Sign-up                    |
//! |------------------|----------|----------------------------|
//! | name             | -        | required                   |
//! | email            | required, email shape | same          |
//! | password         | required | at least 6 chars, required |
//! | confirm_password | -        | equals password, required  |
//! | file             | -        | required                   |
//! | checkbox         | -        | must be checked            |
//! | city             | -        | one of the fixed cities    |

mod email;

use std::collections::BTreeMap;

use thiserror::Error;

use crate::types::{Field, Mode};
use crate::values::FormValues;

pub use email::is_email;

/// Minimum password length enforced at sign-up
pub const MIN_PASSWORD_LEN: usize = 6;

/// A failed validation rule. `Display` is the message shown under the field.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name is required")]
    NameRequired,

    #[error("Email is required")]
    EmailRequired,

    #[error("Invalid email")]
    InvalidEmail,

    #[error("Password is required")]
    PasswordRequired,

    #[error("Password must be at least 6 characters")]
    PasswordTooShort,

    #[error("Confirm Password is required")]
    ConfirmPasswordRequired,

    #[error("Passwords must match")]
    PasswordsMismatch,

    #[error("File is required")]
    FileRequired,

    #[error("You must accept the terms and conditions")]
    TermsNotAccepted,

    #[error("Please select a city")]
    CityRequired,
}

impl ValidationError {
    /// The field this error belongs to
    pub fn field(self) -> Field {
        match self {
            ValidationError::NameRequired => Field::Name,
            ValidationError::EmailRequired | ValidationError::InvalidEmail => Field::Email,
            ValidationError::PasswordRequired | ValidationError::PasswordTooShort => {
                Field::Password
            }
            ValidationError::ConfirmPasswordRequired | ValidationError::PasswordsMismatch => {
                Field::ConfirmPassword
            }
            ValidationError::FileRequired => Field::File,
            ValidationError::TermsNotAccepted => Field::Checkbox,
            ValidationError::CityRequired => Field::City,
        }
    }
}

/// Errors keyed by field, at most one per field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, ValidationError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&mut self, result: Result<(), ValidationError>) {
        if let Err(err) = result {
            self.0.insert(err.field(), err);
        }
    }

    pub fn get(&self, field: Field) -> Option<ValidationError> {
        self.0.get(&field).copied()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Fields with an error, in field order
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, ValidationError)> + '_ {
        self.0.iter().map(|(f, e)| (*f, *e))
    }
}

/// Run the ruleset of `mode` over `values`
pub fn validate(mode: Mode, values: &FormValues) -> FieldErrors {
    match mode {
        Mode::Login => login_rules(values),
        Mode::SignUp => sign_up_rules(values),
    }
}

/// Login: email and password are required, nothing else is checked
pub fn login_rules(values: &FormValues) -> FieldErrors {
    let mut errors = FieldErrors::new();
    errors.record(check_email(&values.email));
    errors.record(required(&values.password, ValidationError::PasswordRequired));
    errors
}

/// Sign-up: every field is checked
pub fn sign_up_rules(values: &FormValues) -> FieldErrors {
    let mut errors = FieldErrors::new();
    errors.record(required(&values.name, ValidationError::NameRequired));
    errors.record(check_email(&values.email));
    errors.record(check_new_password(&values.password));
    errors.record(check_confirmation(
        &values.password,
        &values.confirm_password,
    ));
    if values.file.is_none() {
        errors.record(Err(ValidationError::FileRequired));
    }
    if !values.checkbox {
        errors.record(Err(ValidationError::TermsNotAccepted));
    }
    if values.city.is_none() {
        errors.record(Err(ValidationError::CityRequired));
    }
    errors
}

fn required(value: &str, err: ValidationError) -> Result<(), ValidationError> {
    if value.is_empty() {
        Err(err)
    } else {
        Ok(())
    }
}

fn check_email(email: &str) -> Result<(), ValidationError> {
    required(email, ValidationError::EmailRequired)?;
    if !is_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

// Length runs before presence, so "" reports the length message and the
// presence check can no longer fail
fn check_new_password(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

// Match runs before presence; an empty confirmation of an empty password
// is the only case that reports "required"
fn check_confirmation(password: &str, confirmation: &str) -> Result<(), ValidationError> {
    if confirmation != password {
        return Err(ValidationError::PasswordsMismatch);
    }
    required(confirmation, ValidationError::ConfirmPasswordRequired)
}
