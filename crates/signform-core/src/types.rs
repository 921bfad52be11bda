//! Core types for SignForm

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormError;

/// Which field set the form is showing.
///
/// Exactly one mode is active at a time. The mode decides both the rendered
/// fields and the ruleset they are validated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    #[default]
    Login,
    SignUp,
}

impl Mode {
    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            Mode::Login => Mode::SignUp,
            Mode::SignUp => Mode::Login,
        }
    }

    /// Fields rendered (and validated) in this mode, in display order
    pub fn fields(self) -> &'static [Field] {
        match self {
            Mode::Login => &[Field::Email, Field::Password],
            Mode::SignUp => &[
                Field::Name,
                Field::Email,
                Field::Password,
                Field::ConfirmPassword,
                Field::City,
                Field::File,
                Field::Checkbox,
            ],
        }
    }

    /// Whether `field` is part of this mode's field set
    pub fn has_field(self, field: Field) -> bool {
        self.fields().contains(&field)
    }

    /// Form heading
    pub fn title(self) -> &'static str {
        match self {
            Mode::Login => "Login Form",
            Mode::SignUp => "Registration Form",
        }
    }

    /// Label of the submit button
    pub fn submit_label(self) -> &'static str {
        match self {
            Mode::Login => "Login",
            Mode::SignUp => "Sign Up",
        }
    }

    /// Text of the link that switches to the other mode
    pub fn toggle_prompt(self) -> &'static str {
        match self {
            Mode::Login => "Need an account? Sign Up",
            Mode::SignUp => "Already have an account? Login",
        }
    }

    /// Text of the success banner shown after a valid submit
    pub fn success_message(self) -> &'static str {
        match self {
            Mode::Login => "Login Successfully",
            Mode::SignUp => "Form submitted successfully!",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Login => write!(f, "login"),
            Mode::SignUp => write!(f, "sign-up"),
        }
    }
}

impl FromStr for Mode {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "login" => Ok(Mode::Login),
            "sign-up" | "signup" => Ok(Mode::SignUp),
            other => Err(FormError::UnknownMode(other.to_string())),
        }
    }
}

/// A single form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
    File,
    Checkbox,
    City,
}

impl Field {
    /// Every field, in declaration order
    pub const ALL: [Field; 7] = [
        Field::Name,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
        Field::File,
        Field::Checkbox,
        Field::City,
    ];

    /// Stable name used for element ids and logs
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirm_password",
            Field::File => "file",
            Field::Checkbox => "checkbox",
            Field::City => "city",
        }
    }

    /// Placeholder shown in an empty text input
    pub fn placeholder(self) -> Option<&'static str> {
        match self {
            Field::Name => Some("Enter name"),
            Field::Email => Some("Enter email"),
            Field::Password => Some("Password"),
            Field::ConfirmPassword => Some("Confirm Password"),
            Field::File | Field::Checkbox | Field::City => None,
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "confirmPassword" {
            return Ok(Field::ConfirmPassword);
        }
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

/// One of the fixed cities offered by the sign-up form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum City {
    #[serde(rename = "New York")]
    NewYork,
    #[serde(rename = "Los Angeles")]
    LosAngeles,
    Chicago,
    Houston,
    Miami,
}

impl City {
    /// All selectable cities, in display order
    pub const ALL: [City; 5] = [
        City::NewYork,
        City::LosAngeles,
        City::Chicago,
        City::Houston,
        City::Miami,
    ];

    /// Display name, also the value submitted by the select element
    pub fn name(self) -> &'static str {
        match self {
            City::NewYork => "New York",
            City::LosAngeles => "Los Angeles",
            City::Chicago => "Chicago",
            City::Houston => "Houston",
            City::Miami => "Miami",
        }
    }

    /// Parse a selection value. Anything outside the fixed list is `None`.
    pub fn parse(value: &str) -> Option<City> {
        City::ALL.into_iter().find(|city| city.name() == value)
    }
}

impl std::fmt::Display for City {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A file chosen through the file picker.
///
/// Only the location is kept; the file is never opened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickedFile {
    /// Full path as returned by the picker
    pub path: PathBuf,
    /// File name shown next to the picker
    pub name: String,
}

impl PickedFile {
    /// Build from a picked path, deriving the display name from its last component
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = display_name(&path);
        Self { path, name }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_toggle_is_involution() {
        assert_eq!(Mode::Login.toggled(), Mode::SignUp);
        assert_eq!(Mode::SignUp.toggled().toggled(), Mode::SignUp);
    }

    #[test]
    fn test_mode_default_is_login() {
        assert_eq!(Mode::default(), Mode::Login);
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("login".parse::<Mode>().unwrap(), Mode::Login);
        assert_eq!("Sign-Up".parse::<Mode>().unwrap(), Mode::SignUp);
        assert_eq!("signup".parse::<Mode>().unwrap(), Mode::SignUp);
        assert!(matches!(
            "register".parse::<Mode>(),
            Err(FormError::UnknownMode(_))
        ));
    }

    #[test]
    fn test_login_fields_are_email_and_password() {
        assert_eq!(Mode::Login.fields(), &[Field::Email, Field::Password]);
        assert!(!Mode::Login.has_field(Field::City));
        assert!(Mode::SignUp.has_field(Field::City));
        assert_eq!(Mode::SignUp.fields().len(), Field::ALL.len());
    }

    #[test]
    fn test_field_from_str() {
        assert_eq!("email".parse::<Field>().unwrap(), Field::Email);
        assert_eq!(
            "confirmPassword".parse::<Field>().unwrap(),
            Field::ConfirmPassword
        );
        assert_eq!(
            "nickname".parse::<Field>(),
            Err(FormError::UnknownField("nickname".to_string()))
        );
    }

    #[test]
    fn test_city_parse_only_accepts_fixed_list() {
        assert_eq!(City::parse("Miami"), Some(City::Miami));
        assert_eq!(City::parse("New York"), Some(City::NewYork));
        assert_eq!(City::parse(""), None);
        assert_eq!(City::parse("Paris"), None);
        assert_eq!(City::parse("miami"), None);
    }

    #[test]
    fn test_city_serializes_as_display_name() {
        let json = serde_json::to_string(&City::LosAngeles).unwrap();
        assert_eq!(json, "\"Los Angeles\"");
    }

    #[test]
    fn test_picked_file_name() {
        let file = PickedFile::from_path("/tmp/docs/resume.pdf");
        assert_eq!(file.name, "resume.pdf");
        assert_eq!(file.path, PathBuf::from("/tmp/docs/resume.pdf"));
    }
}
