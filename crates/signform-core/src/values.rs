//! Field values held by the form

use serde::Serialize;

use crate::error::{FormError, FormResult};
use crate::types::{City, Field, Mode, PickedFile};

/// Current values of every form field.
///
/// Both modes carry the full record; fields outside the active mode simply
/// stay at their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    #[serde(skip_serializing)]
    pub confirm_password: String,
    pub file: Option<PickedFile>,
    pub checkbox: bool,
    pub city: Option<City>,
}

impl FormValues {
    /// Initial values for `mode`
    ///
    /// Login and sign-up start from the same blank record.
    pub fn initial(_mode: Mode) -> Self {
        Self::default()
    }

    /// Store `value` into `field`.
    ///
    /// City text outside the fixed list is stored as "no city".
    pub fn set(&mut self, field: Field, value: FieldValue) -> FormResult<()> {
        match (field, value) {
            (Field::Name, FieldValue::Text(s)) => self.name = s,
            (Field::Email, FieldValue::Text(s)) => self.email = s,
            (Field::Password, FieldValue::Text(s)) => self.password = s,
            (Field::ConfirmPassword, FieldValue::Text(s)) => self.confirm_password = s,
            (Field::City, FieldValue::Text(s)) => self.city = City::parse(&s),
            (Field::Checkbox, FieldValue::Flag(b)) => self.checkbox = b,
            (Field::File, FieldValue::File(f)) => self.file = f,
            (field, _) => {
                return Err(FormError::ValueKindMismatch {
                    field,
                    expected: FieldValue::expected_kind(field),
                })
            }
        }
        Ok(())
    }

    /// Whether every field equals its initial value
    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }
}

/// A value produced by one input widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Text inputs and the city select
    Text(String),
    /// The terms checkbox
    Flag(bool),
    /// The file picker; `None` when the pick was cancelled
    File(Option<PickedFile>),
}

impl FieldValue {
    fn expected_kind(field: Field) -> &'static str {
        match field {
            Field::Checkbox => "boolean",
            Field::File => "file",
            _ => "text",
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Flag(b)
    }
}

impl From<Option<PickedFile>> for FieldValue {
    fn from(f: Option<PickedFile>) -> Self {
        FieldValue::File(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_values_are_blank() {
        for mode in [Mode::Login, Mode::SignUp] {
            let values = FormValues::initial(mode);
            assert!(values.is_blank());
            assert!(values.name.is_empty());
            assert!(values.file.is_none());
            assert!(!values.checkbox);
            assert!(values.city.is_none());
        }
    }

    #[test]
    fn test_set_text_fields() {
        let mut values = FormValues::default();
        values.set(Field::Name, "Ann".into()).unwrap();
        values.set(Field::ConfirmPassword, "secret1".into()).unwrap();
        assert_eq!(values.name, "Ann");
        assert_eq!(values.confirm_password, "secret1");
        assert!(!values.is_blank());
    }

    #[test]
    fn test_unknown_city_is_stored_as_none() {
        let mut values = FormValues::default();
        values.set(Field::City, "Chicago".into()).unwrap();
        assert_eq!(values.city, Some(City::Chicago));
        values.set(Field::City, "Atlantis".into()).unwrap();
        assert_eq!(values.city, None);
    }

    #[test]
    fn test_wrong_kind_is_rejected() {
        let mut values = FormValues::default();
        let err = values.set(Field::Checkbox, "yes".into()).unwrap_err();
        assert_eq!(
            err,
            FormError::ValueKindMismatch {
                field: Field::Checkbox,
                expected: "boolean",
            }
        );
        assert!(values.set(Field::Email, true.into()).is_err());
        assert!(values.is_blank());
    }

    #[test]
    fn test_serialization_skips_passwords() {
        let mut values = FormValues::default();
        values.set(Field::Email, "a@b.com".into()).unwrap();
        values.set(Field::Password, "hunter22".into()).unwrap();
        let json = serde_json::to_string(&values).unwrap();
        assert!(json.contains("a@b.com"));
        assert!(!json.contains("hunter22"));
        assert!(!json.contains("password"));
    }
}
