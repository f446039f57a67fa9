use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Input fields collected across the onboarding forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Name,
    Email,
    Password,
    ConfirmPassword,
    Phone,
    Otp,
    OrganizationName,
    Gstin,
    Address,
    City,
    State,
    Pincode,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Password => "password",
            FormField::ConfirmPassword => "confirm password",
            FormField::Phone => "phone",
            FormField::Otp => "otp",
            FormField::OrganizationName => "organization name",
            FormField::Gstin => "gstin",
            FormField::Address => "address",
            FormField::City => "city",
            FormField::State => "state",
            FormField::Pincode => "pincode",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Why a single field was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldError {
    Required,
    InvalidFormat,
    TooShort { min_len: usize },
    Mismatch,
    ConfirmationRequired,
}

impl FieldError {
    /// User-facing message for this error on `field`.
    pub fn message(&self, field: FormField) -> String {
        match (self, field) {
            (FieldError::Required, FormField::Name) => "Name is required".to_string(),
            (FieldError::Required, FormField::Email) => "Email is required".to_string(),
            (FieldError::Required, FormField::Password) => "Password is required".to_string(),
            (FieldError::Required, FormField::OrganizationName) => {
                "Please enter organization name".to_string()
            }
            (FieldError::Required, FormField::Address) => "Please enter address".to_string(),
            (FieldError::Required, FormField::City) => "Please enter city".to_string(),
            (FieldError::Required, FormField::State) => "Please enter state".to_string(),
            (FieldError::Required, other) => format!("{other} is required"),
            (FieldError::InvalidFormat, FormField::Email) => "Invalid email format".to_string(),
            (FieldError::InvalidFormat, FormField::Phone) => {
                "Please enter a valid 10-digit Indian mobile number".to_string()
            }
            (FieldError::InvalidFormat, FormField::Otp) => {
                "Please enter a valid 6-digit OTP".to_string()
            }
            (FieldError::InvalidFormat, FormField::Gstin) => {
                "Please enter a valid GSTIN number".to_string()
            }
            (FieldError::InvalidFormat, FormField::Pincode) => {
                "Please enter a valid 6-digit pincode".to_string()
            }
            (FieldError::InvalidFormat, other) => format!("Invalid {other}"),
            (FieldError::TooShort { min_len }, other) => {
                let mut label = other.label().to_string();
                if let Some(first) = label.get_mut(0..1) {
                    first.make_ascii_uppercase();
                }
                format!("{label} must be at least {min_len} characters")
            }
            (FieldError::Mismatch, _) => "Passwords do not match".to_string(),
            (FieldError::ConfirmationRequired, _) => "Please confirm your password".to_string(),
        }
    }
}

/// Per-field validation result for one submission attempt.
///
/// An empty map means the submission may proceed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{} field(s) failed validation", .errors.len())]
pub struct FieldErrors {
    errors: BTreeMap<FormField, FieldError>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `error` for `field`. The first error recorded for a field wins.
    pub fn insert(&mut self, field: FormField, error: FieldError) {
        self.errors.entry(field).or_insert(error);
    }

    /// Records `error` unless `ok` holds.
    pub fn check(&mut self, ok: bool, field: FormField, error: FieldError) {
        if !ok {
            self.insert(field, error);
        }
    }

    pub fn get(&self, field: FormField) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &FieldError)> {
        self.errors.iter().map(|(field, error)| (*field, error))
    }

    /// Field messages in field order.
    pub fn messages(&self) -> Vec<(FormField, String)> {
        self.iter()
            .map(|(field, error)| (field, error.message(field)))
            .collect()
    }

    /// `Ok(())` when nothing was recorded, otherwise the collected errors.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_error_for_a_field_wins() {
        let mut errors = FieldErrors::new();
        errors.insert(FormField::Email, FieldError::Required);
        errors.insert(FormField::Email, FieldError::InvalidFormat);

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(FormField::Email), Some(&FieldError::Required));
    }

    #[test]
    fn empty_map_converts_to_ok() {
        assert!(FieldErrors::new().into_result().is_ok());

        let mut errors = FieldErrors::new();
        errors.check(false, FormField::City, FieldError::Required);
        assert!(errors.into_result().is_err());
    }

    #[test]
    fn messages_follow_form_wording() {
        assert_eq!(
            FieldError::TooShort { min_len: 8 }.message(FormField::Password),
            "Password must be at least 8 characters"
        );
        assert_eq!(
            FieldError::InvalidFormat.message(FormField::Email),
            "Invalid email format"
        );
        assert_eq!(
            FieldError::Required.message(FormField::City),
            "Please enter city"
        );
    }
}
