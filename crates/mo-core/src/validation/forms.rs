//! Form inputs and their aggregate validation.
//!
//! A form collects every failing field into one [`FieldErrors`] map; nothing is
//! submitted unless the whole form passes.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::field::{FieldError, FieldErrors, FormField};
use super::rules::{
    is_present, is_valid_email, is_valid_gstin, is_valid_otp, is_valid_password, is_valid_phone,
    is_valid_pincode, passwords_match, MIN_PASSWORD_LEN,
};

const REDACTED: &str = "<redacted>";

/// Email/password sign-in input.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Login only checks presence of the password, never its length.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        check_email(&mut errors, &self.email);
        errors.check(
            !self.password.is_empty(),
            FormField::Password,
            FieldError::Required,
        );
        errors.into_result()
    }
}

impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("email", &self.email)
            .field("password", &REDACTED)
            .finish()
    }
}

/// Account creation input.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        errors.check(is_present(&self.name), FormField::Name, FieldError::Required);
        check_email(&mut errors, &self.email);

        // Length and confirmation are independent checks.
        if self.password.is_empty() {
            errors.insert(FormField::Password, FieldError::Required);
        } else if !is_valid_password(&self.password) {
            errors.insert(
                FormField::Password,
                FieldError::TooShort {
                    min_len: MIN_PASSWORD_LEN,
                },
            );
        }

        if self.confirm_password.is_empty() {
            errors.insert(FormField::ConfirmPassword, FieldError::ConfirmationRequired);
        } else if !passwords_match(&self.password, &self.confirm_password) {
            errors.insert(FormField::ConfirmPassword, FieldError::Mismatch);
        }

        errors.into_result()
    }
}

impl fmt::Debug for RegistrationForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationForm")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &REDACTED)
            .field("confirm_password", &REDACTED)
            .finish()
    }
}

/// Mobile number entry on the phone verification step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneForm {
    pub phone: String,
}

impl PhoneForm {
    pub fn new(phone: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
        }
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check(
            is_valid_phone(&self.phone),
            FormField::Phone,
            FieldError::InvalidFormat,
        );
        errors.into_result()
    }
}

/// The one-time password typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpEntry {
    pub code: String,
}

impl OtpEntry {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check(
            is_valid_otp(&self.code),
            FormField::Otp,
            FieldError::InvalidFormat,
        );
        errors.into_result()
    }
}

/// Business profile input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessDetailsForm {
    pub organization_name: String,
    pub gstin: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
}

impl BusinessDetailsForm {
    /// Trims every field and upper-cases the GSTIN, the way the input box does
    /// while the user types.
    pub fn normalized(self) -> Self {
        Self {
            organization_name: self.organization_name.trim().to_string(),
            gstin: self.gstin.trim().to_uppercase(),
            address: self.address.trim().to_string(),
            city: self.city.trim().to_string(),
            state: self.state.trim().to_string(),
            pincode: self.pincode.trim().to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check(
            is_present(&self.organization_name),
            FormField::OrganizationName,
            FieldError::Required,
        );
        errors.check(
            is_valid_gstin(&self.gstin),
            FormField::Gstin,
            FieldError::InvalidFormat,
        );
        errors.check(
            is_present(&self.address),
            FormField::Address,
            FieldError::Required,
        );
        errors.check(is_present(&self.city), FormField::City, FieldError::Required);
        errors.check(is_present(&self.state), FormField::State, FieldError::Required);
        errors.check(
            is_valid_pincode(&self.pincode),
            FormField::Pincode,
            FieldError::InvalidFormat,
        );
        errors.into_result()
    }
}

fn check_email(errors: &mut FieldErrors, email: &str) {
    if email.is_empty() {
        errors.insert(FormField::Email, FieldError::Required);
    } else if !is_valid_email(email) {
        errors.insert(FormField::Email, FieldError::InvalidFormat);
    }
}
