//! Credential and profile validation.
//!
//! Pure predicates ([`rules`]) plus per-form aggregation into a [`FieldErrors`]
//! map. Nothing here touches session state.

mod field;
mod forms;
pub mod rules;

pub use field::{FieldError, FieldErrors, FormField};
pub use forms::{BusinessDetailsForm, LoginForm, OtpEntry, PhoneForm, RegistrationForm};
pub use rules::{
    is_present, is_valid_email, is_valid_gstin, is_valid_otp, is_valid_password, is_valid_phone,
    is_valid_pincode, passwords_match, MIN_PASSWORD_LEN, OTP_LENGTH,
};
