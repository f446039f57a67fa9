//! Structural validation rules.
//!
//! Every rule is a pure predicate over a string slice. Patterns are compiled
//! once and shared.

use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Number of digits in a one-time password.
pub const OTP_LENGTH: usize = 6;

/// Loose email shape: `local@domain.tld`, no whitespace, a single `@`.
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Indian mobile number: 10 digits starting with 6-9.
static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[6-9][0-9]{9}$").expect("phone pattern compiles"));

/// GSTIN: state code, PAN, entity number, literal `Z`, check character.
static GSTIN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}[A-Z]{5}[0-9]{4}[A-Z][1-9A-Z]Z[0-9A-Z]$").expect("gstin pattern compiles")
});

/// Indian postal code: 6 digits, no leading zero.
static PINCODE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[1-9][0-9]{5}$").expect("pincode pattern compiles"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Registration password rule: non-empty and at least [`MIN_PASSWORD_LEN`] characters.
pub fn is_valid_password(password: &str) -> bool {
    !password.is_empty() && password.chars().count() >= MIN_PASSWORD_LEN
}

/// Exact, case-sensitive equality.
pub fn passwords_match(password: &str, confirmation: &str) -> bool {
    password == confirmation
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}

pub fn is_valid_gstin(gstin: &str) -> bool {
    GSTIN_REGEX.is_match(gstin)
}

pub fn is_valid_pincode(pincode: &str) -> bool {
    PINCODE_REGEX.is_match(pincode)
}

/// Required-field check: something other than whitespace was entered.
pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

/// OTP shape only. Says nothing about whether the code was actually issued.
pub fn is_valid_otp(code: &str) -> bool {
    code.len() == OTP_LENGTH && code.bytes().all(|b| b.is_ascii_digit())
}
