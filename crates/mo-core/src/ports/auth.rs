use async_trait::async_trait;
use thiserror::Error;

use crate::user::{BusinessDetails, User};
use crate::validation::{LoginForm, RegistrationForm};

/// Failures reported by the authentication backend.
///
/// Display strings are shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Login failed. Please try again.")]
    LoginFailed,

    #[error("Registration failed. Please try again.")]
    RegistrationFailed,

    #[error("Logout failed. Please try again.")]
    LogoutFailed,

    #[error("Phone verification failed. Please try again.")]
    PhoneVerificationFailed,

    #[error("Failed to update business details. Please try again.")]
    BusinessDetailsUpdateFailed,
}

/// Sign-in credentials handed to the backend.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

impl From<&LoginForm> for Credentials {
    fn from(form: &LoginForm) -> Self {
        Self {
            email: form.email.clone(),
            password: form.password.clone(),
        }
    }
}

/// New account details handed to the backend.
#[derive(Clone, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("name", &self.name)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

impl From<&RegistrationForm> for Registration {
    fn from(form: &RegistrationForm) -> Self {
        Self {
            name: form.name.trim().to_string(),
            email: form.email.clone(),
            password: form.password.clone(),
        }
    }
}

#[async_trait]
pub trait AuthPort: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> Result<User, AuthError>;

    async fn register(&self, registration: &Registration) -> Result<User, AuthError>;

    async fn logout(&self) -> Result<(), AuthError>;

    async fn is_authenticated(&self) -> Result<bool, AuthError>;

    /// Starts verification of `phone`. `Ok(false)` means the backend declined
    /// without an error.
    async fn verify_phone(&self, phone: &str) -> Result<bool, AuthError>;

    async fn update_business_details(&self, details: &BusinessDetails)
        -> Result<User, AuthError>;
}
