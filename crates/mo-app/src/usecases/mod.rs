//! Onboarding use cases
//!
//! Each use case owns the ports it needs and one `execute` entry point.
//! Session-changing calls go through the shared [`SessionContext`]; the
//! [`OnboardingOrchestrator`] routes step events to them.

pub mod auth;
pub mod business;
mod error;
pub mod onboarding;
pub mod phone;
pub mod session;

#[cfg(test)]
pub(crate) mod test_support;

pub use auth::{CheckAuthenticated, LoginUser, LogoutUser, RegisterUser};
pub use business::{AcquireLocation, SubmitBusinessDetails};
pub use error::OperationError;
pub use onboarding::OnboardingOrchestrator;
pub use phone::{ConfirmOtp, RequestPhoneVerification, StartResendCountdown};
pub use session::SessionContext;
