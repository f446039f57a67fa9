//! One-time password domain module.

mod countdown;

pub use countdown::{ResendCountdown, DEFAULT_RESEND_COOLDOWN_SECS};
pub use crate::validation::OTP_LENGTH;
