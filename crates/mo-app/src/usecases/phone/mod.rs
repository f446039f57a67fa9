//! Phone verification use cases.

mod confirm_otp;
mod request_verification;
mod start_countdown;

pub use confirm_otp::ConfirmOtp;
pub use request_verification::RequestPhoneVerification;
pub use start_countdown::StartResendCountdown;
