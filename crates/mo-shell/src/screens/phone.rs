use mo_core::onboarding::OnboardingEvent;
use tokio::io::{AsyncBufRead, AsyncWrite};

use super::ScreenInput;
use crate::adapters::Terminal;

/// Number entry until a code was sent, then code entry with resend.
pub(crate) async fn verification<R, W>(
    terminal: &Terminal<R, W>,
    phone: Option<&str>,
    otp_sent: bool,
    resend_in: u32,
) -> anyhow::Result<ScreenInput>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    terminal.write_line("").await?;
    terminal.write_line("Verify Your Number").await?;

    if !otp_sent {
        terminal
            .write_line("We will send you a one-time password on this mobile number")
            .await?;
        let phone = field!(terminal, "+91 Enter mobile number");
        return Ok(ScreenInput::Event(OnboardingEvent::RequestOtp {
            phone: phone.trim().to_string(),
        }));
    }

    if let Some(phone) = phone {
        terminal
            .write_line(&format!("Code sent to +91 {phone}"))
            .await?;
    }
    if resend_in > 0 {
        terminal
            .write_line(&format!("Resend OTP in {resend_in}s"))
            .await?;
    } else {
        terminal.write_line("Type r to resend OTP").await?;
    }

    let answer = field!(terminal, "Enter OTP");
    let event = match answer.trim() {
        "r" => OnboardingEvent::ResendOtp,
        "q" => return Ok(ScreenInput::Quit),
        code => OnboardingEvent::SubmitOtp {
            code: code.to_string(),
        },
    };
    Ok(ScreenInput::Event(event))
}
