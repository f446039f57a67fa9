use mo_core::onboarding::{FlowError, OnboardingStep};
use tokio::io::{AsyncBufRead, AsyncWrite};

use crate::adapters::Terminal;

/// A blocking notice shown before the step is drawn again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub lines: Vec<String>,
}

impl Alert {
    fn new(title: &str, lines: Vec<String>) -> Self {
        Self {
            title: title.to_string(),
            lines,
        }
    }

    pub async fn render<R, W>(&self, terminal: &Terminal<R, W>) -> anyhow::Result<()>
    where
        R: AsyncBufRead + Unpin + Send,
        W: AsyncWrite + Unpin + Send,
    {
        terminal.write_line("").await?;
        terminal.write_line(&format!("[{}]", self.title)).await?;
        for line in &self.lines {
            terminal.write_line(&format!("  {line}")).await?;
        }
        Ok(())
    }
}

/// Title and text for `error` raised on `step`.
pub fn alert_for(step: &OnboardingStep, error: &FlowError) -> Alert {
    match error {
        FlowError::Invalid(errors) => {
            let title = match step {
                OnboardingStep::PhoneVerification { otp_sent: true, .. } => "Invalid OTP",
                OnboardingStep::PhoneVerification { .. } => "Invalid Phone Number",
                _ => "Error",
            };
            let lines = errors
                .messages()
                .into_iter()
                .map(|(_, message)| message)
                .collect();
            Alert::new(title, lines)
        }
        FlowError::Rejected { message } => {
            let title = match step {
                OnboardingStep::Login { .. } => "Login Failed",
                OnboardingStep::Registration { .. } => "Registration Failed",
                _ => "Error",
            };
            Alert::new(title, vec![message.clone()])
        }
        FlowError::Busy => Alert::new(
            "Please Wait",
            vec!["Another request is still in progress.".to_string()],
        ),
        FlowError::ResendNotReady { remaining } => Alert::new(
            "Please Wait",
            vec![format!("Resend OTP in {remaining}s")],
        ),
        FlowError::LocationUnavailable { message } => Alert::new(
            "Error",
            vec![
                "Failed to get location. Please try again.".to_string(),
                message.clone(),
            ],
        ),
    }
}
