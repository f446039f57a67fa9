//! Terminal screens, one per onboarding step.
//!
//! Each screen renders its step, reads input, and turns it into an
//! [`OnboardingEvent`]. Errors recorded on a step are shown as an alert and
//! dismissed before the step is drawn again.

/// Reads a field inside a screen; end of input returns [`ScreenInput::Quit`].
macro_rules! field {
    ($terminal:expr, $label:expr) => {
        match $crate::screens::read($terminal, $label).await? {
            Some(value) => value,
            None => return Ok($crate::screens::ScreenInput::Quit),
        }
    };
}

mod alert;
mod auth;
mod business;
mod home;
mod phone;

use mo_core::onboarding::{OnboardingEvent, OnboardingStep};
use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::{debug, info};

use crate::adapters::Terminal;
use crate::bootstrap::AppRuntime;

pub use alert::{alert_for, Alert};

/// What a screen produced from the user's input.
#[derive(Debug)]
pub(crate) enum ScreenInput {
    Event(OnboardingEvent),
    Quit,
}

/// Drives the onboarding flow until the user quits or input ends.
pub async fn run_flow<R, W>(runtime: &AppRuntime, terminal: &Terminal<R, W>) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    let onboarding = runtime.onboarding();
    loop {
        let step = onboarding.current_step().await;
        if let Some(error) = step.error() {
            alert_for(&step, error).render(terminal).await?;
            onboarding.dismiss_error().await;
        }

        debug!(step = step.name(), "rendering step");
        let input = match &step {
            OnboardingStep::Login { .. } => auth::login(terminal).await?,
            OnboardingStep::Registration { .. } => auth::registration(terminal).await?,
            OnboardingStep::PhoneVerification {
                phone, otp_sent, ..
            } => {
                let remaining = *onboarding.resend_countdown().borrow();
                phone::verification(terminal, phone.as_deref(), *otp_sent, remaining).await?
            }
            OnboardingStep::BusinessDetails { .. } => business::details(terminal).await?,
            OnboardingStep::Home { .. } => {
                home::home(terminal, runtime.session().current_user().as_ref()).await?
            }
        };

        match input {
            ScreenInput::Event(event) => {
                onboarding.dispatch(event).await;
            }
            ScreenInput::Quit => {
                info!(step = step.name(), "user left the onboarding flow");
                return Ok(());
            }
        }
    }
}

/// Reads one line; end of input means quit.
pub(crate) async fn read<R, W>(
    terminal: &Terminal<R, W>,
    label: &str,
) -> anyhow::Result<Option<String>>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    terminal.prompt(label).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::TerminalUi;
    use crate::bootstrap::wire_dependencies;
    use mo_core::config::AppConfig;
    use mo_core::location::LocationPermission;
    use std::sync::Arc;

    async fn run_script(config: AppConfig, script: &'static str) -> String {
        let terminal = Arc::new(Terminal::new(script.as_bytes(), Vec::new()));
        let ui = Arc::new(TerminalUi::new(terminal.clone()));
        let runtime = AppRuntime::new(wire_dependencies(&config, ui), &config);

        run_flow(&runtime, terminal.as_ref()).await.unwrap();
        terminal.transcript().await
    }

    #[tokio::test]
    async fn login_reaches_home_and_prints_user() {
        let transcript = run_script(
            AppConfig::default(),
            "1\nowner@shop.in\nsecret\nq\n",
        )
        .await;

        assert!(transcript.contains("Welcome Back"));
        assert!(transcript.contains("\"email\": \"owner@shop.in\""));
    }

    #[tokio::test]
    async fn invalid_login_shows_field_errors_then_retries() {
        let transcript = run_script(AppConfig::default(), "1\nnot-an-email\n\n").await;

        assert!(transcript.contains("Invalid email format"));
        assert!(transcript.contains("Password is required"));
    }

    #[tokio::test]
    async fn registration_walks_every_step() {
        let script = concat!(
            "2\n",
            "1\nAsha\nasha@traders.in\nabcdefgh\nabcdefgh\n",
            "9876543210\n",
            "123456\n",
            "Asha Traders\n27aapfu0939f1zv\n12 Market Road\nMumbai\nMaharashtra\n400001\n",
            "q\n",
        );

        let transcript = run_script(AppConfig::default(), script).await;

        assert!(transcript.contains("Verify Your Number"));
        assert!(transcript.contains("Business Details"));
        assert!(transcript.contains("\"gstin\": \"27AAPFU0939F1ZV\""));
        assert!(transcript.contains("\"phone\": \"9876543210\""));
    }

    #[tokio::test]
    async fn denied_location_offers_settings() {
        let mut config = AppConfig::default();
        config.location.permission = LocationPermission::Denied;
        let script = concat!(
            "2\n",
            "1\nAsha\nasha@traders.in\nabcdefgh\nabcdefgh\n",
            "9876543210\n",
            "123456\n",
            "Asha Traders\n27AAPFU0939F1ZV\n12 Market Road\nMumbai\nMaharashtra\n400001\n",
            "y\n",
        );

        let transcript = run_script(config, script).await;

        assert!(transcript.contains("Location Permission Required"));
        assert!(transcript.contains("Failed to get location. Please try again."));
    }
}
