use mo_core::onboarding::OnboardingEvent;
use mo_core::validation::{LoginForm, RegistrationForm};
use tokio::io::{AsyncBufRead, AsyncWrite};

use super::ScreenInput;
use crate::adapters::Terminal;

pub(crate) async fn login<R, W>(terminal: &Terminal<R, W>) -> anyhow::Result<ScreenInput>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    loop {
        terminal.write_line("").await?;
        terminal.write_line("Welcome Back").await?;
        terminal.write_line("Sign in to continue").await?;
        terminal.write_line("  1) Sign In").await?;
        terminal.write_line("  2) Sign Up").await?;
        terminal.write_line("  q) Quit").await?;

        match field!(terminal, "Choose").trim() {
            "1" => break,
            "2" => return Ok(ScreenInput::Event(OnboardingEvent::ShowRegistration)),
            "q" => return Ok(ScreenInput::Quit),
            _ => continue,
        }
    }

    let email = field!(terminal, "Email");
    let password = field!(terminal, "Password");
    Ok(ScreenInput::Event(OnboardingEvent::SubmitLogin {
        form: LoginForm::new(email.trim(), password),
    }))
}

pub(crate) async fn registration<R, W>(terminal: &Terminal<R, W>) -> anyhow::Result<ScreenInput>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    loop {
        terminal.write_line("").await?;
        terminal.write_line("Create Account").await?;
        terminal.write_line("Sign up to get started").await?;
        terminal.write_line("  1) Create Account").await?;
        terminal.write_line("  2) Already have an account? Login").await?;
        terminal.write_line("  q) Quit").await?;

        match field!(terminal, "Choose").trim() {
            "1" => break,
            "2" => return Ok(ScreenInput::Event(OnboardingEvent::ShowLogin)),
            "q" => return Ok(ScreenInput::Quit),
            _ => continue,
        }
    }

    let form = RegistrationForm {
        name: field!(terminal, "Full Name"),
        email: field!(terminal, "Email").trim().to_string(),
        password: field!(terminal, "Create a password"),
        confirm_password: field!(terminal, "Confirm your password"),
    };
    Ok(ScreenInput::Event(OnboardingEvent::SubmitRegistration {
        form,
    }))
}
