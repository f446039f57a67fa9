use mo_core::onboarding::OnboardingEvent;
use mo_core::user::User;
use tokio::io::{AsyncBufRead, AsyncWrite};

use super::ScreenInput;
use crate::adapters::Terminal;

pub(crate) async fn home<R, W>(
    terminal: &Terminal<R, W>,
    user: Option<&User>,
) -> anyhow::Result<ScreenInput>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    loop {
        terminal.write_line("").await?;
        terminal.write_line("Welcome Back!").await?;
        terminal.write_line("Discover what's new today").await?;
        if let Some(user) = user {
            terminal.write_line(&serde_json::to_string_pretty(user)?).await?;
        }
        terminal.write_line("  s) Sign Out").await?;
        terminal.write_line("  q) Quit").await?;

        match field!(terminal, "Choose").trim() {
            "s" => return Ok(ScreenInput::Event(OnboardingEvent::SignOut)),
            "q" => return Ok(ScreenInput::Quit),
            _ => continue,
        }
    }
}
