use std::sync::Arc;

use anyhow::Result;
use mo_core::ports::{Prompt, UiPort};
use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::info;

use super::Terminal;

/// Terminal adapter for UI operations.
pub struct TerminalUi<R, W> {
    terminal: Arc<Terminal<R, W>>,
}

impl<R, W> TerminalUi<R, W> {
    pub fn new(terminal: Arc<Terminal<R, W>>) -> Self {
        Self { terminal }
    }
}

#[async_trait::async_trait]
impl<R, W> UiPort for TerminalUi<R, W>
where
    R: AsyncBufRead + Unpin + Send + 'static,
    W: AsyncWrite + Unpin + Send + 'static,
{
    async fn confirm(&self, prompt: &Prompt) -> Result<bool> {
        self.terminal.write_line("").await?;
        self.terminal.write_line(&prompt.title).await?;
        self.terminal.write_line(&prompt.message).await?;
        let question = format!(
            "[y] {} / [n] {}",
            prompt.confirm_label, prompt.cancel_label
        );
        let answer = self.terminal.prompt(&question).await?;
        Ok(matches!(
            answer.as_deref().map(str::trim),
            Some("y" | "Y" | "yes")
        ))
    }

    async fn open_settings(&self) -> Result<()> {
        info!("directing user to system settings");
        self.terminal
            .write_line("Open your device settings and allow location access for this app.")
            .await
    }
}
