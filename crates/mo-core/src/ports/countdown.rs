use tokio::sync::watch;

/// Resend cooldown timer.
///
/// At most one countdown is active; starting again cancels the previous one.
#[async_trait::async_trait]
pub trait CountdownPort: Send + Sync {
    /// Starts a countdown of `duration` ticks, replacing any running one.
    async fn start(&self, duration: u32) -> anyhow::Result<()>;

    /// Stops the running countdown, if any, and clears the remaining time.
    async fn cancel(&self) -> anyhow::Result<()>;

    /// Ticks left; zero when elapsed or never started.
    fn remaining(&self) -> u32;

    /// Receives every change to the remaining tick count.
    fn subscribe(&self) -> watch::Receiver<u32>;
}
