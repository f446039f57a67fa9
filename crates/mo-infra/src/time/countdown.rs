use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use mo_core::otp::ResendCountdown;
use mo_core::ports::CountdownPort;
use tokio::sync::{watch, Mutex};
use tokio::time::{interval_at, Duration, Instant};
use tracing::debug;

/// Resend countdown driven by a tokio task.
///
/// One task at most; `start` aborts the previous task before spawning. Every
/// `start`/`cancel` bumps the generation, and a task only publishes while its
/// generation is current, so an aborted task mid-poll cannot overwrite a newer
/// value.
pub struct TokioCountdown {
    tick: Duration,
    remaining: Arc<watch::Sender<u32>>,
    generation: Arc<AtomicU64>,
    task: Mutex<Option<tokio::task::AbortHandle>>,
}

impl TokioCountdown {
    pub fn new(tick: Duration) -> Self {
        let (remaining, _) = watch::channel(0);
        Self {
            tick,
            remaining: Arc::new(remaining),
            generation: Arc::new(AtomicU64::new(0)),
            task: Mutex::new(None),
        }
    }
}

/// Publishes `value` only if `owner` is still the current generation.
///
/// The check runs under the channel's write lock, so it is ordered against
/// the `send_replace` that follows a generation bump.
fn publish_if_current(
    remaining: &watch::Sender<u32>,
    generation: &AtomicU64,
    owner: u64,
    value: u32,
) -> bool {
    remaining.send_if_modified(|current| {
        if generation.load(Ordering::Acquire) != owner {
            return false;
        }
        *current = value;
        true
    })
}

#[async_trait::async_trait]
impl CountdownPort for TokioCountdown {
    async fn start(&self, duration: u32) -> anyhow::Result<()> {
        let mut task_guard = self.task.lock().await;
        if let Some(existing) = task_guard.take() {
            existing.abort();
            debug!("previous countdown aborted");
        }

        let owner = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        self.remaining.send_replace(duration);

        let remaining = Arc::clone(&self.remaining);
        let generation = Arc::clone(&self.generation);
        let tick = self.tick;
        // Anchored here, not inside the task, so the first tick is one full
        // period after `start` regardless of when the task is first polled.
        let first = Instant::now() + tick;
        let handle = tokio::spawn(async move {
            let mut countdown = ResendCountdown::started(duration);
            let mut ticks = interval_at(first, tick);
            while !countdown.can_resend() {
                ticks.tick().await;
                let value = countdown.tick();
                if !publish_if_current(&remaining, &generation, owner, value) {
                    debug!("stale countdown stopped");
                    return;
                }
            }
            debug!("countdown elapsed");
        });

        *task_guard = Some(handle.abort_handle());
        debug!(duration, tick_ms = tick.as_millis() as u64, "countdown started");
        Ok(())
    }

    async fn cancel(&self) -> anyhow::Result<()> {
        let mut task_guard = self.task.lock().await;
        if let Some(handle) = task_guard.take() {
            handle.abort();
            self.generation.fetch_add(1, Ordering::AcqRel);
            self.remaining.send_replace(0);
            debug!("countdown cancelled");
        }
        Ok(())
    }

    fn remaining(&self) -> u32 {
        *self.remaining.borrow()
    }

    fn subscribe(&self) -> watch::Receiver<u32> {
        self.remaining.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::sleep;

    const TICK: Duration = Duration::from_secs(1);

    /// Waits for published values until `last` shows up. Time is paused, so
    /// the runtime jumps straight to each timer deadline.
    async fn collect_until(rx: &mut watch::Receiver<u32>, last: u32) -> Vec<u32> {
        let mut seen = Vec::new();
        while rx.changed().await.is_ok() {
            let value = *rx.borrow_and_update();
            seen.push(value);
            if value == last {
                break;
            }
        }
        seen
    }

    #[tokio::test(start_paused = true)]
    async fn counts_down_to_zero_and_stops() -> anyhow::Result<()> {
        let countdown = TokioCountdown::new(TICK);
        let mut rx = countdown.subscribe();
        let started = Instant::now();

        countdown.start(3).await?;
        assert_eq!(*rx.borrow_and_update(), 3);

        assert_eq!(collect_until(&mut rx, 0).await, vec![2, 1, 0]);
        let elapsed = started.elapsed();
        assert!(elapsed >= TICK * 3 && elapsed < TICK * 4, "{elapsed:?}");

        sleep(TICK * 2).await;
        assert_eq!(countdown.remaining(), 0);
        assert!(!rx.has_changed()?);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn restart_leaves_one_countdown_at_full_duration() -> anyhow::Result<()> {
        let countdown = TokioCountdown::new(TICK);
        let mut rx = countdown.subscribe();

        countdown.start(5).await?;
        assert_eq!(*rx.borrow_and_update(), 5);
        assert_eq!(collect_until(&mut rx, 3).await, vec![4, 3]);

        let restarted = Instant::now();
        countdown.start(5).await?;
        assert_eq!(*rx.borrow_and_update(), 5);

        // Only the new countdown publishes, one value per tick.
        assert_eq!(collect_until(&mut rx, 0).await, vec![4, 3, 2, 1, 0]);
        let elapsed = restarted.elapsed();
        assert!(elapsed >= TICK * 5 && elapsed < TICK * 6, "{elapsed:?}");

        sleep(TICK * 5).await;
        assert!(!rx.has_changed()?);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_stops_ticking_and_allows_resend() -> anyhow::Result<()> {
        let countdown = TokioCountdown::new(TICK);
        let mut rx = countdown.subscribe();

        countdown.start(5).await?;
        countdown.cancel().await?;
        assert_eq!(*rx.borrow_and_update(), 0);

        sleep(TICK * 6).await;
        assert_eq!(countdown.remaining(), 0);
        assert!(!rx.has_changed()?);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn subscribers_see_every_tick() -> anyhow::Result<()> {
        let countdown = TokioCountdown::new(TICK);
        let mut rx = countdown.subscribe();

        countdown.start(2).await?;
        let mut seen = Vec::new();
        while rx.changed().await.is_ok() {
            let value = *rx.borrow_and_update();
            seen.push(value);
            if value == 0 {
                break;
            }
        }

        assert_eq!(seen, vec![2, 1, 0]);
        Ok(())
    }

    #[test]
    fn superseded_generation_cannot_publish() {
        let (remaining, _rx) = watch::channel(5);
        let generation = AtomicU64::new(1);

        assert!(publish_if_current(&remaining, &generation, 1, 4));
        assert_eq!(*remaining.borrow(), 4);

        // A newer start took over.
        generation.fetch_add(1, Ordering::AcqRel);
        remaining.send_replace(5);

        assert!(!publish_if_current(&remaining, &generation, 1, 3));
        assert_eq!(*remaining.borrow(), 5);
    }
}
