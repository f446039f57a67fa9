use serde::{Deserialize, Serialize};

/// Seconds the user waits before another code can be requested.
pub const DEFAULT_RESEND_COOLDOWN_SECS: u32 = 30;

/// Resend cooldown counted in whole ticks.
///
/// Decrements once per tick, stops at zero, and only then allows a resend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResendCountdown {
    duration: u32,
    remaining: u32,
}

impl ResendCountdown {
    /// A countdown that starts at full `duration`.
    pub fn started(duration: u32) -> Self {
        Self {
            duration,
            remaining: duration,
        }
    }

    /// A countdown that has already elapsed; resend is allowed.
    pub fn elapsed(duration: u32) -> Self {
        Self {
            duration,
            remaining: 0,
        }
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn can_resend(&self) -> bool {
        self.remaining == 0
    }

    /// Advances one tick and returns what is left. No-op at zero.
    pub fn tick(&mut self) -> u32 {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining
    }

    /// Back to full duration.
    pub fn restart(&mut self) {
        self.remaining = self.duration;
    }
}

impl Default for ResendCountdown {
    fn default() -> Self {
        Self::elapsed(DEFAULT_RESEND_COOLDOWN_SECS)
    }
}
