use std::sync::Arc;

use mo_core::ports::CountdownPort;
use tracing::info;

use crate::usecases::OperationError;

/// Use case for (re)starting the OTP resend cooldown.
pub struct StartResendCountdown {
    countdown: Arc<dyn CountdownPort>,
    duration: u32,
}

impl StartResendCountdown {
    pub fn new(countdown: Arc<dyn CountdownPort>, duration: u32) -> Self {
        Self {
            countdown,
            duration,
        }
    }

    pub async fn execute(&self) -> Result<(), OperationError> {
        self.countdown
            .start(self.duration)
            .await
            .map_err(OperationError::Countdown)?;
        info!(duration = self.duration, "resend countdown started");
        Ok(())
    }
}
