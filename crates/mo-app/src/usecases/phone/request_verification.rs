use std::sync::Arc;

use mo_core::ports::{AuthError, AuthPort, CountdownPort};
use mo_core::session::SessionAction;
use mo_core::validation::PhoneForm;
use tracing::{info, warn};

use crate::usecases::session::run_operation;
use crate::usecases::{OperationError, SessionContext};

/// Use case for sending a verification code to a mobile number.
///
/// Refused while the resend countdown is still running.
pub struct RequestPhoneVerification {
    auth: Arc<dyn AuthPort>,
    countdown: Arc<dyn CountdownPort>,
    session: Arc<SessionContext>,
}

impl RequestPhoneVerification {
    pub fn new(
        auth: Arc<dyn AuthPort>,
        countdown: Arc<dyn CountdownPort>,
        session: Arc<SessionContext>,
    ) -> Self {
        Self {
            auth,
            countdown,
            session,
        }
    }

    /// Returns whether the backend accepted the number.
    ///
    /// On acceptance the signed-in user's phone is updated. A decline is
    /// recorded in the session as a verification failure.
    pub async fn execute(&self, form: &PhoneForm) -> Result<bool, OperationError> {
        form.validate()?;

        let remaining = self.countdown.remaining();
        if remaining > 0 {
            warn!(remaining, "otp requested before resend cooldown elapsed");
            return Err(OperationError::ResendNotReady { remaining });
        }

        info!("requesting phone verification");
        let phone = form.phone.clone();
        let session = self.session.clone();
        let accepted = run_operation(
            &self.session,
            "verify_phone",
            self.auth.verify_phone(&form.phone),
            move |accepted: &bool| {
                if !*accepted {
                    return Some(SessionAction::Fail {
                        message: AuthError::PhoneVerificationFailed.to_string(),
                    });
                }
                session
                    .current_user()
                    .map(|user| SessionAction::Succeed {
                        user: user.with_phone(phone),
                    })
            },
        )
        .await?;

        if accepted {
            info!("verification code sent");
        } else {
            warn!("phone verification declined by backend");
        }
        Ok(accepted)
    }
}
