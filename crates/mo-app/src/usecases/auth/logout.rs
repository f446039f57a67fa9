use std::sync::Arc;

use mo_core::ports::AuthPort;
use mo_core::session::SessionAction;
use tracing::{error, info};

use crate::usecases::{OperationError, SessionContext};

/// Use case for signing out.
///
/// Does not raise the loading flag; a failure is still recorded as the last
/// error.
pub struct LogoutUser {
    auth: Arc<dyn AuthPort>,
    session: Arc<SessionContext>,
}

impl LogoutUser {
    pub fn new(auth: Arc<dyn AuthPort>, session: Arc<SessionContext>) -> Self {
        Self { auth, session }
    }

    pub async fn execute(&self) -> Result<(), OperationError> {
        info!("logout process started");
        match self.auth.logout().await {
            Ok(()) => {
                self.session.apply(SessionAction::SignOut).await;
                info!("logout successful");
                Ok(())
            }
            Err(err) => {
                error!(error = %err, "logout failed");
                self.session
                    .apply(SessionAction::Fail {
                        message: err.to_string(),
                    })
                    .await;
                Err(err.into())
            }
        }
    }
}
