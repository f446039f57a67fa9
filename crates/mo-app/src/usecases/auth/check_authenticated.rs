use std::sync::Arc;

use mo_core::ports::AuthPort;
use tracing::error;

use crate::usecases::SessionContext;

/// Use case for deciding whether a launch starts signed in.
pub struct CheckAuthenticated {
    auth: Arc<dyn AuthPort>,
    session: Arc<SessionContext>,
}

impl CheckAuthenticated {
    pub fn new(auth: Arc<dyn AuthPort>, session: Arc<SessionContext>) -> Self {
        Self { auth, session }
    }

    /// A user in the session counts as signed in. Otherwise the backend is
    /// asked; a backend failure counts as signed out.
    pub async fn execute(&self) -> bool {
        if self.session.snapshot().is_authenticated() {
            return true;
        }
        self.auth.is_authenticated().await.unwrap_or_else(|err| {
            error!(error = %err, "authentication check failed");
            false
        })
    }
}
