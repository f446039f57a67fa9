use std::sync::Arc;

use mo_core::ports::{AuthPort, Credentials};
use mo_core::session::SessionAction;
use mo_core::user::User;
use mo_core::validation::LoginForm;
use tracing::{info, warn};

use crate::usecases::session::run_operation;
use crate::usecases::{OperationError, SessionContext};

/// Use case for signing in with email and password.
pub struct LoginUser {
    auth: Arc<dyn AuthPort>,
    session: Arc<SessionContext>,
}

impl LoginUser {
    pub fn new(auth: Arc<dyn AuthPort>, session: Arc<SessionContext>) -> Self {
        Self { auth, session }
    }

    /// Validates `form`, signs in, and records the user in the session.
    pub async fn execute(&self, form: &LoginForm) -> Result<User, OperationError> {
        if let Err(errors) = form.validate() {
            warn!(failed_fields = errors.len(), "login form validation failed");
            return Err(errors.into());
        }

        info!(email = %form.email, "login attempt");
        let credentials = Credentials::from(form);
        let user = run_operation(
            &self.session,
            "login",
            self.auth.login(&credentials),
            |user: &User| Some(SessionAction::Succeed { user: user.clone() }),
        )
        .await?;

        info!(user_id = %user.id, "login successful");
        Ok(user)
    }
}
