use std::sync::Arc;

use mo_core::ports::{AuthPort, Registration};
use mo_core::session::SessionAction;
use mo_core::user::User;
use mo_core::validation::RegistrationForm;
use tracing::{info, warn};

use crate::usecases::session::run_operation;
use crate::usecases::{OperationError, SessionContext};

/// Use case for creating an account.
pub struct RegisterUser {
    auth: Arc<dyn AuthPort>,
    session: Arc<SessionContext>,
}

impl RegisterUser {
    pub fn new(auth: Arc<dyn AuthPort>, session: Arc<SessionContext>) -> Self {
        Self { auth, session }
    }

    pub async fn execute(&self, form: &RegistrationForm) -> Result<User, OperationError> {
        if let Err(errors) = form.validate() {
            warn!(failed_fields = errors.len(), "registration form validation failed");
            return Err(errors.into());
        }

        info!(email = %form.email, "registration attempt");
        let registration = Registration::from(form);
        let user = run_operation(
            &self.session,
            "register",
            self.auth.register(&registration),
            |user: &User| Some(SessionAction::Succeed { user: user.clone() }),
        )
        .await?;

        info!(user_id = %user.id, "registration successful");
        Ok(user)
    }
}
