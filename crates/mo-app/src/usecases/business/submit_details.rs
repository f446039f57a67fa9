use std::sync::Arc;

use mo_core::location::GeoPosition;
use mo_core::ports::AuthPort;
use mo_core::session::SessionAction;
use mo_core::user::{BusinessDetails, User};
use mo_core::validation::BusinessDetailsForm;
use tracing::{info, warn};

use super::AcquireLocation;
use crate::usecases::session::run_operation;
use crate::usecases::{OperationError, SessionContext};

/// Use case for saving the business profile of the signed-in user.
///
/// The form is normalized and validated, then a position fix is taken before
/// anything is sent. A location failure aborts the submission.
pub struct SubmitBusinessDetails {
    auth: Arc<dyn AuthPort>,
    acquire_location: AcquireLocation,
    session: Arc<SessionContext>,
}

impl SubmitBusinessDetails {
    pub fn new(
        auth: Arc<dyn AuthPort>,
        acquire_location: AcquireLocation,
        session: Arc<SessionContext>,
    ) -> Self {
        Self {
            auth,
            acquire_location,
            session,
        }
    }

    pub async fn execute(&self, form: BusinessDetailsForm) -> Result<User, OperationError> {
        let form = form.normalized();
        if let Err(errors) = form.validate() {
            warn!(failed_fields = errors.len(), "business details validation failed");
            return Err(errors.into());
        }

        let position = self.acquire_location.execute().await?;
        let details = to_business_details(form, position);

        info!(organization = %details.name, "submitting business details");
        let user = run_operation(
            &self.session,
            "update_business_details",
            self.auth.update_business_details(&details),
            |user: &User| Some(SessionAction::Succeed { user: user.clone() }),
        )
        .await?;

        info!(user_id = %user.id, "business details saved");
        Ok(user)
    }
}

fn to_business_details(form: BusinessDetailsForm, position: GeoPosition) -> BusinessDetails {
    BusinessDetails {
        gstin: Some(form.gstin),
        city: Some(form.city),
        state: Some(form.state),
        pincode: Some(form.pincode),
        location: Some(position),
        ..BusinessDetails::new(form.organization_name, form.address)
    }
}
