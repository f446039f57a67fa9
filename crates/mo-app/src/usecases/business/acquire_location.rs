use std::sync::Arc;

use mo_core::location::GeoPosition;
use mo_core::ports::{LocationError, LocationPort, Prompt, UiPort};
use tracing::{debug, info, warn};

use crate::usecases::OperationError;

/// Use case for obtaining a one-shot position fix.
///
/// Checks the existing permission first and prompts only when it is not
/// granted. On denial the user is offered the system settings.
pub struct AcquireLocation {
    location: Arc<dyn LocationPort>,
    ui: Arc<dyn UiPort>,
}

impl AcquireLocation {
    pub fn new(location: Arc<dyn LocationPort>, ui: Arc<dyn UiPort>) -> Self {
        Self { location, ui }
    }

    pub async fn execute(&self) -> Result<GeoPosition, OperationError> {
        let mut permission = self.location.permission_status().await?;
        debug!(?permission, "location permission status");

        if !permission.is_granted() {
            permission = self.location.request_permission().await?;
            info!(?permission, "location permission requested");
        }

        if !permission.is_granted() {
            warn!("location permission denied");
            let open = self
                .ui
                .confirm(&Prompt::location_settings())
                .await
                .map_err(OperationError::Ui)?;
            if open {
                self.ui.open_settings().await.map_err(OperationError::Ui)?;
            }
            return Err(LocationError::PermissionDenied.into());
        }

        let position = self.location.current_position().await?;
        info!(
            latitude = position.latitude,
            longitude = position.longitude,
            "location captured"
        );
        Ok(position)
    }
}
