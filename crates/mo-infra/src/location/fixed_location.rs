//! Location provider that reports a configured position.

use async_trait::async_trait;
use chrono::Utc;
use mo_core::config::LocationConfig;
use mo_core::location::{GeoPosition, LocationPermission};
use mo_core::ports::{LocationError, LocationPort};
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Stands in for the device location service.
///
/// An undetermined permission is granted on the first request; a denied one
/// stays denied.
pub struct FixedLocationProvider {
    permission: Mutex<LocationPermission>,
    latitude: f64,
    longitude: f64,
}

impl FixedLocationProvider {
    pub fn new(config: &LocationConfig) -> Self {
        Self {
            permission: Mutex::new(config.permission),
            latitude: config.latitude,
            longitude: config.longitude,
        }
    }
}

#[async_trait]
impl LocationPort for FixedLocationProvider {
    async fn permission_status(&self) -> Result<LocationPermission, LocationError> {
        Ok(*self.permission.lock().await)
    }

    async fn request_permission(&self) -> Result<LocationPermission, LocationError> {
        let mut permission = self.permission.lock().await;
        if *permission == LocationPermission::Undetermined {
            *permission = LocationPermission::Granted;
            info!("location permission granted");
        }
        Ok(*permission)
    }

    async fn current_position(&self) -> Result<GeoPosition, LocationError> {
        if !self.permission.lock().await.is_granted() {
            return Err(LocationError::PermissionDenied);
        }
        debug!(
            latitude = self.latitude,
            longitude = self.longitude,
            "reporting fixed position"
        );
        Ok(GeoPosition {
            latitude: self.latitude,
            longitude: self.longitude,
            accuracy_m: None,
            captured_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider(permission: LocationPermission) -> FixedLocationProvider {
        FixedLocationProvider::new(&LocationConfig {
            permission,
            ..LocationConfig::default()
        })
    }

    #[tokio::test]
    async fn granted_provider_reports_configured_position() {
        let position = provider(LocationPermission::Granted)
            .current_position()
            .await
            .unwrap();
        assert_eq!(position.latitude, 19.076);
        assert_eq!(position.longitude, 72.8777);
    }

    #[tokio::test]
    async fn undetermined_is_granted_on_request() {
        let location = provider(LocationPermission::Undetermined);
        assert_eq!(
            location.request_permission().await,
            Ok(LocationPermission::Granted)
        );
        assert!(location.current_position().await.is_ok());
    }

    #[tokio::test]
    async fn denied_stays_denied() {
        let location = provider(LocationPermission::Denied);
        assert_eq!(
            location.request_permission().await,
            Ok(LocationPermission::Denied)
        );
        assert_eq!(
            location.current_position().await,
            Err(LocationError::PermissionDenied)
        );
    }
}
