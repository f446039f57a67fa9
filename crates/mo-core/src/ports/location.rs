use async_trait::async_trait;
use thiserror::Error;

use crate::location::{GeoPosition, LocationPermission};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("location permission denied")]
    PermissionDenied,

    #[error("location unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait LocationPort: Send + Sync {
    /// Current foreground permission, without prompting.
    async fn permission_status(&self) -> Result<LocationPermission, LocationError>;

    /// Prompts for foreground permission and returns the answer.
    async fn request_permission(&self) -> Result<LocationPermission, LocationError>;

    /// One-shot high accuracy fix.
    async fn current_position(&self) -> Result<GeoPosition, LocationError>;
}
