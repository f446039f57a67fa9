//! Device location facts captured during business onboarding.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Foreground location permission as reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationPermission {
    Granted,
    Denied,
    /// The user has not been asked yet.
    Undetermined,
}

impl LocationPermission {
    pub fn is_granted(&self) -> bool {
        matches!(self, LocationPermission::Granted)
    }
}

impl std::str::FromStr for LocationPermission {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "granted" => Ok(LocationPermission::Granted),
            "denied" => Ok(LocationPermission::Denied),
            "undetermined" | "prompt" => Ok(LocationPermission::Undetermined),
            other => Err(format!("unknown location permission: {other}")),
        }
    }
}

/// A one-shot position fix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPosition {
    pub latitude: f64,
    pub longitude: f64,
    /// Horizontal accuracy in metres, when the provider reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy_m: Option<f64>,
    pub captured_at: DateTime<Utc>,
}
