//! Application configuration DTO.

use std::path::PathBuf;

use crate::location::LocationPermission;
use crate::otp::DEFAULT_RESEND_COOLDOWN_SECS;

/// Application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub otp: OtpConfig,
    pub auth: AuthConfig,
    pub location: LocationConfig,
    pub logging: LoggingConfig,
}

/// OTP resend cooldown settings.
#[derive(Debug, Clone, PartialEq)]
pub struct OtpConfig {
    /// Number of ticks before a new code may be requested.
    pub resend_cooldown_secs: u32,
    /// Length of one tick in milliseconds.
    pub tick_millis: u64,
}

/// Behaviour of the stub authentication service.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthConfig {
    pub simulated_latency_ms: u64,
    /// Every call fails with the operation's generic message.
    pub simulate_failure: bool,
}

/// Fixed location reported by the stub location provider.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationConfig {
    pub permission: LocationPermission,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Directory for the log file. Empty disables file logging.
    pub log_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            otp: OtpConfig::default(),
            auth: AuthConfig::default(),
            location: LocationConfig::default(),
            logging: LoggingConfig {
                log_dir: PathBuf::new(),
            },
        }
    }
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            resend_cooldown_secs: DEFAULT_RESEND_COOLDOWN_SECS,
            tick_millis: 1000,
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            simulated_latency_ms: 0,
            simulate_failure: false,
        }
    }
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            permission: LocationPermission::Granted,
            latitude: 19.076,
            longitude: 72.8777,
        }
    }
}

impl AppConfig {
    /// Create AppConfig from a parsed TOML value.
    ///
    /// Missing keys fall back to [`AppConfig::default`]; an unknown
    /// `location.permission` value is an error.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let defaults = Self::default();
        let get = |section: &str, key: &str| toml_value.get(section).and_then(|s| s.get(key));

        let permission = match get("location", "permission").and_then(|v| v.as_str()) {
            Some(raw) => raw.parse::<LocationPermission>().map_err(anyhow::Error::msg)?,
            None => defaults.location.permission,
        };

        Ok(Self {
            otp: OtpConfig {
                resend_cooldown_secs: get("otp", "resend_cooldown_secs")
                    .and_then(|v| v.as_integer())
                    .map(|v| v.clamp(0, u32::MAX as i64) as u32)
                    .unwrap_or(defaults.otp.resend_cooldown_secs),
                tick_millis: get("otp", "tick_millis")
                    .and_then(|v| v.as_integer())
                    .map(|v| v.max(1) as u64)
                    .unwrap_or(defaults.otp.tick_millis),
            },
            auth: AuthConfig {
                simulated_latency_ms: get("auth", "simulated_latency_ms")
                    .and_then(|v| v.as_integer())
                    .map(|v| v.max(0) as u64)
                    .unwrap_or(defaults.auth.simulated_latency_ms),
                simulate_failure: get("auth", "simulate_failure")
                    .and_then(|v| v.as_bool())
                    .unwrap_or(defaults.auth.simulate_failure),
            },
            location: LocationConfig {
                permission,
                latitude: get("location", "latitude")
                    .and_then(as_f64)
                    .unwrap_or(defaults.location.latitude),
                longitude: get("location", "longitude")
                    .and_then(as_f64)
                    .unwrap_or(defaults.location.longitude),
            },
            logging: LoggingConfig {
                log_dir: get("logging", "log_dir")
                    .and_then(|v| v.as_str())
                    .map(PathBuf::from)
                    .unwrap_or(defaults.logging.log_dir),
            },
        })
    }
}

// TOML integers are accepted where a float is expected.
fn as_f64(value: &toml::Value) -> Option<f64> {
    value
        .as_float()
        .or_else(|| value.as_integer().map(|i| i as f64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_section() {
        let value: toml::Value = toml::from_str(
            r#"
            [otp]
            resend_cooldown_secs = 45
            tick_millis = 10

            [auth]
            simulated_latency_ms = 250
            simulate_failure = true

            [location]
            permission = "denied"
            latitude = 28
            longitude = 77.2

            [logging]
            log_dir = "/tmp/onboarding-logs"
            "#,
        )
        .unwrap();

        let config = AppConfig::from_toml(&value).unwrap();

        assert_eq!(config.otp.resend_cooldown_secs, 45);
        assert_eq!(config.otp.tick_millis, 10);
        assert_eq!(config.auth.simulated_latency_ms, 250);
        assert!(config.auth.simulate_failure);
        assert_eq!(config.location.permission, LocationPermission::Denied);
        assert_eq!(config.location.latitude, 28.0);
        assert_eq!(config.location.longitude, 77.2);
        assert_eq!(config.logging.log_dir, PathBuf::from("/tmp/onboarding-logs"));
    }

    #[test]
    fn missing_sections_use_defaults() {
        let value: toml::Value = toml::from_str("").unwrap();
        assert_eq!(AppConfig::from_toml(&value).unwrap(), AppConfig::default());
    }

    #[test]
    fn unknown_permission_is_rejected() {
        let value: toml::Value = toml::from_str("[location]\npermission = \"maybe\"").unwrap();
        assert!(AppConfig::from_toml(&value).is_err());
    }
}
