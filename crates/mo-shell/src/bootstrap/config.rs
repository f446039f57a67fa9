//! # Configuration Loader / 配置加载器
//!
//! Reads the TOML file and maps it onto the [`AppConfig`] DTO. Defaults for
//! missing keys live in the DTO, not here.

use anyhow::Context;
use mo_core::config::AppConfig;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "onboarding.toml";
const APP_DIR_NAME: &str = "merchant-onboarding";

/// Where the configuration came from.
///
/// Kept so the source can be logged once tracing is up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    /// No file at `path`; built-in defaults are in use.
    Defaults { path: PathBuf },
}

impl ConfigSource {
    pub fn log(&self) {
        match self {
            ConfigSource::File(path) => {
                tracing::info!(path = %path.display(), "configuration loaded");
            }
            ConfigSource::Defaults { path } => {
                tracing::warn!(path = %path.display(), "config file not found, using defaults");
            }
        }
    }
}

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// # Errors / 错误
///
/// Returns error if:
/// - File cannot be read (I/O error)
/// - Content is not valid TOML (parse error)
/// - A value cannot be mapped (e.g. unknown location permission)
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
        .with_context(|| format!("Invalid config file: {}", config_path.display()))
}

/// Like [`load_config`], but a missing file yields the defaults.
pub fn load_config_or_default(config_path: PathBuf) -> anyhow::Result<(AppConfig, ConfigSource)> {
    if !config_path.exists() {
        return Ok((
            AppConfig::default(),
            ConfigSource::Defaults { path: config_path },
        ));
    }
    let config = load_config(config_path.clone())?;
    Ok((config, ConfigSource::File(config_path)))
}

/// The explicit path if one was given, otherwise the default location.
pub fn resolve_config_path(explicit: Option<PathBuf>) -> PathBuf {
    explicit
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| default_config_path(dirs::config_dir().as_deref()))
}

/// `<config dir>/merchant-onboarding/onboarding.toml`, or `onboarding.toml`
/// in the working directory when the platform has no config dir.
fn default_config_path(config_dir: Option<&Path>) -> PathBuf {
    match config_dir {
        Some(dir) => dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME),
        None => PathBuf::from(CONFIG_FILE_NAME),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mo_core::location::LocationPermission;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(content.as_bytes()).unwrap();
        temp_file
    }

    /// Test that valid TOML is parsed correctly
    /// 测试有效 TOML 被正确解析
    #[test]
    fn test_load_config_reads_valid_toml() {
        let temp_file = write_config(
            r#"
            [otp]
            resend_cooldown_secs = 10

            [auth]
            simulate_failure = true

            [location]
            permission = "undetermined"
            "#,
        );

        let config = load_config(temp_file.path().to_path_buf()).unwrap();

        assert_eq!(config.otp.resend_cooldown_secs, 10);
        assert_eq!(config.otp.tick_millis, 1000);
        assert!(config.auth.simulate_failure);
        assert_eq!(config.location.permission, LocationPermission::Undetermined);
    }

    #[test]
    fn test_load_config_returns_error_for_invalid_toml() {
        let temp_file = write_config("this is not [valid toml");

        let err = load_config(temp_file.path().to_path_buf()).unwrap_err();

        assert!(err.to_string().contains("Failed to parse config as TOML"));
    }

    #[test]
    fn test_load_config_returns_error_for_missing_file() {
        let err = load_config(PathBuf::from("/nonexistent/onboarding.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_or_default_falls_back_when_missing() {
        let path = PathBuf::from("/nonexistent/onboarding.toml");

        let (config, source) = load_config_or_default(path.clone()).unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(source, ConfigSource::Defaults { path });
    }

    #[test]
    fn test_load_config_or_default_still_rejects_bad_values() {
        let temp_file = write_config("[location]\npermission = \"sometimes\"");
        assert!(load_config_or_default(temp_file.path().to_path_buf()).is_err());
    }

    #[test]
    fn test_explicit_config_path_wins() {
        assert_eq!(
            resolve_config_path(Some(PathBuf::from("cli.toml"))),
            PathBuf::from("cli.toml")
        );
    }

    #[test]
    fn test_empty_config_path_falls_back_to_default() {
        let path = resolve_config_path(Some(PathBuf::new()));
        assert!(path.ends_with(CONFIG_FILE_NAME));
    }

    #[test]
    fn test_default_config_path_uses_config_dir() {
        assert_eq!(
            default_config_path(Some(Path::new("/home/u/.config"))),
            PathBuf::from("/home/u/.config/merchant-onboarding/onboarding.toml")
        );
        assert_eq!(default_config_path(None), PathBuf::from("onboarding.toml"));
    }
}
