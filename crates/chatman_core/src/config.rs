//! Runtime configuration for the chat binary.
//!
//! # Responsibility
//! - Resolve data, database and log locations plus the log level.
//!
//! # Invariants
//! - All resolved paths are absolute.
//! - Environment overrides win over platform defaults.

use crate::logging::{default_log_level, normalize_level};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Overrides the data directory (absolute path).
pub const HOME_ENV: &str = "CHATMAN_HOME";
/// Overrides the log level (`trace|debug|info|warn|error`).
pub const LOG_LEVEL_ENV: &str = "CHATMAN_LOG_LEVEL";

const APP_DIR_NAME: &str = "chatman";
const DB_FILE_NAME: &str = "chatman.db";
const LOG_DIR_NAME: &str = "logs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No override and the platform reports no data directory.
    MissingDataDir,
    NonAbsoluteHome(String),
    InvalidLogLevel(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingDataDir => write!(
                f,
                "cannot determine a data directory; set {HOME_ENV} to an absolute path"
            ),
            Self::NonAbsoluteHome(value) => {
                write!(f, "{HOME_ENV} must be an absolute path, got `{value}`")
            }
            Self::InvalidLogLevel(message) => write!(f, "{LOG_LEVEL_ENV}: {message}"),
        }
    }
}

impl Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatConfig {
    pub data_dir: PathBuf,
    pub db_path: PathBuf,
    pub log_dir: PathBuf,
    pub log_level: &'static str,
}

impl ChatConfig {
    /// Resolves configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let home = std::env::var(HOME_ENV).ok();
        let level = std::env::var(LOG_LEVEL_ENV).ok();
        Self::resolve(home.as_deref(), level.as_deref(), dirs::data_dir())
    }

    /// Pure resolution used by [`ChatConfig::from_env`].
    ///
    /// Blank overrides count as unset.
    pub fn resolve(
        home_override: Option<&str>,
        level_override: Option<&str>,
        platform_data_dir: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let data_dir = match home_override.map(str::trim).filter(|v| !v.is_empty()) {
            Some(home) => {
                let path = Path::new(home);
                if !path.is_absolute() {
                    return Err(ConfigError::NonAbsoluteHome(home.to_string()));
                }
                path.to_path_buf()
            }
            None => platform_data_dir
                .filter(|dir| dir.is_absolute())
                .map(|dir| dir.join(APP_DIR_NAME))
                .ok_or(ConfigError::MissingDataDir)?,
        };

        let log_level = match level_override.map(str::trim).filter(|v| !v.is_empty()) {
            Some(level) => normalize_level(level).map_err(ConfigError::InvalidLogLevel)?,
            None => default_log_level(),
        };

        Ok(Self {
            db_path: data_dir.join(DB_FILE_NAME),
            log_dir: data_dir.join(LOG_DIR_NAME),
            data_dir,
            log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{ChatConfig, ConfigError};
    use crate::logging::default_log_level;
    use std::path::PathBuf;

    fn absolute(path: &str) -> PathBuf {
        std::env::temp_dir().join(path)
    }

    #[test]
    fn home_override_wins_over_platform_dir() {
        let home = absolute("chatman-config-home");
        let config = ChatConfig::resolve(
            home.to_str(),
            None,
            Some(absolute("platform-data")),
        )
        .expect("absolute override should resolve");

        assert_eq!(config.data_dir, home);
        assert_eq!(config.db_path, home.join("chatman.db"));
        assert_eq!(config.log_dir, home.join("logs"));
        assert_eq!(config.log_level, default_log_level());
    }

    #[test]
    fn platform_dir_gets_app_subdirectory() {
        let platform = absolute("platform-data");
        let config = ChatConfig::resolve(Some("  "), Some("WARNING"), Some(platform.clone()))
            .expect("platform dir should resolve");

        assert_eq!(config.data_dir, platform.join("chatman"));
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn rejects_relative_home_and_unknown_level() {
        let err = ChatConfig::resolve(Some("relative/dir"), None, None).unwrap_err();
        assert_eq!(err, ConfigError::NonAbsoluteHome("relative/dir".to_string()));

        let err = ChatConfig::resolve(None, Some("verbose"), Some(absolute("x"))).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLogLevel(_)));
    }

    #[test]
    fn missing_platform_dir_is_reported() {
        let err = ChatConfig::resolve(None, None, None).unwrap_err();
        assert_eq!(err, ConfigError::MissingDataDir);
    }
}
