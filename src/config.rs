//! Runtime configuration from environment variables

use std::env;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Path of the dataset document
pub const DATA_PATH_VAR: &str = "CONTROL_MAP_DATA_PATH";

/// Address the HTTP server binds to
pub const BIND_VAR: &str = "CONTROL_MAP_BIND";

const DEFAULT_DATA_PATH: &str = "data/knowledge_base.json";
const DEFAULT_BIND: &str = "127.0.0.1:3030";

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Absolute path of the dataset document
    pub data_path: PathBuf,
    pub bind_address: SocketAddr,
}

impl Config {
    /// Read configuration from the environment
    pub fn from_env() -> Result<Self, ConfigError> {
        let current_dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::from_values(
            &current_dir,
            env::var(DATA_PATH_VAR).ok(),
            env::var(BIND_VAR).ok(),
        )
    }

    /// Build configuration from raw values, resolving relative paths against `base_dir`
    pub fn from_values(
        base_dir: &Path,
        data_path: Option<String>,
        bind: Option<String>,
    ) -> Result<Self, ConfigError> {
        let data_path = data_path
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATA_PATH.to_string());
        let data_path = if Path::new(&data_path).is_absolute() {
            PathBuf::from(data_path)
        } else {
            base_dir.join(data_path)
        };

        let bind = bind
            .filter(|b| !b.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind_address = bind
            .trim()
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddress {
                value: bind.clone(),
                source,
            })?;

        Ok(Self {
            data_path,
            bind_address,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_values(Path::new("/srv/app"), None, None).unwrap();
        assert_eq!(
            config.data_path,
            PathBuf::from("/srv/app/data/knowledge_base.json")
        );
        assert_eq!(config.bind_address, "127.0.0.1:3030".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn test_absolute_data_path_is_kept() {
        let config = Config::from_values(
            Path::new("/srv/app"),
            Some("/var/lib/kb.json".to_string()),
            Some("0.0.0.0:8080".to_string()),
        )
        .unwrap();
        assert_eq!(config.data_path, PathBuf::from("/var/lib/kb.json"));
        assert_eq!(config.bind_address.port(), 8080);
    }

    #[test]
    fn test_relative_data_path_is_resolved() {
        let config =
            Config::from_values(Path::new("/srv/app"), Some("kb.json".to_string()), None).unwrap();
        assert_eq!(config.data_path, PathBuf::from("/srv/app/kb.json"));
    }

    #[test]
    fn test_invalid_bind_address() {
        let err = Config::from_values(Path::new("."), None, Some("localhost".to_string()));
        assert!(matches!(err, Err(ConfigError::InvalidBindAddress { .. })));
    }
}
