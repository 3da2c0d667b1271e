//! # Console Configuration
//!
//! Configuration is read from environment variables with fallback to
//! defaults, then command-line flags override individual fields.
//!
//! ## Sources (Priority Order)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Command-line flags      --seed 42 --hotel-name "..."               │
//! │  2. Environment variables   BARATIE_ROOM_SEED=42                       │
//! │  3. Defaults (this file)    Hotel Baratie, admin/admin123              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! | Variable                 | Default         |
//! |--------------------------|-----------------|
//! | `BARATIE_HOTEL_NAME`     | `Hotel Baratie` |
//! | `BARATIE_ADMIN_USERNAME` | `admin`         |
//! | `BARATIE_ADMIN_PASSWORD` | `admin123`      |
//! | `BARATIE_ROOM_SEED`      | unset (entropy) |
//! | `BARATIE_LOG`            | `warn`          |

use std::env;

use baratie_core::{Credentials, DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_USERNAME};

pub const DEFAULT_HOTEL_NAME: &str = "Hotel Baratie";
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Front-desk console configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeskConfig {
    /// Shown in the welcome banner.
    pub hotel_name: String,

    pub admin_username: String,
    pub admin_password: String,

    /// Fixed seed for room allocation; `None` seeds from OS entropy.
    pub room_seed: Option<u64>,

    /// `tracing` env-filter directive.
    pub log_filter: String,
}

impl Default for DeskConfig {
    fn default() -> Self {
        DeskConfig {
            hotel_name: DEFAULT_HOTEL_NAME.to_string(),
            admin_username: DEFAULT_ADMIN_USERNAME.to_string(),
            admin_password: DEFAULT_ADMIN_PASSWORD.to_string(),
            room_seed: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl DeskConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup (the environment in
    /// production, a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = DeskConfig::default();

        let room_seed = match lookup("BARATIE_ROOM_SEED") {
            Some(raw) => Some(
                raw.trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("BARATIE_ROOM_SEED".to_string()))?,
            ),
            None => None,
        };

        let config = DeskConfig {
            hotel_name: lookup("BARATIE_HOTEL_NAME").unwrap_or(defaults.hotel_name),
            admin_username: lookup("BARATIE_ADMIN_USERNAME").unwrap_or(defaults.admin_username),
            admin_password: lookup("BARATIE_ADMIN_PASSWORD").unwrap_or(defaults.admin_password),
            room_seed,
            log_filter: lookup("BARATIE_LOG").unwrap_or(defaults.log_filter),
        };

        if config.admin_username.trim().is_empty() {
            return Err(ConfigError::MissingRequired("BARATIE_ADMIN_USERNAME".to_string()));
        }
        if config.admin_password.is_empty() {
            return Err(ConfigError::MissingRequired("BARATIE_ADMIN_PASSWORD".to_string()));
        }

        Ok(config)
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(&self.admin_username, &self.admin_password)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = DeskConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, DeskConfig::default());
        assert_eq!(config.hotel_name, "Hotel Baratie");
        assert_eq!(config.credentials(), Credentials::new("admin", "admin123"));
        assert_eq!(config.room_seed, None);
    }

    #[test]
    fn test_env_overrides() {
        let config = DeskConfig::from_lookup(lookup_from(&[
            ("BARATIE_HOTEL_NAME", "Going Merry Inn"),
            ("BARATIE_ADMIN_USERNAME", "zeff"),
            ("BARATIE_ADMIN_PASSWORD", "redfoot"),
            ("BARATIE_ROOM_SEED", " 42 "),
            ("BARATIE_LOG", "debug"),
        ]))
        .unwrap();

        assert_eq!(config.hotel_name, "Going Merry Inn");
        assert_eq!(config.admin_username, "zeff");
        assert_eq!(config.room_seed, Some(42));
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_invalid_seed() {
        let err = DeskConfig::from_lookup(lookup_from(&[("BARATIE_ROOM_SEED", "many")]))
            .unwrap_err();
        assert_eq!(err, ConfigError::InvalidValue("BARATIE_ROOM_SEED".to_string()));
    }

    #[test]
    fn test_empty_credentials_rejected() {
        let err = DeskConfig::from_lookup(lookup_from(&[("BARATIE_ADMIN_USERNAME", " ")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingRequired(_)));
    }
}
