//! Application configuration

use serde::Deserialize;
use validator::Validate;

use crate::error::AppError;

/// Environment variable prefix, e.g. `FNOL_LOG_LEVEL`
pub const ENV_PREFIX: &str = "FNOL";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
#[serde(default)]
pub struct AppConfig {
    /// Log filter directive used when `RUST_LOG` is unset
    #[validate(length(min = 1))]
    pub log_level: String,
    /// Emit logs as JSON lines
    pub json_logs: bool,
    /// Prefix the fake policy provider puts before a policy id
    #[validate(length(min = 1))]
    pub policy_number_prefix: String,
    /// Actor recorded on claims and submissions made by the demo
    #[validate(length(min = 1))]
    pub default_actor: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
            policy_number_prefix: "PN-".to_string(),
            default_actor: "fnol-demo".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from `FNOL_*` environment variables over the defaults
    pub fn from_env() -> Result<Self, AppError> {
        let config: AppConfig = config::Config::builder()
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.policy_number_prefix, "PN-");
        assert!(!config.json_logs);
    }

    #[test]
    fn test_empty_actor_is_invalid() {
        let config = AppConfig {
            default_actor: String::new(),
            ..AppConfig::default()
        };
        let errors = config.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("default_actor"));
    }
}
