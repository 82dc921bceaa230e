//! Centralized configuration management for commu

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::board::DEFAULT_PAGE_SIZE;
use crate::models::Identity;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Optional fixture file replacing the embedded seed
    pub fixture_path: Option<PathBuf>,
    /// Display name the boards attribute new posts to
    pub user_name: String,
    /// Stable identity marker matched against `owner_id`
    pub user_id: String,
    /// Rows per page on every list screen
    pub page_size: usize,
}

impl Config {
    /// Load configuration from environment variables and defaults
    pub fn from_env() -> Result<Self> {
        let fixture_path = std::env::var("COMMU_FIXTURE_PATH").ok().map(PathBuf::from);

        let user_name = std::env::var("COMMU_USER_NAME").unwrap_or_else(|_| "익명".to_string());
        let user_id = std::env::var("COMMU_USER_ID").unwrap_or_else(|_| "me".to_string());

        let page_size = parse_env_var("COMMU_PAGE_SIZE")?.unwrap_or(DEFAULT_PAGE_SIZE);
        if page_size == 0 {
            anyhow::bail!("COMMU_PAGE_SIZE must be at least 1");
        }

        Ok(Config {
            fixture_path,
            user_name,
            user_id,
            page_size,
        })
    }

    pub fn identity(&self) -> Identity {
        Identity {
            id: self.user_id.clone(),
            name: self.user_name.clone(),
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if let Some(path) = &self.fixture_path {
            if !path.exists() {
                return Err(anyhow::anyhow!(
                    "Fixture file does not exist: {}",
                    path.display()
                ));
            }
        }
        Ok(())
    }
}

/// Helper function to parse environment variable as a specific type
fn parse_env_var<T>(var_name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display + Send + Sync + std::error::Error + 'static,
{
    match std::env::var(var_name) {
        Ok(val) => val.parse().map(Some).with_context(|| {
            format!("Failed to parse environment variable {} = '{}'", var_name, val)
        }),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::from_env().unwrap();
        assert_eq!(config.user_name, "익명");
        assert_eq!(config.user_id, "me");
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert!(config.fixture_path.is_none());
    }

    #[test]
    fn test_config_validation() {
        let config = Config::from_env().unwrap();
        // Should not fail without a fixture path
        config.validate().unwrap();

        let missing = Config {
            fixture_path: Some(PathBuf::from("/definitely/not/here.json")),
            ..config
        };
        assert!(missing.validate().is_err());
    }
}
