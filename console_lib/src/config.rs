//! Runtime configuration read from the process environment.

use std::time::Duration;

use console_api::types::PrincipalId;
use console_api::DEFAULT_TIMEOUT;
use thiserror::Error;

const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Errors from configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// Build-mode flags exposed to logging and to the application root.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuildMode {
    dev: bool,
    release: bool,
}

impl BuildMode {
    pub fn new(dev: bool, release: bool) -> Self {
        Self { dev, release }
    }

    pub fn development() -> Self {
        Self::new(true, false)
    }

    pub fn release() -> Self {
        Self::new(false, true)
    }

    pub fn is_dev(&self) -> bool {
        self.dev
    }

    pub fn is_release(&self) -> bool {
        self.release
    }
}

/// Settings for one console process.
#[derive(Clone, Debug, PartialEq)]
pub struct ConsoleConfig {
    /// Backend origin, e.g. `http://localhost:8080`.
    pub base_url: String,
    pub mode: BuildMode,
    pub timeout: Duration,
    /// Principal remembered from a previous sign-in, restored at startup.
    pub user_id: Option<PrincipalId>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            mode: BuildMode::default(),
            timeout: DEFAULT_TIMEOUT,
            user_id: None,
        }
    }
}

impl ConsoleConfig {
    /// Reads `CONSOLE_*` variables from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("CONSOLE_BASE_URL") {
            config.base_url = url.trim_end_matches('/').to_string();
        }

        let dev = match lookup("CONSOLE_MODE") {
            Some(mode) => match mode.to_ascii_lowercase().as_str() {
                "dev" | "development" => true,
                "release" | "prod" | "production" => false,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "CONSOLE_MODE",
                        value: mode,
                    })
                }
            },
            None => false,
        };
        let release = match lookup("CONSOLE_RELEASE") {
            Some(value) => parse_bool("CONSOLE_RELEASE", value)?,
            None => false,
        };
        config.mode = BuildMode::new(dev, release);

        if let Some(value) = lookup("CONSOLE_TIMEOUT_MS") {
            let ms = value
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidValue {
                    key: "CONSOLE_TIMEOUT_MS",
                    value: value.clone(),
                })?;
            config.timeout = Duration::from_millis(ms);
        }

        if let Some(value) = lookup("CONSOLE_USER_ID") {
            let id = value
                .parse::<PrincipalId>()
                .map_err(|_| ConfigError::InvalidValue {
                    key: "CONSOLE_USER_ID",
                    value: value.clone(),
                })?;
            config.user_id = Some(id);
        }

        Ok(config)
    }
}

fn parse_bool(key: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidValue { key, value }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ConsoleConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ConsoleConfig::default());
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(!config.mode.is_dev());
    }

    #[test]
    fn reads_all_keys() {
        let config = ConsoleConfig::from_lookup(lookup(&[
            ("CONSOLE_BASE_URL", "https://app.example.com/"),
            ("CONSOLE_MODE", "dev"),
            ("CONSOLE_RELEASE", "true"),
            ("CONSOLE_TIMEOUT_MS", "2500"),
            ("CONSOLE_USER_ID", "200"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "https://app.example.com");
        assert!(config.mode.is_dev());
        assert!(config.mode.is_release());
        assert_eq!(config.timeout, Duration::from_millis(2500));
        assert_eq!(config.user_id, Some(200));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(ConsoleConfig::from_lookup(lookup(&[("CONSOLE_MODE", "staging")])).is_err());
        assert!(ConsoleConfig::from_lookup(lookup(&[("CONSOLE_TIMEOUT_MS", "soon")])).is_err());
        assert!(ConsoleConfig::from_lookup(lookup(&[("CONSOLE_USER_ID", "me")])).is_err());
        assert!(ConsoleConfig::from_lookup(lookup(&[("CONSOLE_RELEASE", "maybe")])).is_err());
    }
}
