//! Configuration for stackprobe
//!
//! Settings are read from environment variables with defaults; CLI flags
//! override individual values after loading.
//!
//! # Environment Variables
//!
//! - `STACKPROBE_REQUEST_TIMEOUT`: per-call timeout in seconds - default: "15"
//! - `STACKPROBE_SAMPLE_CAP`: maximum sampled paths per analysis - default: "100"
//! - `STACKPROBE_COOLDOWN_SECS`: per-caller cooldown, 0 disables it - default: "0"
//! - `STACKPROBE_LOG_LEVEL`: logging level - default: "info"
//! - `STACKPROBE_LOG_JSON`: JSON log output (true|false) - default: "false"
//! - `STACKPROBE_USER_AGENT`: User-Agent sent to platform APIs
//!
//! Server-side platform credentials, used when the caller supplies no token:
//! `GITHUB_TOKEN`, `GITLAB_TOKEN`, `BITBUCKET_TOKEN`, `AZURE_DEVOPS_TOKEN`,
//! `CODEBERG_TOKEN`, `GITEA_TOKEN`, `SOURCEHUT_TOKEN`.
//!
//! # Example
//!
//! ```no_run
//! use stackprobe::ProbeConfig;
//!
//! let config = ProbeConfig::default();
//! config.validate().expect("Invalid configuration");
//! ```

use crate::detection::DEFAULT_SAMPLE_CAP;
use crate::platform::Platform;
use crate::remote::transport::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use std::collections::HashMap;
use std::env;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_COOLDOWN_SECS: u64 = 0;
const MAX_TIMEOUT_SECS: u64 = 300;
const MAX_SAMPLE_CAP: usize = 10_000;
const MAX_COOLDOWN_SECS: u64 = 86_400;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

#[derive(Clone)]
pub struct ProbeConfig {
    /// Per-call timeout for platform requests
    pub request_timeout_secs: u64,

    /// Upper bound on paths fed to extension counting
    pub sample_cap: usize,

    /// Minimum seconds between two analyses by one caller; 0 disables
    pub cooldown_secs: u64,

    pub user_agent: String,

    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,

    pub log_json: bool,

    /// Server-side tokens keyed by platform
    pub credentials: HashMap<Platform, String>,
}

fn env_number<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

impl Default for ProbeConfig {
    /// Loads from `STACKPROBE_*` and the platform credential variables
    fn default() -> Self {
        let request_timeout_secs = env_number("STACKPROBE_REQUEST_TIMEOUT", DEFAULT_TIMEOUT_SECS);
        let sample_cap = env_number("STACKPROBE_SAMPLE_CAP", DEFAULT_SAMPLE_CAP);
        let cooldown_secs = env_number("STACKPROBE_COOLDOWN_SECS", DEFAULT_COOLDOWN_SECS);

        let user_agent = env::var("STACKPROBE_USER_AGENT")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());

        let log_level = env::var("STACKPROBE_LOG_LEVEL")
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
            .to_lowercase();

        let log_json = env::var("STACKPROBE_LOG_JSON")
            .ok()
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(false);

        let credentials = Platform::all_variants()
            .iter()
            .filter_map(|platform| {
                env::var(platform.credential_env_var())
                    .ok()
                    .map(|token| token.trim().to_string())
                    .filter(|token| !token.is_empty())
                    .map(|token| (*platform, token))
            })
            .collect();

        Self {
            request_timeout_secs,
            sample_cap,
            cooldown_secs,
            user_agent,
            log_level,
            log_json,
            credentials,
        }
    }
}

impl ProbeConfig {
    /// Checks numeric ranges and the log level
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::ValidationFailed(
                "Request timeout must be at least 1 second".to_string(),
            ));
        }
        if self.request_timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::ValidationFailed(format!(
                "Request timeout cannot exceed {} seconds",
                MAX_TIMEOUT_SECS
            )));
        }

        if self.sample_cap == 0 || self.sample_cap > MAX_SAMPLE_CAP {
            return Err(ConfigError::ValidationFailed(format!(
                "Sample cap must be between 1 and {}",
                MAX_SAMPLE_CAP
            )));
        }

        if self.cooldown_secs > MAX_COOLDOWN_SECS {
            return Err(ConfigError::ValidationFailed(
                "Cooldown cannot exceed one day".to_string(),
            ));
        }

        if self.user_agent.trim().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "User agent must not be empty".to_string(),
            ));
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ConfigError::ValidationFailed(format!(
                    "Invalid log level: {}. Valid options: trace, debug, info, warn, error",
                    self.log_level
                )))
            }
        }

        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn cooldown(&self) -> Duration {
        Duration::from_secs(self.cooldown_secs)
    }

    pub fn credential(&self, platform: Platform) -> Option<&str> {
        self.credentials.get(&platform).map(String::as_str)
    }

    /// Settings for display; credentials are reported as configured or not
    pub fn to_display_map(&self) -> HashMap<String, String> {
        let mut map = HashMap::new();

        map.insert(
            "request_timeout_secs".to_string(),
            self.request_timeout_secs.to_string(),
        );
        map.insert("sample_cap".to_string(), self.sample_cap.to_string());
        map.insert("cooldown_secs".to_string(), self.cooldown_secs.to_string());
        map.insert("user_agent".to_string(), self.user_agent.clone());
        map.insert("log_level".to_string(), self.log_level.clone());
        for platform in Platform::all_variants() {
            map.insert(
                platform.credential_env_var().to_string(),
                self.credentials.contains_key(platform).to_string(),
            );
        }

        map
    }
}

impl fmt::Debug for ProbeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProbeConfig")
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("sample_cap", &self.sample_cap)
            .field("cooldown_secs", &self.cooldown_secs)
            .field("user_agent", &self.user_agent)
            .field("log_level", &self.log_level)
            .field("log_json", &self.log_json)
            .field(
                "credentials",
                &self.credentials.keys().collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl fmt::Display for ProbeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Stackprobe Configuration:")?;
        writeln!(f, "  Request Timeout: {}s", self.request_timeout_secs)?;
        writeln!(f, "  Sample Cap: {}", self.sample_cap)?;
        writeln!(f, "  Cooldown: {}s", self.cooldown_secs)?;
        writeln!(f, "  User Agent: {}", self.user_agent)?;
        writeln!(f, "  Log Level: {}", self.log_level)?;
        for platform in Platform::all_variants() {
            let state = if self.credentials.contains_key(platform) {
                "configured"
            } else {
                "not set"
            };
            writeln!(f, "  {}: {}", platform.credential_env_var(), state)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    /// Helper to temporarily set environment variables for testing
    struct EnvGuard {
        key: String,
        old_value: Option<String>,
    }

    impl EnvGuard {
        fn set(key: &str, value: &str) -> Self {
            let old_value = env::var(key).ok();
            env::set_var(key, value);
            Self {
                key: key.to_string(),
                old_value,
            }
        }

        fn unset(key: &str) -> Self {
            let old_value = env::var(key).ok();
            env::remove_var(key);
            Self {
                key: key.to_string(),
                old_value,
            }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            match &self.old_value {
                Some(v) => env::set_var(&self.key, v),
                None => env::remove_var(&self.key),
            }
        }
    }

    fn valid() -> ProbeConfig {
        ProbeConfig {
            request_timeout_secs: 15,
            sample_cap: 100,
            cooldown_secs: 0,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: "info".to_string(),
            log_json: false,
            credentials: HashMap::new(),
        }
    }

    #[test]
    #[serial]
    fn test_default_configuration() {
        let _guards = vec![
            EnvGuard::unset("STACKPROBE_REQUEST_TIMEOUT"),
            EnvGuard::unset("STACKPROBE_SAMPLE_CAP"),
            EnvGuard::unset("STACKPROBE_COOLDOWN_SECS"),
            EnvGuard::unset("STACKPROBE_LOG_LEVEL"),
        ];

        let config = ProbeConfig::default();

        assert_eq!(config.request_timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.sample_cap, DEFAULT_SAMPLE_CAP);
        assert_eq!(config.cooldown_secs, 0);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_environment_variable_parsing() {
        let _guards = vec![
            EnvGuard::set("STACKPROBE_REQUEST_TIMEOUT", "30"),
            EnvGuard::set("STACKPROBE_SAMPLE_CAP", "250"),
            EnvGuard::set("STACKPROBE_COOLDOWN_SECS", "60"),
            EnvGuard::set("STACKPROBE_LOG_LEVEL", "DEBUG"),
            EnvGuard::set("GITLAB_TOKEN", "  glpat-123  "),
            EnvGuard::set("GITHUB_TOKEN", "   "),
        ];

        let config = ProbeConfig::default();

        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.sample_cap, 250);
        assert_eq!(config.cooldown(), Duration::from_secs(60));
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.credential(Platform::GitLab), Some("glpat-123"));
        assert_eq!(config.credential(Platform::GitHub), None);
    }

    #[test]
    #[serial]
    fn test_unparseable_numbers_fall_back() {
        let _guard = EnvGuard::set("STACKPROBE_SAMPLE_CAP", "lots");
        assert_eq!(ProbeConfig::default().sample_cap, DEFAULT_SAMPLE_CAP);
    }

    #[test]
    fn test_validation_ranges() {
        assert!(valid().validate().is_ok());

        let mut config = valid();
        config.request_timeout_secs = 0;
        assert!(config.validate().is_err());

        let mut config = valid();
        config.sample_cap = 0;
        assert!(config.validate().is_err());

        let mut config = valid();
        config.log_level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_debug_hides_tokens() {
        let mut config = valid();
        config
            .credentials
            .insert(Platform::GitHub, "ghp_secret".to_string());
        assert!(!format!("{:?}", config).contains("ghp_secret"));
        assert!(!format!("{}", config).contains("ghp_secret"));
        assert_eq!(
            config.to_display_map().get("GITHUB_TOKEN").map(String::as_str),
            Some("true")
        );
    }
}
