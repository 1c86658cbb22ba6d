//! Configuration types.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{ConfigError, Result};

/// Default session cookie name.
pub const DEFAULT_SESSION_COOKIE: &str = "bhartee_session";

/// Server configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address to bind the HTTP listener to.
    pub bind: String,
    /// HTTP port.
    pub port: u16,
    /// Sessions idle longer than this are torn down by the sweep task.
    pub session_idle_timeout: Duration,
    /// Interval between idle-session sweeps.
    pub sweep_interval: Duration,
    /// Name of the cookie carrying the session id.
    pub session_cookie: String,
    /// Directory for rolling log files. Logs go to stderr only when unset.
    pub log_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0".to_string(),
            port: 8080,
            session_idle_timeout: Duration::from_secs(3600), // 1 hour
            sweep_interval: Duration::from_secs(60),
            session_cookie: DEFAULT_SESSION_COOKIE.to_string(),
            log_dir: None,
        }
    }
}

impl AppConfig {
    /// Build config from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        Self::load(|key| std::env::var(key).ok())
    }

    fn load<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self::from_lookup(lookup)?)
    }

    /// Build config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> std::result::Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let bind = lookup("BHARTEE_BIND").unwrap_or(defaults.bind);

        let port = match lookup("BHARTEE_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError::InvalidValue {
                key: "BHARTEE_PORT".to_string(),
                message: format!("{raw:?}: {e}"),
            })?,
            None => defaults.port,
        };

        let session_idle_timeout = match lookup("BHARTEE_SESSION_IDLE_SECS") {
            Some(raw) => {
                let secs = raw.trim().parse::<u64>().map_err(|e| ConfigError::InvalidValue {
                    key: "BHARTEE_SESSION_IDLE_SECS".to_string(),
                    message: format!("{raw:?}: {e}"),
                })?;
                Duration::from_secs(secs)
            }
            None => defaults.session_idle_timeout,
        };

        let session_cookie = lookup("BHARTEE_SESSION_COOKIE")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.session_cookie);

        let log_dir = lookup("BHARTEE_LOG_DIR")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            bind,
            port,
            session_idle_timeout,
            sweep_interval: defaults.sweep_interval,
            session_cookie,
            log_dir,
        })
    }

    /// `bind:port` listener address.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}
