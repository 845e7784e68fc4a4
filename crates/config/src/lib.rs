//! # Config
//!
//! Environment-driven settings for the ordset shell and benches.
//!
//! ```text
//! ORDSET_CAPACITY   page capacity hint        (default: unset -> 1024 pages)
//! ORDSET_BUCKET     initial bucket name       (default: "")
//! ORDSET_LOG        tracing filter directive  (default: "warn")
//! ```

use thiserror::Error;

pub const ENV_CAPACITY: &str = "ORDSET_CAPACITY";
pub const ENV_BUCKET: &str = "ORDSET_BUCKET";
pub const ENV_LOG: &str = "ORDSET_LOG";

pub const DEFAULT_LOG: &str = "warn";

/// Errors produced while reading configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Resolved settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Page capacity hint passed to `OrdSet::with_capacity`. `None` uses the
    /// set's default reserve.
    pub capacity: Option<usize>,
    /// Bucket the shell starts in.
    pub bucket: String,
    /// `tracing_subscriber::EnvFilter` directive.
    pub log: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: None,
            bucket: String::new(),
            log: DEFAULT_LOG.to_string(),
        }
    }
}

impl Config {
    /// Reads settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`, which returns the raw value of a
    /// variable or `None` if it is unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let capacity = match lookup(ENV_CAPACITY) {
            Some(raw) => Some(parse_capacity(&raw)?),
            None => defaults.capacity,
        };
        let bucket = lookup(ENV_BUCKET).unwrap_or(defaults.bucket);
        let log = lookup(ENV_LOG)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.log);

        Ok(Self {
            capacity,
            bucket,
            log,
        })
    }
}

fn parse_capacity(raw: &str) -> Result<usize, ConfigError> {
    let invalid = |reason| ConfigError::InvalidValue {
        key: ENV_CAPACITY,
        value: raw.to_string(),
        reason,
    };
    match raw.trim().parse::<usize>() {
        Ok(0) => Err(invalid("must be greater than zero")),
        Ok(n) => Ok(n),
        Err(_) => Err(invalid("not a positive integer")),
    }
}
