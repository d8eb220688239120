//! Runner configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const ENV_CASES: &str = "WORKSHOP_CHECK_CASES";
pub const ENV_SEED: &str = "WORKSHOP_CHECK_SEED";
pub const ENV_MAX_SHRINK_ITERS: &str = "WORKSHOP_CHECK_MAX_SHRINK_ITERS";
pub const ENV_MAX_REJECTS: &str = "WORKSHOP_CHECK_MAX_REJECTS";

/// Seed used when none is configured; runs are reproducible by default.
pub const DEFAULT_SEED: u64 = 0x5EED_0F_C0FFEE;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },
    #[error("invalid config document: {0}")]
    Document(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of passing cases required.
    pub cases: u32,
    pub seed: u64,
    /// Upper bound on candidate executions while shrinking.
    pub max_shrink_iters: u32,
    /// Rejected cases tolerated before giving up.
    pub max_global_rejects: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cases: 256,
            seed: DEFAULT_SEED,
            max_shrink_iters: 10_000,
            max_global_rejects: 4_096,
        }
    }
}

impl Config {
    pub fn with_cases(cases: u32) -> Self {
        Self {
            cases,
            ..Self::default()
        }
    }

    /// Defaults overridden by the `WORKSHOP_CHECK_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`Config::from_env`] with an explicit variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(raw) = lookup(ENV_CASES) {
            config.cases = parse_u64(ENV_CASES, &raw)?
                .try_into()
                .map_err(|_| invalid(ENV_CASES, &raw))?;
        }
        if let Some(raw) = lookup(ENV_SEED) {
            config.seed = parse_u64(ENV_SEED, &raw)?;
        }
        if let Some(raw) = lookup(ENV_MAX_SHRINK_ITERS) {
            config.max_shrink_iters = parse_u64(ENV_MAX_SHRINK_ITERS, &raw)?
                .try_into()
                .map_err(|_| invalid(ENV_MAX_SHRINK_ITERS, &raw))?;
        }
        if let Some(raw) = lookup(ENV_MAX_REJECTS) {
            config.max_global_rejects = parse_u64(ENV_MAX_REJECTS, &raw)?
                .try_into()
                .map_err(|_| invalid(ENV_MAX_REJECTS, &raw))?;
        }
        Ok(config)
    }

    /// Reads a JSON document; missing fields keep their defaults.
    pub fn from_json(document: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(document)?)
    }
}

fn invalid(key: &'static str, raw: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key,
        value: raw.to_owned(),
    }
}

/// Decimal, or hexadecimal with a `0x` prefix. Underscores are ignored.
fn parse_u64(key: &'static str, raw: &str) -> Result<u64, ConfigError> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != '_').collect();
    let parsed = match cleaned
        .strip_prefix("0x")
        .or_else(|| cleaned.strip_prefix("0X"))
    {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => cleaned.parse::<u64>(),
    };
    parsed.map_err(|_| invalid(key, raw))
}
