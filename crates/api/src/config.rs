//! Process configuration, read from the environment.

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT {0:?}: expected an integer in 1..=65535")]
    InvalidPort(String),

    #[error("invalid SEED_SAMPLE_DATA {0:?}: expected true/false")]
    InvalidFlag(String),
}

/// Runtime settings for the API binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    /// Start with the four demo items instead of an empty store.
    pub seed_sample_data: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            seed_sample_data: true,
        }
    }
}

impl ApiConfig {
    /// Read `HOST`, `PORT` and `SEED_SAMPLE_DATA`; unset variables fall back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = lookup("HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or(defaults.host);

        let port = match lookup("PORT") {
            Some(raw) => match raw.trim().parse::<u16>() {
                Ok(p) if p > 0 => p,
                _ => return Err(ConfigError::InvalidPort(raw)),
            },
            None => defaults.port,
        };

        let seed_sample_data = match lookup("SEED_SAMPLE_DATA") {
            Some(raw) => parse_flag(&raw).ok_or(ConfigError::InvalidFlag(raw))?,
            None => defaults.seed_sample_data,
        };

        Ok(Self {
            host,
            port,
            seed_sample_data,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
