use crate::constants::{
    COMPLETIONS_API_URL, DEFAULT_TIMEOUT_SECS, ENV_API_KEY, ENV_API_URL, ENV_TIMEOUT_SECS,
};
use std::{env, error::Error, fmt, time::Duration};

#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub api_url: String,
    pub timeout: Duration,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn Error>> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key/value source. Unset keys fall back to
    /// defaults, except the API key which is required.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = match lookup(ENV_API_KEY) {
            Some(key) if !key.trim().is_empty() => key.trim().to_string(),
            _ => return Err(format!("{} is not set", ENV_API_KEY).into()),
        };

        let api_url = lookup(ENV_API_URL)
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| COMPLETIONS_API_URL.to_string());

        let timeout_value = lookup(ENV_TIMEOUT_SECS).filter(|value| !value.trim().is_empty());
        let timeout_secs = match timeout_value {
            Some(value) => value.trim().parse::<u64>().map_err(|e| {
                format!("Invalid {} value '{}': {}", ENV_TIMEOUT_SECS, value, e)
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        if timeout_secs == 0 {
            return Err(format!("{} must be greater than zero", ENV_TIMEOUT_SECS).into());
        }

        Ok(Config {
            api_key,
            api_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}
