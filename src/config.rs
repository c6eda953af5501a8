use std::time::Duration;

use url::Url;

use crate::{error::ConfigError, utils::env_handler::get_env_var};

const HOST_VAR: &str = "POKEDEX_HOST";
const LOG_LEVEL_VAR: &str = "LOG_LEVEL";
const CATALOG_URL_VAR: &str = "CATALOG_URL";
const FETCH_TIMEOUT_VAR: &str = "FETCH_TIMEOUT_SECS";
const ALLOWED_ORIGIN_VAR: &str = "ALLOWED_ORIGIN";

const DEFAULT_HOST: &str = "127.0.0.1:8080";
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_CATALOG_URL: &str = "https://pokeapi.co/api/v2/";
const DEFAULT_FETCH_TIMEOUT_SECS: &str = "10";
const DEFAULT_ALLOWED_ORIGIN: &str = "http://127.0.0.1:80";

#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub log_level: String,
    pub catalog_url: Url,
    pub fetch_timeout: Duration,
    pub allowed_origin: String,
}

impl Settings {
    /// Settings from the process environment, defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(get_env_var)
    }

    /// Unset variables take their default, and defaults go through the same checks as overrides.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |var: &str, default: &str| lookup(var).unwrap_or_else(|| default.to_owned());

        Ok(Settings {
            host: value(HOST_VAR, DEFAULT_HOST),
            log_level: value(LOG_LEVEL_VAR, DEFAULT_LOG_LEVEL),
            catalog_url: parse_catalog_url(value(CATALOG_URL_VAR, DEFAULT_CATALOG_URL))?,
            fetch_timeout: parse_timeout(value(FETCH_TIMEOUT_VAR, DEFAULT_FETCH_TIMEOUT_SECS))?,
            allowed_origin: value(ALLOWED_ORIGIN_VAR, DEFAULT_ALLOWED_ORIGIN),
        })
    }
}

fn parse_catalog_url(value: String) -> Result<Url, ConfigError> {
    let url = Url::parse(&value).map_err(|source| ConfigError::InvalidUrl {
        var: CATALOG_URL_VAR,
        source,
    })?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::NotABaseUrl {
            var: CATALOG_URL_VAR,
            value,
        });
    }
    Ok(url)
}

fn parse_timeout(value: String) -> Result<Duration, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout {
            var: FETCH_TIMEOUT_VAR,
            value,
        }),
    }
}
