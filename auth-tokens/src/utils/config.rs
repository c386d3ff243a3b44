use std::env;
use std::time::Duration;

use dotenvy::dotenv;
use thiserror::Error;

use super::consts::{self, env as vars};

#[derive(Clone, Debug)]
pub struct Config {
    access_token_key: String,
    refresh_token_key: String,
    access_ttl_seconds: i64,
    refresh_ttl_seconds: i64,
    database_url: String,
    redis_host: String,
    redis_database: i64,
    app_address: String,
    store_timeout: Duration,
    app_env: String,
    app_version: String,
    app_region: String,
}

impl Config {
    /// Config with the given signing secrets and defaults for everything else.
    pub fn new(access_token_key: impl Into<String>, refresh_token_key: impl Into<String>) -> Self {
        Self {
            access_token_key: access_token_key.into(),
            refresh_token_key: refresh_token_key.into(),
            access_ttl_seconds: consts::DEFAULT_ACCESS_TTL_SECONDS,
            refresh_ttl_seconds: consts::DEFAULT_REFRESH_TTL_SECONDS,
            database_url: consts::DEFAULT_DATABASE_URL.to_owned(),
            redis_host: consts::DEFAULT_REDIS_HOST.to_owned(),
            redis_database: 0,
            app_address: consts::DEFAULT_APP_ADDRESS.to_owned(),
            store_timeout: Duration::from_millis(consts::DEFAULT_STORE_TIMEOUT_MS),
            app_env: "development".to_owned(),
            app_version: String::new(),
            app_region: String::new(),
        }
    }

    pub fn with_access_ttl_seconds(mut self, secs: i64) -> Self {
        self.access_ttl_seconds = secs;
        self
    }

    pub fn with_refresh_ttl_seconds(mut self, secs: i64) -> Self {
        self.refresh_ttl_seconds = secs;
        self
    }

    pub fn with_store_timeout(mut self, timeout: Duration) -> Self {
        self.store_timeout = timeout;
        self
    }

    pub fn with_database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = url.into();
        self
    }

    pub fn with_redis_host(mut self, host: impl Into<String>) -> Self {
        self.redis_host = host.into();
        self
    }

    pub fn access_token_key(&self) -> &str {
        &self.access_token_key
    }
    pub fn refresh_token_key(&self) -> &str {
        &self.refresh_token_key
    }
    pub fn access_ttl_seconds(&self) -> i64 {
        self.access_ttl_seconds
    }
    pub fn refresh_ttl_seconds(&self) -> i64 {
        self.refresh_ttl_seconds
    }
    pub fn database_url(&self) -> &str {
        &self.database_url
    }
    pub fn redis_host(&self) -> &str {
        &self.redis_host
    }
    pub fn redis_database(&self) -> i64 {
        self.redis_database
    }
    pub fn app_address(&self) -> &str {
        &self.app_address
    }
    pub fn store_timeout(&self) -> Duration {
        self.store_timeout
    }
    pub fn is_production(&self) -> bool {
        self.app_env == "production"
    }
    pub fn app_version(&self) -> &str {
        &self.app_version
    }
    pub fn app_region(&self) -> &str {
        &self.app_region
    }

    /// Load from the process environment (and `.env` when present).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env in dev; no-op in prod if not present.
        let _ = dotenv();

        let access_token_key = req_secret(vars::ACCESS_TOKEN_KEY_ENV_VAR)?;
        let refresh_token_key = req_secret(vars::REFRESH_TOKEN_KEY_ENV_VAR)?;
        if access_token_key == refresh_token_key {
            return Err(ConfigError::Invalid(
                "ACCESS_TOKEN_KEY and REFRESH_TOKEN_KEY must differ",
            ));
        }

        let access_ttl_seconds = parse_i64_or(
            vars::ACCESS_TTL_SECONDS_ENV_VAR,
            consts::DEFAULT_ACCESS_TTL_SECONDS,
        )?;
        let refresh_ttl_seconds = parse_i64_or(
            vars::REFRESH_TTL_SECONDS_ENV_VAR,
            consts::DEFAULT_REFRESH_TTL_SECONDS,
        )?;
        if access_ttl_seconds <= 0 {
            return Err(ConfigError::Invalid(vars::ACCESS_TTL_SECONDS_ENV_VAR));
        }
        if refresh_ttl_seconds <= 0 {
            return Err(ConfigError::Invalid(vars::REFRESH_TTL_SECONDS_ENV_VAR));
        }

        let store_timeout_ms = parse_i64_or(
            vars::STORE_TIMEOUT_MS_ENV_VAR,
            consts::DEFAULT_STORE_TIMEOUT_MS as i64,
        )?;
        let store_timeout_ms = u64::try_from(store_timeout_ms)
            .map_err(|_| ConfigError::Invalid(vars::STORE_TIMEOUT_MS_ENV_VAR))?;

        Ok(Self {
            access_token_key,
            refresh_token_key,
            access_ttl_seconds,
            refresh_ttl_seconds,
            database_url: opt_var(vars::DATABASE_URL_ENV_VAR)
                .unwrap_or_else(|| consts::DEFAULT_DATABASE_URL.into()),
            redis_host: opt_var(vars::REDIS_HOST_ENV_VAR)
                .unwrap_or_else(|| consts::DEFAULT_REDIS_HOST.into()),
            redis_database: parse_i64_or(vars::REDIS_DATABASE_ENV_VAR, 0)?,
            app_address: opt_var(vars::APP_ADDRESS_ENV_VAR)
                .unwrap_or_else(|| consts::DEFAULT_APP_ADDRESS.into()),
            store_timeout: Duration::from_millis(store_timeout_ms),
            app_env: opt_var(vars::APP_ENV_ENV_VAR).unwrap_or_else(|| "development".into()),
            app_version: opt_var(vars::APP_VERSION_ENV_VAR).unwrap_or_default(),
            app_region: opt_var(vars::APP_REGION_ENV_VAR).unwrap_or_default(),
        })
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("missing env var {0}")]
    Missing(&'static str),
    #[error("invalid env var {0}")]
    Invalid(&'static str),
    #[error("env var {0} must not be empty")]
    Empty(&'static str),
}

fn req_var(key: &'static str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::Missing(key))
}

fn req_secret(key: &'static str) -> Result<String, ConfigError> {
    let v = req_var(key)?;
    if v.trim().is_empty() {
        return Err(ConfigError::Empty(key));
    }
    Ok(v)
}

fn opt_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_i64_or(key: &'static str, default: i64) -> Result<i64, ConfigError> {
    match opt_var(key) {
        Some(v) => v.trim().parse::<i64>().map_err(|_| ConfigError::Invalid(key)),
        None => Ok(default),
    }
}
