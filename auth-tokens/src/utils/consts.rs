pub mod env {
    pub const ACCESS_TOKEN_KEY_ENV_VAR: &str = "ACCESS_TOKEN_KEY";
    pub const REFRESH_TOKEN_KEY_ENV_VAR: &str = "REFRESH_TOKEN_KEY";
    pub const ACCESS_TTL_SECONDS_ENV_VAR: &str = "ACCESS_TTL_SECONDS";
    pub const REFRESH_TTL_SECONDS_ENV_VAR: &str = "REFRESH_TTL_SECONDS";
    pub const DATABASE_URL_ENV_VAR: &str = "DATABASE_URL";
    pub const REDIS_HOST_ENV_VAR: &str = "REDIS_HOST";
    pub const REDIS_DATABASE_ENV_VAR: &str = "REDIS_DATABASE";
    pub const APP_ADDRESS_ENV_VAR: &str = "APP_ADDRESS";
    pub const STORE_TIMEOUT_MS_ENV_VAR: &str = "STORE_TIMEOUT_MS";
    pub const APP_ENV_ENV_VAR: &str = "APP_ENV";
    pub const APP_VERSION_ENV_VAR: &str = "APP_VERSION";
    pub const APP_REGION_ENV_VAR: &str = "APP_REGION";
}

// 15 minutes
pub const DEFAULT_ACCESS_TTL_SECONDS: i64 = 15 * 60;
// 7 days
pub const DEFAULT_REFRESH_TTL_SECONDS: i64 = 7 * 24 * 60 * 60;
pub const DEFAULT_STORE_TIMEOUT_MS: u64 = 2_000;
pub const DEFAULT_DATABASE_URL: &str = "sqlite://auth.db?mode=rwc";
pub const DEFAULT_REDIS_HOST: &str = "127.0.0.1:6379";
pub const DEFAULT_APP_ADDRESS: &str = "0.0.0.0:3000";

pub const BEARER_PREFIX: &str = "Bearer ";

pub const REVOKED_TOKEN_KEY_PREFIX: &str = "revoked_token:";
