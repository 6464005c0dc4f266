use dotenvy::dotenv;
use serde::Deserialize;
use std::env;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} must be a valid number (got {value:?})")]
    InvalidNumber { key: &'static str, value: String },
}

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub database_min_connections: u32,
    pub database_connect_timeout: u64,
    pub database_idle_timeout: u64,
    pub server_host: String,
    pub server_port: u16,
    pub rust_log: String,
    pub app_env: String,
    pub jwt_secret: String,
    pub jwt_ttl_hours: i64,
    pub redis_url: Option<String>,
    pub upload_dir: String,
    pub public_base_url: String,
    pub max_upload_bytes: usize,
}

const DEV_JWT_SECRET: &str = "dev_secret_change_me";

impl Config {
    pub fn init() -> Result<Self, ConfigError> {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;
        let app_env = var_or("APP_ENV", "dev");

        // Dev runs may fall back to a fixed secret; every other env must provide one.
        let jwt_secret = match env::var("JWT_SECRET") {
            Ok(secret) if !secret.is_empty() => secret,
            _ if app_env == "dev" => DEV_JWT_SECRET.to_string(),
            _ => return Err(ConfigError::Missing("JWT_SECRET")),
        };

        Ok(Self {
            database_url,
            database_max_connections: parsed_or("DATABASE_MAX_CONNECTIONS", 100)?,
            database_min_connections: parsed_or("DATABASE_MIN_CONNECTIONS", 5)?,
            database_connect_timeout: parsed_or("DATABASE_CONNECT_TIMEOUT", 8)?,
            database_idle_timeout: parsed_or("DATABASE_IDLE_TIMEOUT", 8)?,
            server_host: var_or("SERVER_HOST", "127.0.0.1"),
            server_port: parsed_or("SERVER_PORT", 3000)?,
            rust_log: var_or("RUST_LOG", "info"),
            app_env,
            jwt_secret,
            jwt_ttl_hours: parsed_or("JWT_TTL_HOURS", 24)?,
            redis_url: env::var("REDIS_URL").ok().filter(|url| !url.is_empty()),
            upload_dir: var_or("UPLOAD_DIR", "static/assets"),
            public_base_url: var_or("PUBLIC_BASE_URL", "http://127.0.0.1:3000"),
            max_upload_bytes: parsed_or("MAX_UPLOAD_BYTES", 10 * 1024 * 1024)?,
        })
    }

    pub fn is_dev(&self) -> bool {
        self.app_env == "dev"
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parsed_or<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(value) => value
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidNumber { key, value }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parsed_or_falls_back_to_default() {
        let port: u16 = parsed_or("STOREFRONT_TEST_UNSET_PORT", 3000).unwrap();
        assert_eq!(port, 3000);
    }

    #[test]
    fn test_parsed_or_rejects_garbage() {
        env::set_var("STOREFRONT_TEST_BAD_PORT", "not-a-port");
        let result: Result<u16, _> = parsed_or("STOREFRONT_TEST_BAD_PORT", 3000);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidNumber { key: "STOREFRONT_TEST_BAD_PORT", .. })
        ));
    }
}

#[cfg(test)]
pub(crate) fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        database_max_connections: 1,
        database_min_connections: 1,
        database_connect_timeout: 8,
        database_idle_timeout: 8,
        server_host: "localhost".to_string(),
        server_port: 3000,
        rust_log: "info".to_string(),
        app_env: "test".to_string(),
        jwt_secret: "test_secret".to_string(),
        jwt_ttl_hours: 1,
        redis_url: None,
        upload_dir: "static/assets".to_string(),
        public_base_url: "http://localhost:3000".to_string(),
        max_upload_bytes: 1024 * 1024,
    }
}
