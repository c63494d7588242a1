use std::time::Duration;

use crate::server::error::config::ConfigError;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_PUSH_TIMEOUT_SECS: u64 = 5;
const DEFAULT_USER_SERVICE_TIMEOUT_SECS: u64 = 30;

/// Credentials for the account created when no admin user exists yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuperAdmin {
    pub login: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,

    pub push_service_url: String,
    pub push_timeout: Duration,

    pub user_service_url: String,
    pub user_service_timeout: Duration,

    pub super_admin: Option<SuperAdmin>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |name: &str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };
        let seconds = |name: &str, default: u64| match lookup(name) {
            None => Ok(Duration::from_secs(default)),
            Some(value) => value
                .trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: name.to_string(),
                    value,
                }),
        };

        let super_admin = match (lookup("SUPER_ADMIN_LOGIN"), lookup("SUPER_ADMIN_PASSWORD")) {
            (Some(login), Some(password)) => Some(SuperAdmin { login, password }),
            _ => None,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            listen_addr: lookup("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string()),
            push_service_url: required("PUSH_SERVICE_URL")?,
            push_timeout: seconds("PUSH_TIMEOUT_SECS", DEFAULT_PUSH_TIMEOUT_SECS)?,
            user_service_url: required("USER_SERVICE_URL")?,
            user_service_timeout: seconds(
                "USER_SERVICE_TIMEOUT_SECS",
                DEFAULT_USER_SERVICE_TIMEOUT_SECS,
            )?,
            super_admin,
        })
    }
}
