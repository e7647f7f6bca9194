use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5000";
const DEFAULT_ACCESS_TTL_SECS: i64 = 24 * 60 * 60;
const DEFAULT_REFRESH_TTL_SECS: i64 = 30 * 24 * 60 * 60;

/// Credentials for the account created on first start when no admin exists.
#[derive(Clone)]
pub struct BootstrapAdmin {
    pub name: String,
    pub email: String,
    pub password: String,
}

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    pub jwt_secret: String,
    pub access_token_ttl_secs: i64,
    pub refresh_token_ttl_secs: i64,

    pub bootstrap_admin: Option<BootstrapAdmin>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let bootstrap_admin = match (optional_var("ADMIN_EMAIL"), optional_var("ADMIN_PASSWORD")) {
            (Some(email), Some(password)) => Some(BootstrapAdmin {
                name: optional_var("ADMIN_NAME").unwrap_or_else(|| "Administrador".to_string()),
                email,
                password,
            }),
            _ => None,
        };

        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            bind_address: optional_var("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            jwt_secret: required_var("JWT_SECRET")?,
            access_token_ttl_secs: seconds_var("JWT_ACCESS_TTL_SECS", DEFAULT_ACCESS_TTL_SECS)?,
            refresh_token_ttl_secs: seconds_var("JWT_REFRESH_TTL_SECS", DEFAULT_REFRESH_TTL_SECS)?,
            bootstrap_admin,
        })
    }
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

fn seconds_var(name: &str, default: i64) -> Result<i64, ConfigError> {
    match optional_var(name) {
        None => Ok(default),
        Some(value) => match value.parse::<i64>() {
            Ok(secs) if secs > 0 => Ok(secs),
            _ => Err(ConfigError::InvalidEnvVar(name.to_string(), value)),
        },
    }
}
