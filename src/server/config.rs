use dioxus_logger::tracing::Level;

use crate::server::error::config::ConfigError;

pub static DEFAULT_LISTEN_ADDRESS: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub listen_address: String,
    pub log_level: Level,
    /// Superuser ensured to exist at startup, configured as an email & password pair
    pub superuser: Option<SuperuserConfig>,
}

pub struct SuperuserConfig {
    pub email: String,
    pub password: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup, `from_env` uses the process environment
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required =
            |key: &str| lookup(key).ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()));

        let log_level = match lookup("LOG_LEVEL") {
            Some(level) => level
                .parse::<Level>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "LOG_LEVEL".to_string(),
                    reason: e.to_string(),
                })?,
            None => Level::INFO,
        };

        let superuser = match (lookup("SUPERUSER_EMAIL"), lookup("SUPERUSER_PASSWORD")) {
            (Some(email), Some(password)) => Some(SuperuserConfig { email, password }),
            (None, None) => None,
            (Some(_), None) => {
                return Err(ConfigError::MissingEnvVar("SUPERUSER_PASSWORD".to_string()))
            }
            (None, Some(_)) => {
                return Err(ConfigError::MissingEnvVar("SUPERUSER_EMAIL".to_string()))
            }
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            listen_address: lookup("LISTEN_ADDRESS")
                .unwrap_or_else(|| DEFAULT_LISTEN_ADDRESS.to_string()),
            log_level,
            superuser,
        })
    }
}
