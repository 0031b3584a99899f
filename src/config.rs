use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: '{value}'")]
    Invalid { var: &'static str, value: String },
}

/// Settings for the external board game collection lookup
#[derive(Debug, Clone)]
pub struct CatalogSettings {
    pub base_url: String,
    pub user_agent: String,
    pub retry_delay: Duration,
    pub max_attempts: u32,
    pub request_timeout: Duration,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            base_url: "https://boardgamegeek.com/xmlapi2".to_string(),
            user_agent: concat!("scoreboard/", env!("CARGO_PKG_VERSION")).to_string(),
            retry_delay: Duration::from_secs(5),
            max_attempts: 12,
            request_timeout: Duration::from_secs(5),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    /// PostgreSQL connection string; the in-memory store is used when unset
    pub database_url: Option<String>,
    pub catalog: CatalogSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            database_url: None,
            catalog: CatalogSettings::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the config from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let present = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());

        if let Some(addr) = present("SCOREBOARD_BIND_ADDR") {
            config.bind_addr = addr;
        }
        config.database_url = present("DATABASE_URL");

        if let Some(url) = present("BGG_API_BASE_URL") {
            config.catalog.base_url = url;
        }
        if let Some(value) = present("BGG_RETRY_DELAY_SECS") {
            config.catalog.retry_delay = Duration::from_secs(parse("BGG_RETRY_DELAY_SECS", &value)?);
        }
        if let Some(value) = present("BGG_MAX_ATTEMPTS") {
            let attempts: u32 = parse("BGG_MAX_ATTEMPTS", &value)?;
            if attempts == 0 {
                return Err(ConfigError::Invalid {
                    var: "BGG_MAX_ATTEMPTS",
                    value,
                });
            }
            config.catalog.max_attempts = attempts;
        }
        if let Some(value) = present("BGG_REQUEST_TIMEOUT_SECS") {
            config.catalog.request_timeout =
                Duration::from_secs(parse("BGG_REQUEST_TIMEOUT_SECS", &value)?);
        }

        Ok(config)
    }
}

fn parse<T: std::str::FromStr>(var: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        var,
        value: value.to_string(),
    })
}
