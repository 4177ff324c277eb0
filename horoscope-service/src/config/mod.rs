use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct HoroscopeConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub database: DatabaseSettings,
    pub otlp_endpoint: Option<String>,
}

/// Both values are optional: the service starts without a database and
/// reports the gap on its diagnostic endpoint instead.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatabaseSettings {
    pub url: Option<String>,
    pub name: Option<String>,
}

impl DatabaseSettings {
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            url: non_empty("DATABASE_URL"),
            name: non_empty("DATABASE_NAME"),
        }
    }

    /// `(uri, database)` when both are configured.
    pub fn connection(&self) -> Option<(&str, &str)> {
        match (&self.url, &self.name) {
            (Some(url), Some(name)) => Some((url.as_str(), name.as_str())),
            _ => None,
        }
    }
}

impl HoroscopeConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;

        Ok(HoroscopeConfig {
            common: common_config,
            database: DatabaseSettings::from_lookup(|key| env::var(key).ok()),
            otlp_endpoint: env::var("OTLP_ENDPOINT").ok().filter(|v| !v.is_empty()),
        })
    }
}
