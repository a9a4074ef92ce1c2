use anyhow::Context;

pub const DEFAULT_APP_NAME: &str = "Unknown App";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub app_name: String,
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup so tests don't have to
    /// touch the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        Ok(Self {
            database_url: lookup("CONNECTION_STRING").context("CONNECTION_STRING must be set")?,
            app_name: lookup("APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.to_string()),
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: lookup("PORT")
                .unwrap_or_else(|| "5000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            max_connections: lookup("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|| "10".to_string())
                .parse()
                .context("DB_MAX_CONNECTIONS must be a valid number")?,
        })
    }
}
