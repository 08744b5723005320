use anyhow::Context;

/// Process configuration, read once at startup.
///
/// The storage connection string is the only required setting; bind address
/// and log options are read straight from the environment with defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL is not set")?;
        Ok(Self { database_url })
    }
}
