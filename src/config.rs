use secrecy::{ExposeSecret, Secret};
use sqlx::postgres::PgConnectOptions;

pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;
pub const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub pool: PoolConfig,
}

/// Connection settings for the friends database
#[derive(Debug, Clone)]
pub struct PoolConfig {
    pub host: String,
    pub database: String,
    pub port: u16,
    pub user: String,
    pub password: Secret<String>,
    pub max_connections: u32,
    /// Upper bound on waiting for a free connection, including connect retries
    pub acquire_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, config::ConfigError> {
        // Load .env file if it exists (for local development)
        let _ = dotenvy::dotenv();

        let config = config::Config::builder()
            .add_source(config::Environment::with_prefix("DB"))
            .build()?;

        Ok(Self {
            pool: PoolConfig::from_config(&config)?,
        })
    }
}

impl PoolConfig {
    pub(crate) fn from_config(config: &config::Config) -> Result<Self, config::ConfigError> {
        Ok(Self {
            host: config.get("host")?,
            database: config.get("database")?,
            port: config.get("port")?,
            user: config.get("user")?,
            password: Secret::new(config.get("password")?),
            max_connections: get_or(config, "max_connections", DEFAULT_MAX_CONNECTIONS)?,
            acquire_timeout_secs: get_or(
                config,
                "acquire_timeout_secs",
                DEFAULT_ACQUIRE_TIMEOUT_SECS,
            )?,
        })
    }

    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.database)
            .username(&self.user)
            .password(self.password.expose_secret())
    }
}

/// Reads an optional key. Only a missing key falls back to `default`;
/// a value that does not parse is an error.
fn get_or<T>(config: &config::Config, key: &str, default: T) -> Result<T, config::ConfigError>
where
    T: serde::de::DeserializeOwned,
{
    match config.get(key) {
        Ok(value) => Ok(value),
        Err(config::ConfigError::NotFound(_)) => Ok(default),
        Err(e) => Err(e),
    }
}
