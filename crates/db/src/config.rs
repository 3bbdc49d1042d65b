use std::str::FromStr;
use std::time::Duration;

use sqlx::postgres::PgConnectOptions;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Database connection settings loaded from the environment.
///
/// `DATABASE_URL` wins when present; otherwise the connection is assembled
/// from the individual `DB_*` variables.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
    pub max_connections: u32,
    pub idle_timeout: Duration,
    /// How long a query waits for a free connection. Kept below the HTTP
    /// request timeout so an exhausted pool surfaces as a store error.
    pub acquire_timeout: Duration,
}

impl DbConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var                 | Default     |
    /// |-------------------------|-------------|
    /// | `DATABASE_URL`          | unset       |
    /// | `DB_HOST`               | `localhost` |
    /// | `DB_PORT`               | `5432`      |
    /// | `DB_NAME`               | required*   |
    /// | `DB_USER`               | required*   |
    /// | `DB_PASS`               | required*   |
    /// | `DB_MAX_CONNECTIONS`    | `10`        |
    /// | `DB_IDLE_TIMEOUT_MS`    | `10000`     |
    /// | `DB_ACQUIRE_TIMEOUT_MS` | `10000`     |
    ///
    /// *only when `DATABASE_URL` is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup("DATABASE_URL").filter(|s| !s.is_empty());
        let required = |name: &'static str| -> Result<String, ConfigError> {
            match lookup(name) {
                Some(value) => Ok(value),
                None if url.is_some() => Ok(String::new()),
                None => Err(ConfigError::Missing(name)),
            }
        };

        let database = required("DB_NAME")?;
        let user = required("DB_USER")?;
        let password = required("DB_PASS")?;

        Ok(Self {
            host: lookup("DB_HOST").unwrap_or_else(|| "localhost".into()),
            port: parse_var(&lookup, "DB_PORT", 5432)?,
            database,
            user,
            password,
            max_connections: parse_var(&lookup, "DB_MAX_CONNECTIONS", 10)?,
            idle_timeout: Duration::from_millis(parse_var(&lookup, "DB_IDLE_TIMEOUT_MS", 10_000)?),
            acquire_timeout: Duration::from_millis(parse_var(
                &lookup,
                "DB_ACQUIRE_TIMEOUT_MS",
                10_000,
            )?),
            url,
        })
    }

    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        match &self.url {
            Some(url) => PgConnectOptions::from_str(url),
            None => Ok(PgConnectOptions::new()
                .host(&self.host)
                .port(self.port)
                .database(&self.database)
                .username(&self.user)
                .password(&self.password)),
        }
    }
}

/// Parse an optional variable, falling back to `default` when unset.
pub fn parse_var<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value: raw }),
    }
}
