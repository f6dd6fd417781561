//! Database connection settings.

use crate::error::{PipelineError, Result};
use sqlx::postgres::PgConnectOptions;
use std::fmt;
use std::str::FromStr;

/// Default connection parts for the stats database, matching the values the
/// pipeline containers were provisioned with.
pub const DEFAULT_DB_HOST: &str = "db";
pub const DEFAULT_DB_PORT: u16 = 5432;
pub const DEFAULT_DB_USER: &str = "bball_user";
pub const DEFAULT_DB_PASSWORD: &str = "bball_password";
pub const DEFAULT_DB_NAME: &str = "basketball_stats";

/// Resolved connection settings for the stats database.
///
/// Holds both the canonical URL (handed to child tasks via `DATABASE_URL`)
/// and the parsed options the probe connects with.
#[derive(Debug, Clone)]
pub struct DbConfig {
    url: String,
    options: PgConnectOptions,
}

impl DbConfig {
    /// Build from a full connection URL. The URL is validated up front so a
    /// typo fails before the wait loop starts retrying it forever.
    pub fn from_url(url: impl Into<String>) -> Result<Self> {
        let url = url.into();
        let options =
            PgConnectOptions::from_str(&url).map_err(|e| PipelineError::InvalidDatabaseUrl {
                message: e.to_string(),
            })?;
        Ok(Self { url, options })
    }

    /// Build from individual connection parts.
    pub fn from_parts(host: &str, port: u16, user: &str, password: &str, dbname: &str) -> Self {
        let url = format!("postgresql://{user}:{password}@{host}:{port}/{dbname}");
        let options = PgConnectOptions::new()
            .host(host)
            .port(port)
            .username(user)
            .password(password)
            .database(dbname);
        Self { url, options }
    }

    /// The canonical connection URL, password included. This is what child
    /// tasks receive as `DATABASE_URL`; keep it out of logs.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Connection options for the probe.
    pub fn connect_options(&self) -> PgConnectOptions {
        self.options.clone()
    }
}

impl fmt::Display for DbConfig {
    /// Password-redacted form, safe for logs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "postgres://{}@{}:{}/{}",
            self.options.get_username(),
            self.options.get_host(),
            self.options.get_port(),
            self.options.get_database().unwrap_or(""),
        )
    }
}
