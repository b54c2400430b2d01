//! Service configuration loaded from environment variables.
//!
//! All settings come from environment variables (or a `.env` file via
//! `dotenvy`). Missing or unparsable numeric and boolean values fall back
//! to their defaults.
//!
//! | Variable                        | Default     |
//! |---------------------------------|-------------|
//! | `HOST`                          | `0.0.0.0`   |
//! | `PORT`                          | `3000`      |
//! | `DB_HOST`                       | `localhost` |
//! | `DB_PORT`                       | `5432`      |
//! | `DB_USER`                       | `postgres`  |
//! | `DB_PASSWORD`                   | *(none)*    |
//! | `DB_NAME`                       | `movies`    |
//! | `DATABASE_URL`                  | *(unset)*   |
//! | `DATABASE_MAX_CONNECTIONS`      | `10`        |
//! | `DATABASE_MIN_CONNECTIONS`      | `0`         |
//! | `DATABASE_ACQUIRE_TIMEOUT_SECS` | `5`         |
//! | `DATABASE_RUN_MIGRATIONS`       | `false`     |
//! | `PERSISTENCE_ENABLED`           | `true`      |
//! | `REQUEST_TIMEOUT_SECS`          | `0` (off)   |
//! | `LOG_FORMAT`                    | `pretty`    |

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::str::FromStr;

use anyhow::Context;
use sqlx::postgres::PgConnectOptions;

/// Top-level service configuration.
///
/// Loaded once at startup via [`ServiceConfig::from_env`].
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:3000`).
    pub listen_addr: SocketAddr,

    /// Database connection settings.
    pub database: DatabaseConfig,

    /// `false` serves movies from process memory instead of PostgreSQL.
    pub persistence_enabled: bool,

    /// Per-request timeout in seconds (0 = no timeout).
    pub request_timeout_secs: u64,

    /// Log line format.
    pub log_format: LogFormat,
}

/// PostgreSQL connection settings.
#[derive(Clone)]
pub struct DatabaseConfig {
    /// Full connection string. Takes precedence over the discrete fields.
    pub url: Option<String>,
    /// Server host name.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Login role.
    pub user: String,
    /// Login password, if any.
    pub password: Option<String>,
    /// Database name.
    pub name: String,
    /// Maximum number of pooled connections.
    pub max_connections: u32,
    /// Minimum idle connections kept open.
    pub min_connections: u32,
    /// Seconds to wait for a pooled connection.
    pub acquire_timeout_secs: u64,
    /// Apply embedded migrations at startup.
    pub run_migrations: bool,
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &self.url.as_ref().map(|_| "<redacted>"))
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("name", &self.name)
            .field("max_connections", &self.max_connections)
            .field("min_connections", &self.min_connections)
            .field("acquire_timeout_secs", &self.acquire_timeout_secs)
            .field("run_migrations", &self.run_migrations)
            .finish()
    }
}

impl DatabaseConfig {
    /// Builds `sqlx` connection options from these settings.
    ///
    /// # Errors
    ///
    /// Returns an error if `url` is set but is not a valid PostgreSQL
    /// connection string.
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        if let Some(url) = &self.url {
            return PgConnectOptions::from_str(url);
        }

        let options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .database(&self.name);

        Ok(match &self.password {
            Some(password) => options.password(password),
            None => options,
        })
    }
}

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable multi-field lines.
    Pretty,
    /// One JSON object per line.
    Json,
}

impl ServiceConfig {
    /// Loads configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `HOST` is neither an IP address nor `localhost`.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if `HOST` is neither an IP address nor `localhost`.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port: u16 = parse_or(&lookup, "PORT", 3000);
        let listen_addr = SocketAddr::new(parse_host(&host)?, port);

        let database = DatabaseConfig {
            url: lookup("DATABASE_URL").filter(|v| !v.is_empty()),
            host: lookup("DB_HOST").unwrap_or_else(|| "localhost".to_string()),
            port: parse_or(&lookup, "DB_PORT", 5432),
            user: lookup("DB_USER").unwrap_or_else(|| "postgres".to_string()),
            password: lookup("DB_PASSWORD").filter(|v| !v.is_empty()),
            name: lookup("DB_NAME").unwrap_or_else(|| "movies".to_string()),
            max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 10),
            min_connections: parse_or(&lookup, "DATABASE_MIN_CONNECTIONS", 0),
            acquire_timeout_secs: parse_or(&lookup, "DATABASE_ACQUIRE_TIMEOUT_SECS", 5),
            run_migrations: parse_bool_or(&lookup, "DATABASE_RUN_MIGRATIONS", false),
        };

        let log_format = match lookup("LOG_FORMAT").as_deref() {
            Some("json") | Some("JSON") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        Ok(Self {
            listen_addr,
            database,
            persistence_enabled: parse_bool_or(&lookup, "PERSISTENCE_ENABLED", true),
            request_timeout_secs: parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 0),
            log_format,
        })
    }
}

/// Parses a bind host: an IPv4/IPv6 literal (brackets optional) or
/// `localhost`.
fn parse_host(host: &str) -> anyhow::Result<IpAddr> {
    let host = host.trim();
    if host.eq_ignore_ascii_case("localhost") {
        return Ok(IpAddr::V4(Ipv4Addr::LOCALHOST));
    }
    host.trim_start_matches('[')
        .trim_end_matches(']')
        .parse()
        .with_context(|| format!("invalid HOST {host:?}: expected an IP address or localhost"))
}

/// Parses `key` as `T`, returning `default` on missing or invalid values.
fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    lookup(key)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Parses `key` as a boolean. Accepts `"true"`, `"1"`, `"false"`, `"0"`
/// (case-insensitive). Returns `default` otherwise.
fn parse_bool_or<F>(lookup: &F, key: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key).map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        Some("true") | Some("1") => true,
        Some("false") | Some("0") => false,
        _ => default,
    }
}
