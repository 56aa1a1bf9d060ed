use std::fmt::Display;
use std::str::FromStr;

/// Server configuration loaded from environment variables.
///
/// Every field defaults to a value that works for local development;
/// deployments override them per environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default `0.0.0.0`).
    pub host: String,
    /// Bind port (default `3000`).
    pub port: u16,
    /// Browser origins allowed by CORS, from the comma-separated
    /// `CORS_ORIGINS` variable.
    pub cors_origins: Vec<String>,
    /// Per-request timeout in seconds (default `30`).
    pub request_timeout_secs: u64,
    /// Insert the starter family into an empty database at startup
    /// (default `true`).
    pub seed_on_startup: bool,
}

/// Read `key` from the environment and parse it, falling back to
/// `default` when unset. Panics with the variable name on a value that
/// does not parse, so a misconfigured deployment fails at startup.
fn env_parsed<T>(key: &str, default: &str) -> T
where
    T: FromStr,
    T::Err: Display,
{
    let raw = std::env::var(key).unwrap_or_else(|_| default.to_string());
    raw.parse()
        .unwrap_or_else(|e| panic!("{key} has invalid value '{raw}': {e}"))
}

impl ServerConfig {
    /// Load configuration from the environment.
    ///
    /// | Variable               | Default                 |
    /// |------------------------|-------------------------|
    /// | `HOST`                 | `0.0.0.0`               |
    /// | `PORT`                 | `3000`                  |
    /// | `CORS_ORIGINS`         | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                    |
    /// | `SEED_ON_STARTUP`      | `true`                  |
    pub fn from_env() -> Self {
        let cors_origins = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env_parsed("PORT", "3000"),
            cors_origins,
            request_timeout_secs: env_parsed("REQUEST_TIMEOUT_SECS", "30"),
            seed_on_startup: env_parsed("SEED_ON_STARTUP", "true"),
        }
    }
}
