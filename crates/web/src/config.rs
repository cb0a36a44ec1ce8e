/// Error raised when an environment variable is missing or malformed.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be set")]
    Missing { name: &'static str },

    #[error("{name} has an invalid value '{value}'")]
    Invalid { name: &'static str, value: String },
}

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable multi-field lines.
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Server configuration loaded from environment variables.
///
/// Everything except `DATABASE_URL` has a default suitable for local
/// development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// PostgreSQL connection string (required).
    pub database_url: String,
    /// Upper bound of the connection pool (default: `10`).
    pub database_max_connections: u32,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Log line format (default: pretty).
    pub log_format: LogFormat,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                    | Default    |
    /// |----------------------------|------------|
    /// | `HOST`                     | `0.0.0.0`  |
    /// | `PORT`                     | `5000`     |
    /// | `DATABASE_URL`             | required   |
    /// | `DATABASE_MAX_CONNECTIONS` | `10`       |
    /// | `REQUEST_TIMEOUT_SECS`     | `30`       |
    /// | `LOG_FORMAT`               | `pretty`   |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_or(&lookup, "PORT", 5000)?;
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::Missing {
                name: "DATABASE_URL",
            })?;
        let database_max_connections = parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 10)?;
        let request_timeout_secs = parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 30)?;

        let log_format = match lookup("LOG_FORMAT").as_deref() {
            None | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    name: "LOG_FORMAT",
                    value: other.to_string(),
                })
            }
        };

        Ok(Self {
            host,
            port,
            database_url,
            database_max_connections,
            request_timeout_secs,
            log_format,
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(name) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value: raw }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_apply_when_only_database_url_is_set() {
        let config =
            ServerConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://localhost/fyyur")]))
                .unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5000);
        assert_eq!(config.database_max_connections, 10);
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn missing_database_url_is_an_error() {
        let err = ServerConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Missing {
                name: "DATABASE_URL"
            }
        );
    }

    #[test]
    fn invalid_port_names_the_variable() {
        let err = ServerConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/fyyur"),
            ("PORT", "eighty"),
        ]))
        .unwrap_err();
        assert_matches!(err, ConfigError::Invalid { name: "PORT", .. });
    }

    #[test]
    fn overrides_are_parsed() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://db/fyyur"),
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("DATABASE_MAX_CONNECTIONS", "3"),
            ("REQUEST_TIMEOUT_SECS", "5"),
            ("LOG_FORMAT", "json"),
        ]))
        .unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.database_max_connections, 3);
        assert_eq!(config.request_timeout_secs, 5);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn unknown_log_format_is_rejected() {
        let err = ServerConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://db/fyyur"),
            ("LOG_FORMAT", "xml"),
        ]))
        .unwrap_err();
        assert_matches!(err, ConfigError::Invalid { name: "LOG_FORMAT", .. });
    }
}
