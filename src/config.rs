use serde::Deserialize;
use std::env;
use std::str::FromStr;

const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub max_body_bytes: Option<usize>,
    pub cors_origin: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            max_body_bytes: None,
            cors_origin: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let defaults = Config::default();
        let cfg = config::Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .add_source(config::Environment::default())
            .build()?;

        let config: Config = cfg.try_deserialize()?;

        config.validate()?;

        Ok(config)
    }

    /// Проверяет конфигурацию перед запуском сервера
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if self.host.is_empty()
            || !self
                .host
                .chars()
                .all(|c| c.is_alphanumeric() || ".:-_".contains(c))
        {
            return Err(config::ConfigError::Message(
                "Invalid host format".to_string(),
            ));
        }

        if self.port < 1024 {
            return Err(config::ConfigError::Message(
                "Port must be 1024 or higher".to_string(),
            ));
        }

        // Лимит тела запроса: 1KB..100MB
        if let Some(limit) = self.max_body_bytes {
            let min = 1024;
            let max = 100 * 1024 * 1024;
            if limit < min || limit > max {
                return Err(config::ConfigError::Message(format!(
                    "max_body_bytes must be between {} and {} bytes",
                    min, max
                )));
            }
        }

        if let Some(origin) = &self.cors_origin {
            validate_cors_origin(origin)?;
        }

        Ok(())
    }

    pub fn effective_max_body_bytes(&self) -> usize {
        self.max_body_bytes.unwrap_or(DEFAULT_MAX_BODY_BYTES)
    }
}

/// CORS origin должен быть вида `scheme://host[:port]`, иначе actix-cors
/// падает при старте каждого воркера
fn validate_cors_origin(origin: &str) -> Result<(), config::ConfigError> {
    let invalid = || config::ConfigError::Message(format!("Invalid cors_origin: {:?}", origin));

    let parsed = url::Url::parse(origin).map_err(|_| invalid())?;
    let is_bare_origin = matches!(parsed.scheme(), "http" | "https")
        && parsed.host_str().is_some_and(|host| !host.is_empty())
        && parsed.username().is_empty()
        && parsed.password().is_none()
        && parsed.path() == "/"
        && !origin.ends_with('/')
        && parsed.query().is_none()
        && parsed.fragment().is_none();

    if is_bare_origin { Ok(()) } else { Err(invalid()) }
}

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: Option<u32>,
    pub min_connections: Option<u32>,
    pub connect_timeout_secs: Option<u64>,
    pub acquire_timeout_secs: Option<u64>,
    pub idle_timeout_secs: Option<u64>,
    pub sql_log: Option<bool>,
}

impl DatabaseSettings {
    pub fn default_from_url(url: String) -> Self {
        Self {
            url,
            max_connections: parse_env_var("DATABASE_MAX_CONNECTIONS"),
            min_connections: parse_env_var("DATABASE_MIN_CONNECTIONS"),
            connect_timeout_secs: parse_env_var("DATABASE_CONNECT_TIMEOUT_SECS"),
            acquire_timeout_secs: parse_env_var("DATABASE_ACQUIRE_TIMEOUT_SECS"),
            idle_timeout_secs: parse_env_var("DATABASE_IDLE_TIMEOUT_SECS"),
            sql_log: parse_env_var("DATABASE_SQL_LOG"),
        }
    }

    pub fn is_sqlite(&self) -> bool {
        self.url.starts_with("sqlite:")
    }
}

fn parse_env_var<T>(key: &str) -> Option<T>
where
    T: FromStr,
{
    env::var(key).ok().and_then(|value| value.parse::<T>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.effective_max_body_bytes(), DEFAULT_MAX_BODY_BYTES);
    }

    #[test]
    fn rejects_privileged_port() {
        let config = Config {
            port: 80,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_suspicious_host() {
        let config = Config {
            host: "localhost; rm -rf".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_body_limit_out_of_range() {
        let too_small = Config {
            max_body_bytes: Some(10),
            ..Config::default()
        };
        assert!(too_small.validate().is_err());

        let in_range = Config {
            max_body_bytes: Some(64 * 1024),
            ..Config::default()
        };
        assert!(in_range.validate().is_ok());
        assert_eq!(in_range.effective_max_body_bytes(), 64 * 1024);
    }

    #[test]
    fn accepts_bare_origins() {
        for origin in ["http://localhost:3000", "https://noteful.example.com"] {
            let config = Config {
                cors_origin: Some(origin.to_string()),
                ..Config::default()
            };
            assert!(config.validate().is_ok(), "{}", origin);
        }
    }

    #[test]
    fn rejects_malformed_origins() {
        for origin in [
            "",
            "*",
            "not a url",
            "localhost:3000",
            "ftp://files.example.com",
            "https://example.com/app",
            "https://example.com/",
            "https://example.com?x=1",
        ] {
            let config = Config {
                cors_origin: Some(origin.to_string()),
                ..Config::default()
            };
            assert!(config.validate().is_err(), "{}", origin);
        }
    }

    #[test]
    fn detects_sqlite_urls() {
        let settings = DatabaseSettings::default_from_url("sqlite::memory:".to_string());
        assert!(settings.is_sqlite());
        let settings =
            DatabaseSettings::default_from_url("postgres://u:p@localhost/noteful".to_string());
        assert!(!settings.is_sqlite());
    }
}
