use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use crate::decision::DecisionConfig;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_env_value(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub decision: DecisionConfig,
}

impl AppConfig {
    /// Reads `APP_*` variables, after merging a `.env` file when one exists.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_env_value(&env_or("APP_ENV", "development"));
        let port = env_or("APP_PORT", "3000")
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        Ok(Self {
            environment,
            server: ServerConfig {
                host: env_or("APP_HOST", "127.0.0.1"),
                port,
            },
            telemetry: TelemetryConfig {
                log_level: env_or("APP_LOG_LEVEL", "info"),
            },
            decision: DecisionConfig {
                default_personality: parse_env(
                    "APP_DEFAULT_PERSONALITY",
                    ConfigError::InvalidPersonality,
                )?
                .unwrap_or_default(),
                default_product_type: parse_env(
                    "APP_DEFAULT_PRODUCT_TYPE",
                    ConfigError::InvalidProductType,
                )?
                .unwrap_or_default(),
            },
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// `Ok(None)` when unset; a set but unparseable value is reported with its raw text.
fn parse_env<T: FromStr>(
    key: &str,
    invalid: fn(String) -> ConfigError,
) -> Result<Option<T>, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().map(Some).map_err(|_| invalid(raw)),
        Err(_) => Ok(None),
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("APP_PORT must be a valid u16")]
    InvalidPort,
    #[error("APP_HOST must parse to an IPv4 or IPv6 address")]
    InvalidHost { source: std::net::AddrParseError },
    #[error("APP_DEFAULT_PERSONALITY '{0}' must be one of standard, conservative, efficiency, quality")]
    InvalidPersonality(String),
    #[error("APP_DEFAULT_PRODUCT_TYPE '{0}' must be one of digital, appliance, fitness, luxury, other")]
    InvalidProductType(String),
}
