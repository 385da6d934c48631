use std::env;
use std::fmt;
use std::num::ParseIntError;

const DEFAULT_REFRESH_CHUNK_SIZE: usize = 100;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the engine.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub refresh: RefreshConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let chunk_size = env::var("APP_REFRESH_CHUNK_SIZE")
            .unwrap_or_else(|_| DEFAULT_REFRESH_CHUNK_SIZE.to_string())
            .parse::<usize>()
            .map_err(|source| ConfigError::InvalidChunkSize { source })?;
        if chunk_size == 0 {
            return Err(ConfigError::ZeroChunkSize);
        }

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            refresh: RefreshConfig { chunk_size },
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Batch refresh pacing.
#[derive(Debug, Clone)]
pub struct RefreshConfig {
    pub chunk_size: usize,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidChunkSize { source: ParseIntError },
    ZeroChunkSize,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidChunkSize { .. } => {
                write!(f, "APP_REFRESH_CHUNK_SIZE must be a valid integer")
            }
            ConfigError::ZeroChunkSize => {
                write!(f, "APP_REFRESH_CHUNK_SIZE must be at least 1")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidChunkSize { source } => Some(source),
            ConfigError::ZeroChunkSize => None,
        }
    }
}
