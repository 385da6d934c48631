use crate::config::ConfigError;
use crate::engine::repository::StoreError;
use crate::telemetry::TelemetryError;

/// Top-level error for engine hosts wiring configuration, telemetry, and
/// storage together. Scoring itself never errors on missing data; only
/// infrastructure failures land here.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
