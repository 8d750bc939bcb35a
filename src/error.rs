use thiserror::Error;

#[derive(Error, Debug)]
pub enum OpportunityError {
    #[error("negative input for {field}: {value}")]
    NegativeInput { field: &'static str, value: f64 },

    #[error("non-finite input for {field}: {value}")]
    NonFiniteInput { field: &'static str, value: f64 },

    #[error("dataset not found: {0}")]
    DatasetNotFound(String),

    #[error("unsupported dataset format: {0} (expected .toml or .json)")]
    UnsupportedDatasetFormat(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("telemetry error: {0}")]
    Telemetry(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, OpportunityError>;
