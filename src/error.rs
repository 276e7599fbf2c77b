use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrbitError {
    #[error("invalid {name}: {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("invalid {field} input {text:?}: expected a number")]
    InvalidInput { field: &'static str, text: String },

    #[error("unknown preset: {0}")]
    UnknownPreset(String),

    #[error("configuration error: {message}")]
    Config { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("render loop error: {message}")]
    RenderLoop { message: String },
}

impl OrbitError {
    pub fn config(message: impl Into<String>) -> Self {
        OrbitError::Config {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, OrbitError>;
