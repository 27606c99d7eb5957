use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Required element not found: {0}")]
    MissingElement(String),

    #[error("Element has unexpected type: {0}")]
    UnexpectedElement(String),

    #[error("DOM operation failed: {0}")]
    Dom(String),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse configuration JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}
