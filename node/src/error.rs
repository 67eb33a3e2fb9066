//! Error types for the volt_filt node

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parameter file could not be parsed
    #[error("Parameter file error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Required parameter absent from the parameter store
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    /// Parameter present but unusable
    #[error("Invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// Estimator rejected the configuration
    #[error("Invalid estimator configuration: {0}")]
    Config(#[from] volt_filt::ConfigError),

    /// Inbound message could not be decoded
    #[error("Malformed message: {0:?}")]
    MalformedMessage(String),

    /// Shutdown handler could not be installed
    #[error("Signal handler error: {0}")]
    Signal(#[from] ctrlc::Error),
}
