//! Error types for the rover crates

/// Errors that can occur while talking to the record store or loading config
#[derive(Debug, thiserror::Error)]
pub enum RoverError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// The request could not be sent or the response could not be read
    #[error("Transport error: {0}")]
    Transport(String),

    /// A response arrived but its status indicates failure
    #[error("Record store returned status {status}: {body}")]
    Protocol { status: u16, body: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for rover operations
pub type Result<T> = std::result::Result<T, RoverError>;
