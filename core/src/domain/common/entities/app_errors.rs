use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Invalid image: {0}")]
    InvalidImage(String),

    #[error("Image too large: {size} bytes (max {max} bytes)")]
    ImageTooLarge { size: usize, max: usize },

    #[error("Failed to encode image: {0}")]
    Encoding(String),

    #[error("Vision service rejected the credential: {0}")]
    Unauthorized(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Vision service returned no completion text")]
    EmptyCompletion,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
