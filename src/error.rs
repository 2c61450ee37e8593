use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("Strategy required")]
    MissingStrategy,
    #[error("Payment method not found: {0}")]
    MethodNotFound(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PaymentError>;
