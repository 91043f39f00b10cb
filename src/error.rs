use crate::domain::payment::PaymentId;
use crate::domain::provider::PaymentProvider;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Payment {0} not found")]
    PaymentNotFound(PaymentId),
    #[error("No client available for provider {0}")]
    UnsupportedProvider(PaymentProvider),
    #[error("Provider {provider} failed to process payment {payment_id}: {message}")]
    ProcessingError {
        provider: PaymentProvider,
        payment_id: PaymentId,
        message: String,
    },
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

pub type Result<T> = std::result::Result<T, PaymentError>;
