use crate::domain::validation::ValidationFailure;
use miette::Diagnostic;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PaymentError>;

/// Failures reported by an acquiring bank adapter.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The bank cannot process requests right now; the caller may retry later.
    #[error("acquiring bank unavailable: {0}")]
    Unavailable(String),
    /// Any other transport, protocol or decoding failure.
    #[error("acquiring bank call failed: {0}")]
    Unclassified(String),
}

#[derive(Error, Diagnostic, Debug)]
pub enum PaymentError {
    #[error("validation failed: {0}")]
    #[diagnostic(code(payauth::validation))]
    Validation(#[from] ValidationFailure),
    #[error(transparent)]
    #[diagnostic(code(payauth::gateway))]
    Gateway(#[from] GatewayError),
    #[error("internal invariant violated: {0}")]
    #[diagnostic(code(payauth::internal))]
    Internal(String),
    #[error("CSV error: {0}")]
    #[diagnostic(code(payauth::csv))]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    #[diagnostic(code(payauth::io))]
    Io(#[from] std::io::Error),
}

/// Discriminator the transport boundary matches on to pick a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    GatewayUnavailable,
    GatewayUnclassified,
    Internal,
    Io,
}

impl ErrorKind {
    /// Only a temporarily unavailable bank warrants a "try again later".
    pub fn is_retryable(self) -> bool {
        self == ErrorKind::GatewayUnavailable
    }
}

impl PaymentError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PaymentError::Validation(_) => ErrorKind::Validation,
            PaymentError::Gateway(GatewayError::Unavailable(_)) => ErrorKind::GatewayUnavailable,
            PaymentError::Gateway(GatewayError::Unclassified(_)) => ErrorKind::GatewayUnclassified,
            PaymentError::Internal(_) => ErrorKind::Internal,
            PaymentError::Csv(_) | PaymentError::Io(_) => ErrorKind::Io,
        }
    }
}
