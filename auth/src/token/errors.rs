use thiserror::Error;

/// Error type for access token operations.
///
/// Verification failures are distinguished here for logging, but callers that
/// answer HTTP requests must collapse every variant into one indistinguishable
/// unauthorized response.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is expired")]
    Expired,

    #[error("Token is invalid: {0}")]
    Invalid(String),

    #[error("Token carries no subject")]
    MissingSubject,
}
