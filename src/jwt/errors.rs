use thiserror::Error;

/// Error type for token operations.
///
/// Validation failures are a closed set so callers can branch exhaustively:
/// `Expired` means the signature checked out but the lifetime has elapsed,
/// while `Invalid` covers every structural or cryptographic rejection
/// (bad signature, wrong algorithm, malformed token, missing claim).
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token has expired")]
    Expired,

    #[error("Token is invalid: {0}")]
    Invalid(String),

    #[error("Unsupported signing algorithm: {0}")]
    UnsupportedAlgorithm(String),
}
