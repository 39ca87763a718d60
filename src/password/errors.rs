use thiserror::Error;

/// Error type for password hashing operations.
///
/// Verification deliberately has no error type: `verify` resolves every
/// failure mode (over-long input, malformed stored hash, mismatch) to
/// `false` so callers get a uniform boolean.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password too long: maximum {max} bytes, got {actual}")]
    PasswordTooLong { max: usize, actual: usize },

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}
