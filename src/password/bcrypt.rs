use bcrypt::DEFAULT_COST;

use super::errors::PasswordError;

/// Maximum password length in bytes the bcrypt algorithm accepts.
///
/// Input is measured in its UTF-8 encoding, so multi-byte characters count
/// more than once. Anything longer cannot have been the password that
/// produced a stored hash, so `verify` treats it as a plain mismatch.
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Password hashing implementation.
///
/// Wraps bcrypt with a tunable cost factor and random per-hash salts.
/// The produced hash string is self-describing (`$2b$<cost>$<salt><digest>`)
/// and embeds everything verification needs, so the cost can be re-tuned
/// for new deployments without touching stored hashes.
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Create a password hasher with the default cost factor.
    pub fn new() -> Self {
        Self { cost: DEFAULT_COST }
    }

    /// Create a password hasher with an explicit cost factor.
    ///
    /// # Arguments
    /// * `cost` - bcrypt cost exponent (valid range 4..=31)
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a plaintext password securely.
    ///
    /// Generates a fresh random salt per call, so hashing the same password
    /// twice yields two different strings that both verify.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// Self-describing bcrypt hash string (algorithm, cost, salt, digest)
    ///
    /// # Errors
    /// * `PasswordTooLong` - Input exceeds [`MAX_PASSWORD_BYTES`]
    /// * `HashingFailed` - Underlying hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let len = password.as_bytes().len();
        if len > MAX_PASSWORD_BYTES {
            return Err(PasswordError::PasswordTooLong {
                max: MAX_PASSWORD_BYTES,
                actual: len,
            });
        }

        bcrypt::hash(password, self.cost).map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored hash.
    ///
    /// Infallible by contract: over-long input, a malformed or unrecognized
    /// stored hash, and a digest mismatch all come back as `false`. The
    /// length pre-check keeps the underlying primitive from ever seeing
    /// input it cannot handle.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Previously stored bcrypt hash string
    ///
    /// # Returns
    /// True only on an exact match
    pub fn verify(&self, password: &str, stored_hash: &str) -> bool {
        // Longer than the algorithm limit can never match a stored hash.
        if password.as_bytes().len() > MAX_PASSWORD_BYTES {
            return false;
        }

        match bcrypt::verify(password, stored_hash) {
            Ok(matches) => matches,
            Err(_) => {
                tracing::debug!("stored hash did not parse; treating as mismatch");
                false
            }
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
