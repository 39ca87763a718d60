use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;
use crate::config::TokenConfig;

/// Token issuer and validator.
///
/// Holds the process-wide signing secret, the pinned signing algorithm, and
/// the fixed token lifetime. All three are established at construction and
/// immutable afterwards, so a single instance can be shared freely across
/// request handlers.
///
/// Tokens are compact JWS strings (header.payload.signature, base64url).
/// Validity is purely signature plus expiry; nothing is stored server-side
/// and an expired token simply stops validating.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    lifetime: Duration,
}

impl TokenIssuer {
    /// Create a token issuer signing with HS256.
    ///
    /// # Arguments
    /// * `secret` - Symmetric signing secret (at least 32 bytes for HS256)
    /// * `lifetime` - Fixed lifetime applied to every issued token
    pub fn new(secret: &[u8], lifetime: Duration) -> Self {
        Self::with_algorithm(secret, Algorithm::HS256, lifetime)
    }

    /// Create a token issuer with an explicit HMAC algorithm.
    pub fn with_algorithm(secret: &[u8], algorithm: Algorithm, lifetime: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm,
            lifetime,
        }
    }

    /// Create a token issuer from loaded configuration.
    ///
    /// # Errors
    /// * `UnsupportedAlgorithm` - The configured algorithm name is unknown
    ///   or not in the HMAC family (the secret is symmetric)
    pub fn from_config(config: &TokenConfig) -> Result<Self, TokenError> {
        let algorithm: Algorithm = config
            .algorithm
            .parse()
            .map_err(|_| TokenError::UnsupportedAlgorithm(config.algorithm.clone()))?;

        match algorithm {
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => {}
            _ => return Err(TokenError::UnsupportedAlgorithm(config.algorithm.clone())),
        }

        Ok(Self::with_algorithm(
            config.secret.as_bytes(),
            algorithm,
            Duration::minutes(config.lifetime_minutes),
        ))
    }

    /// Encode claims into a signed token.
    ///
    /// The caller's claims are copied; `exp` is overwritten with now plus
    /// the configured lifetime and `iat` with now, both UTC. Two tokens for
    /// the same claims issued at different instants therefore differ.
    ///
    /// # Errors
    /// * `EncodingFailed` - Serialization or signing failed
    pub fn issue(&self, claims: &Claims) -> Result<String, TokenError> {
        let now = Utc::now();

        let mut to_encode = claims.clone();
        to_encode.exp = Some((now + self.lifetime).timestamp());
        to_encode.iat = Some(now.timestamp());

        let header = Header::new(self.algorithm);
        encode(&header, &to_encode, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Decode and verify a token, returning its claims.
    ///
    /// Verifies the signature against the pinned algorithm (a token whose
    /// header declares any other algorithm is rejected outright), then
    /// checks `exp` against the current UTC time with zero leeway, then
    /// requires a subject claim.
    ///
    /// # Errors
    /// * `Expired` - Signature is intact but the lifetime has elapsed
    /// * `Invalid` - Bad signature, malformed structure, algorithm
    ///   mismatch, or missing `exp`/subject claim
    pub fn validate(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid(e.to_string()),
            }
        })?;

        if token_data.claims.sub.is_none() {
            return Err(TokenError::Invalid("missing subject claim".to_string()));
        }

        Ok(token_data.claims)
    }
}
