//! Credential authentication core
//!
//! Registers users with securely hashed passwords, verifies credentials at
//! login, and issues/validates signed, time-limited bearer tokens:
//! - Password hashing (bcrypt, salted, tunable cost)
//! - JWT token issuance and validation (HMAC, fixed lifetime)
//! - Authentication coordination over an external user store
//!
//! HTTP routing and persistence stay outside: the host process wires the
//! [`UserStore`] port to its database and maps [`AuthError`] variants to
//! responses. The core itself is a pure, stateless transformation layer.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use authkit::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("not_my_password", &hash));
//! ```
//!
//! ## Tokens
//! ```
//! use authkit::{Claims, TokenIssuer};
//! use chrono::Duration;
//!
//! let issuer = TokenIssuer::new(b"secret_key_at_least_32_bytes_long!", Duration::minutes(30));
//! let token = issuer.issue(&Claims::for_subject("alice")).unwrap();
//! let claims = issuer.validate(&token).unwrap();
//! assert_eq!(claims.subject(), Some("alice"));
//! ```
//!
//! ## Complete Authentication Flow
//! ```no_run
//! use std::sync::Arc;
//! use authkit::{AuthConfig, Authenticator, UserStore};
//!
//! # async fn demo(store: Arc<impl UserStore>) -> Result<(), Box<dyn std::error::Error>> {
//! let config = AuthConfig::load()?;
//! let auth = Authenticator::from_config(store, &config)?;
//!
//! // Register: hash password and persist
//! auth.register("alice", "correct-horse").await?;
//!
//! // Login: verify credentials and issue a token
//! let token = auth.login("alice", "correct-horse").await?;
//!
//! // Authenticated request: validate token and resolve the user
//! let user = auth.authorize(&token).await?;
//! assert_eq!(user.username, "alice");
//! # Ok(())
//! # }
//! ```

pub mod authenticator;
pub mod config;
pub mod jwt;
pub mod password;
pub mod store;

// Re-export commonly used items
pub use authenticator::AuthError;
pub use authenticator::Authenticator;
pub use config::AuthConfig;
pub use jwt::Claims;
pub use jwt::TokenError;
pub use jwt::TokenIssuer;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use password::MAX_PASSWORD_BYTES;
pub use store::StoreError;
pub use store::User;
pub use store::UserStore;
