use async_trait::async_trait;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// Durable user record as the external store returns it.
///
/// The store owns the record lifecycle; this crate only ever reads it or
/// hands a freshly hashed password to `insert_user`. The plaintext never
/// reaches the store and `password_hash` round-trips through it unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
}

/// Error type for store operations.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("Username already exists: {0}")]
    DuplicateUsername(String),

    #[error("Store backend error: {0}")]
    Backend(String),
}

/// Port for the external user store.
///
/// Implemented outside this crate by whatever persistence the host process
/// uses; the [`Authenticator`](crate::Authenticator) drives it and never
/// issues raw persistence calls of its own.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Look up a user by unique username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;

    /// Persist a new user with an already-hashed password.
    ///
    /// # Errors
    /// * `DuplicateUsername` - Username is already taken
    /// * `Backend` - Persistence operation failed
    async fn insert_user(&self, username: &str, password_hash: &str) -> Result<User, StoreError>;
}
