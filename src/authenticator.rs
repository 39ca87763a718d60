use std::sync::Arc;

use crate::config::AuthConfig;
use crate::jwt::Claims;
use crate::jwt::TokenError;
use crate::jwt::TokenIssuer;
use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::store::StoreError;
use crate::store::User;
use crate::store::UserStore;

/// Authentication coordinator combining the hasher, the token issuer, and
/// the external user store.
///
/// Implements the three request flows: registration (hash then insert),
/// login (lookup, verify, issue), and authorized access (validate then
/// lookup by subject). Stateless beyond its immutable configuration, so it
/// is shared across request handlers without coordination.
pub struct Authenticator<S: UserStore> {
    store: Arc<S>,
    password_hasher: PasswordHasher,
    token_issuer: TokenIssuer,
}

/// Authentication operation errors.
///
/// `InvalidCredentials` is deliberately uniform across unknown-username and
/// wrong-password so responses cannot be used for username enumeration.
/// `SessionExpired` and `InvalidToken` stay distinct: the end user sees
/// different messages even though both deny access.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Incorrect username or password")]
    InvalidCredentials,

    #[error("Username already taken: {0}")]
    UsernameTaken(String),

    #[error("Session has expired")]
    SessionExpired,

    #[error("Could not validate token")]
    InvalidToken,

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl<S: UserStore> Authenticator<S> {
    /// Create an authenticator from its parts.
    pub fn new(store: Arc<S>, password_hasher: PasswordHasher, token_issuer: TokenIssuer) -> Self {
        Self {
            store,
            password_hasher,
            token_issuer,
        }
    }

    /// Create an authenticator from loaded configuration.
    ///
    /// # Errors
    /// * `TokenError` - The configured signing algorithm is unsupported
    pub fn from_config(store: Arc<S>, config: &AuthConfig) -> Result<Self, TokenError> {
        Ok(Self::new(
            store,
            PasswordHasher::with_cost(config.password.cost),
            TokenIssuer::from_config(&config.token)?,
        ))
    }

    /// Register a new user with a hashed password.
    ///
    /// # Errors
    /// * `UsernameTaken` - Username already exists in the store
    /// * `Password` - Hashing failed (e.g. over-long password)
    /// * `Store` - Persistence operation failed
    pub async fn register(&self, username: &str, password: &str) -> Result<User, AuthError> {
        if self.store.find_by_username(username).await?.is_some() {
            return Err(AuthError::UsernameTaken(username.to_string()));
        }

        let password_hash = self.password_hasher.hash(password)?;

        let user = self
            .store
            .insert_user(username, &password_hash)
            .await
            .map_err(|e| match e {
                // Lost the race against a concurrent registration
                StoreError::DuplicateUsername(name) => AuthError::UsernameTaken(name),
                other => AuthError::Store(other),
            })?;

        tracing::debug!(username = %user.username, "registered new user");
        Ok(user)
    }

    /// Verify credentials and issue a bearer token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown username or password mismatch
    /// * `Token` - Token signing failed
    /// * `Store` - Lookup failed
    pub async fn login(&self, username: &str, password: &str) -> Result<String, AuthError> {
        let user = match self.store.find_by_username(username).await? {
            Some(user) => user,
            None => {
                tracing::debug!(username, "login rejected: unknown username");
                return Err(AuthError::InvalidCredentials);
            }
        };

        if !self.password_hasher.verify(password, &user.password_hash) {
            tracing::debug!(username, "login rejected: credential mismatch");
            return Err(AuthError::InvalidCredentials);
        }

        let claims = Claims::for_subject(&user.username);
        Ok(self.token_issuer.issue(&claims)?)
    }

    /// Validate a presented token and resolve its subject to a user.
    ///
    /// # Errors
    /// * `SessionExpired` - Token lifetime has elapsed
    /// * `InvalidToken` - Token failed validation, or its subject no longer
    ///   resolves to a user
    /// * `Store` - Lookup failed
    pub async fn authorize(&self, token: &str) -> Result<User, AuthError> {
        let claims = self.token_issuer.validate(token).map_err(|e| match e {
            TokenError::Expired => AuthError::SessionExpired,
            _ => AuthError::InvalidToken,
        })?;

        // validate guarantees the subject claim is present
        let subject = claims.subject().unwrap_or_default();

        self.store
            .find_by_username(subject)
            .await?
            .ok_or(AuthError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use mockall::predicate::eq;
    use uuid::Uuid;

    use super::*;
    use crate::store::MockUserStore;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    fn authenticator(store: MockUserStore) -> Authenticator<MockUserStore> {
        Authenticator::new(
            Arc::new(store),
            PasswordHasher::with_cost(4),
            TokenIssuer::new(SECRET, Duration::minutes(30)),
        )
    }

    fn stored_user(username: &str, password: &str) -> User {
        User {
            id: Uuid::new_v4(),
            username: username.to_string(),
            password_hash: PasswordHasher::with_cost(4)
                .hash(password)
                .expect("Failed to hash password"),
        }
    }

    #[tokio::test]
    async fn test_register_hashes_before_insert() {
        let mut store = MockUserStore::new();
        store
            .expect_find_by_username()
            .with(eq("alice"))
            .returning(|_| Ok(None));
        store
            .expect_insert_user()
            .withf(|username, hash| {
                username == "alice" && hash.starts_with("$2") && !hash.contains("correct-horse")
            })
            .returning(|username, hash| {
                Ok(User {
                    id: Uuid::new_v4(),
                    username: username.to_string(),
                    password_hash: hash.to_string(),
                })
            });

        let auth = authenticator(store);
        let user = auth
            .register("alice", "correct-horse")
            .await
            .expect("Registration failed");
        assert_eq!(user.username, "alice");
    }

    #[tokio::test]
    async fn test_register_duplicate_username() {
        let mut store = MockUserStore::new();
        store
            .expect_find_by_username()
            .returning(|_| Ok(Some(stored_user("alice", "correct-horse"))));

        let auth = authenticator(store);
        let result = auth.register("alice", "another-password").await;
        assert!(matches!(result, Err(AuthError::UsernameTaken(name)) if name == "alice"));
    }

    #[tokio::test]
    async fn test_login_issues_token_for_subject() {
        let mut store = MockUserStore::new();
        store
            .expect_find_by_username()
            .with(eq("alice"))
            .returning(|_| Ok(Some(stored_user("alice", "correct-horse"))));

        let auth = authenticator(store);
        let token = auth
            .login("alice", "correct-horse")
            .await
            .expect("Login failed");

        let user = auth.authorize(&token).await.expect("Authorization failed");
        assert_eq!(user.username, "alice");
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let mut store = MockUserStore::new();
        store
            .expect_find_by_username()
            .returning(|_| Ok(Some(stored_user("alice", "correct-horse"))));

        let auth = authenticator(store);
        let result = auth.login("alice", "wrong").await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_unknown_username_is_same_error() {
        let mut store = MockUserStore::new();
        store.expect_find_by_username().returning(|_| Ok(None));

        let auth = authenticator(store);
        let result = auth.login("nobody", "correct-horse").await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_authorize_expired_token() {
        let store = MockUserStore::new();
        let auth = Authenticator::new(
            Arc::new(store),
            PasswordHasher::with_cost(4),
            TokenIssuer::new(SECRET, Duration::seconds(-30)),
        );

        let token = auth
            .token_issuer
            .issue(&Claims::for_subject("alice"))
            .expect("Failed to issue token");

        let result = auth.authorize(&token).await;
        assert!(matches!(result, Err(AuthError::SessionExpired)));
    }

    #[tokio::test]
    async fn test_authorize_garbage_token() {
        let auth = authenticator(MockUserStore::new());

        let result = auth.authorize("not.a.token").await;
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[tokio::test]
    async fn test_authorize_subject_no_longer_exists() {
        let mut store = MockUserStore::new();
        store
            .expect_find_by_username()
            .with(eq("alice"))
            .returning(|_| Ok(None));

        let auth = authenticator(store);
        let token = auth
            .token_issuer
            .issue(&Claims::for_subject("alice"))
            .expect("Failed to issue token");

        let result = auth.authorize(&token).await;
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }
}
