use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use authkit::store::StoreError;
use authkit::store::User;
use authkit::store::UserStore;
use uuid::Uuid;

/// In-memory user store standing in for the external database.
#[derive(Default)]
pub struct InMemoryUserStore {
    users: Mutex<HashMap<String, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.lock().expect("User store lock poisoned");
        Ok(users.get(username).cloned())
    }

    async fn insert_user(&self, username: &str, password_hash: &str) -> Result<User, StoreError> {
        let mut users = self.users.lock().expect("User store lock poisoned");
        if users.contains_key(username) {
            return Err(StoreError::DuplicateUsername(username.to_string()));
        }

        let user = User {
            id: Uuid::new_v4(),
            username: username.to_string(),
            password_hash: password_hash.to_string(),
        };
        users.insert(username.to_string(), user.clone());
        Ok(user)
    }
}
