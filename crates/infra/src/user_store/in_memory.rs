use std::collections::BTreeMap;
use std::sync::RwLock;

use useradmin_core::{User, UserId};

use super::r#trait::{UserStore, UserStoreError};

/// In-memory user table.
///
/// Intended for tests/dev. Not optimized for performance.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    rows: RwLock<BTreeMap<UserId, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `users`.
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let rows = users.into_iter().map(|u| (u.id.clone(), u)).collect();
        Self {
            rows: RwLock::new(rows),
        }
    }

    /// Insert or replace a row. Seeding only; the data API never creates rows.
    pub fn insert(&self, user: User) -> Result<(), UserStoreError> {
        let mut rows = self
            .rows
            .write()
            .map_err(|_| UserStoreError::Write("lock poisoned".to_string()))?;
        rows.insert(user.id.clone(), user);
        Ok(())
    }

    /// Remove a row, returning it if present.
    #[cfg(test)]
    pub(crate) fn remove(&self, id: &UserId) -> Result<Option<User>, UserStoreError> {
        let mut rows = self
            .rows
            .write()
            .map_err(|_| UserStoreError::Write("lock poisoned".to_string()))?;
        Ok(rows.remove(id))
    }

    pub fn len(&self) -> usize {
        self.rows.read().map(|rows| rows.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait::async_trait]
impl UserStore for InMemoryUserStore {
    async fn list_by_username(&self) -> Result<Vec<User>, UserStoreError> {
        let rows = self
            .rows
            .read()
            .map_err(|_| UserStoreError::Query("lock poisoned".to_string()))?;

        let mut users: Vec<User> = rows.values().cloned().collect();
        // Stable sort keeps id order among equal usernames.
        users.sort_by(|a, b| a.username.cmp(&b.username));
        Ok(users)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserStoreError> {
        let rows = self
            .rows
            .read()
            .map_err(|_| UserStoreError::Query("lock poisoned".to_string()))?;
        Ok(rows.get(id).cloned())
    }

    async fn update_names(
        &self,
        id: &UserId,
        first_name: &str,
        last_name: &str,
    ) -> Result<u64, UserStoreError> {
        let mut rows = self
            .rows
            .write()
            .map_err(|_| UserStoreError::Write("lock poisoned".to_string()))?;

        match rows.get_mut(id) {
            Some(user) => {
                user.rename(first_name, last_name);
                Ok(1)
            }
            None => Ok(0),
        }
    }
}
