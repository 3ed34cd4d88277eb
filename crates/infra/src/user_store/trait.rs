use std::sync::Arc;

use thiserror::Error;

use useradmin_core::{User, UserId};

/// User store operation error.
///
/// These are **infrastructure errors**. "No such user" is not an error at this
/// layer: lookups return `Ok(None)` and updates report zero affected rows.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UserStoreError {
    /// A read (select) failed.
    #[error("query failed: {0}")]
    Query(String),

    /// A write (update) failed.
    #[error("write failed: {0}")]
    Write(String),
}

/// Access to the `users` table.
///
/// Implementations must:
/// - return listings sorted by username ascending
/// - never modify `username`
/// - never create rows from `update_names`
#[async_trait::async_trait]
pub trait UserStore: Send + Sync {
    /// All users, ordered by username ascending.
    async fn list_by_username(&self) -> Result<Vec<User>, UserStoreError>;

    /// The user with the given id, if any.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserStoreError>;

    /// Overwrite first/last name of the matching row. Returns rows affected.
    async fn update_names(
        &self,
        id: &UserId,
        first_name: &str,
        last_name: &str,
    ) -> Result<u64, UserStoreError>;
}

#[async_trait::async_trait]
impl<S> UserStore for Arc<S>
where
    S: UserStore + ?Sized,
{
    async fn list_by_username(&self) -> Result<Vec<User>, UserStoreError> {
        (**self).list_by_username().await
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserStoreError> {
        (**self).find_by_id(id).await
    }

    async fn update_names(
        &self,
        id: &UserId,
        first_name: &str,
        last_name: &str,
    ) -> Result<u64, UserStoreError> {
        (**self).update_names(id, first_name, last_name).await
    }
}
