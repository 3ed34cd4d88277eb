//! Envelope-based data API over a `UserStore`.
//!
//! Each operation takes an `ApiRequest<_>` and answers with an `ApiResponse<_>`:
//!
//! ```text
//! get_users    ApiRequest<GetUsersRequest> -> ApiResponse<GetUsersResponse>
//! get_user     ApiRequest<UserRequest>     -> ApiResponse<UserResponse>
//! update_user  ApiRequest<UserRequest>     -> ApiResponse<UserResponse>
//! ```
//!
//! `update_user` is a write followed by an independent re-read. There is no
//! transaction around the pair: a row deleted between the two statements is
//! reported as `NotFound`.

use thiserror::Error;
use tracing::instrument;

use useradmin_core::{
    ApiRequest, ApiResponse, GetUsersRequest, GetUsersResponse, UserId, UserRequest, UserResponse,
};

use crate::user_store::{UserStore, UserStoreError};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UserApiError {
    /// No row matches the requested id.
    #[error("user not found: {0}")]
    NotFound(UserId),
    /// The update statement failed. Carries the underlying store message.
    #[error("cannot update user")]
    UpdateFailed(String),
    /// Any other storage failure.
    #[error("storage error: {0}")]
    Storage(String),
}

impl From<UserStoreError> for UserApiError {
    fn from(value: UserStoreError) -> Self {
        match value {
            UserStoreError::Write(msg) => UserApiError::UpdateFailed(msg),
            UserStoreError::Query(msg) => UserApiError::Storage(msg),
        }
    }
}

/// In-process user API.
///
/// Cheap to clone when `S` is (e.g. `SqliteUserStore` or `Arc<_>`), so it can
/// be shared by every request handler.
#[derive(Debug, Clone)]
pub struct UserApi<S> {
    store: S,
}

impl<S> UserApi<S>
where
    S: UserStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &S {
        &self.store
    }

    /// List every user, ordered by username ascending.
    #[instrument(skip_all, err)]
    pub async fn get_users(
        &self,
        _req: ApiRequest<GetUsersRequest>,
    ) -> Result<ApiResponse<GetUsersResponse>, UserApiError> {
        let users = self.store.list_by_username().await.map_err(|e| {
            tracing::error!(error = %e, "failed to list users");
            UserApiError::Storage(e.to_string())
        })?;

        Ok(ApiResponse::new(GetUsersResponse { users }))
    }

    /// Fetch one user by id.
    #[instrument(skip_all, fields(user_id = %req.msg().id), err)]
    pub async fn get_user(
        &self,
        req: ApiRequest<UserRequest>,
    ) -> Result<ApiResponse<UserResponse>, UserApiError> {
        let id = req.into_msg().id;
        tracing::debug!("get user");

        match self.store.find_by_id(&id).await {
            Ok(Some(user)) => Ok(ApiResponse::new(UserResponse { user })),
            Ok(None) => Err(UserApiError::NotFound(id)),
            Err(e) => Err(UserApiError::Storage(e.to_string())),
        }
    }

    /// Overwrite first/last name, then return the row as re-read from the store.
    #[instrument(skip_all, fields(user_id = %req.msg().id), err)]
    pub async fn update_user(
        &self,
        req: ApiRequest<UserRequest>,
    ) -> Result<ApiResponse<UserResponse>, UserApiError> {
        let UserRequest {
            id,
            first_name,
            last_name,
        } = req.into_msg();
        tracing::debug!(%first_name, %last_name, "update user");

        self.store
            .update_names(&id, &first_name, &last_name)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "user update rejected by store");
                UserApiError::from(e)
            })?;

        match self.store.find_by_id(&id).await {
            Ok(Some(user)) => Ok(ApiResponse::new(UserResponse { user })),
            Ok(None) => Err(UserApiError::NotFound(id)),
            Err(e) => Err(UserApiError::Storage(e.to_string())),
        }
    }
}
