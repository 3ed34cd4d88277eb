//! Messages carried inside the API envelopes.

use serde::{Deserialize, Serialize};

use crate::id::UserId;
use crate::user::User;

/// Request for the full user listing. Carries no parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetUsersRequest {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetUsersResponse {
    pub users: Vec<User>,
}

/// Request addressing a single user.
///
/// Lookups only read `id`; updates also apply `first_name` and `last_name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRequest {
    pub id: UserId,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl UserRequest {
    /// Request for a lookup by id.
    pub fn by_id(id: impl Into<UserId>) -> Self {
        Self {
            id: id.into(),
            first_name: String::new(),
            last_name: String::new(),
        }
    }

    /// Request for a name update.
    pub fn update(
        id: impl Into<UserId>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub user: User,
}
