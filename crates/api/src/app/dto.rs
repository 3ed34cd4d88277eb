//! Form payloads and page view models.

use serde::{Deserialize, Serialize};

use useradmin_core::{User, UserRequest};

/// `POST /user/edit` form body. Missing fields default to the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EditUserForm {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub lastname: String,
}

impl EditUserForm {
    pub fn into_request(self) -> UserRequest {
        UserRequest::update(self.id, self.firstname, self.lastname)
    }
}

/// Data handed to the `list` template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListView {
    pub users: Vec<User>,
}

/// Data handed to the `edit` template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditView {
    pub user: User,
    /// Set after a successful submit so the page can confirm the save.
    #[serde(default)]
    pub saved: bool,
}
