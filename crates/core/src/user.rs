use serde::{Deserialize, Serialize};

use crate::id::UserId;

/// A managed user record.
///
/// `username` is fixed once the row exists; only the name fields change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

impl User {
    pub fn new(
        id: impl Into<UserId>,
        username: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Replace the mutable name fields, leaving id and username untouched.
    pub fn rename(&mut self, first_name: impl Into<String>, last_name: impl Into<String>) {
        self.first_name = first_name.into();
        self.last_name = last_name.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rename_keeps_identity_and_username() {
        let mut user = User::new("u1", "alice", "A", "B");
        user.rename("Alice", "Baker");

        assert_eq!(user, User::new("u1", "alice", "Alice", "Baker"));
    }

    #[test]
    fn serializes_with_snake_case_fields() {
        let user = User::new("u1", "alice", "A", "B");
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "u1",
                "username": "alice",
                "first_name": "A",
                "last_name": "B",
            })
        );
    }
}
