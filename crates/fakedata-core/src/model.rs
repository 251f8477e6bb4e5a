//! Entities of the fake data graph
//!
//! Users own albums and albums own photos. The owned collections are not
//! stored on the parent; they are looked up through the store when a client
//! asks for them.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::EntityId;

/// A user of the fake photo service.
///
/// `User::default()` is the value returned for unknown identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    pub id: EntityId,

    /// Display name
    pub name: String,

    /// Login name
    pub username: String,

    /// Email address, unique across users
    pub email: String,

    /// Argon2 PHC string of the user's password
    #[serde(skip_serializing, default)]
    pub password_hash: String,
}

impl User {
    /// Create a user without credentials
    pub fn new(id: EntityId, name: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            username: username.into(),
            ..Default::default()
        }
    }

    /// Set the email address
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Set the stored password hash
    pub fn with_password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "User({}, {})", self.id, self.username)
    }
}

/// A photo album owned by a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    /// Unique identifier
    pub id: EntityId,

    /// Owning user
    pub user_id: EntityId,

    /// Free text description
    pub description: String,
}

impl Album {
    /// Create a new album
    pub fn new(id: EntityId, user_id: EntityId, description: impl Into<String>) -> Self {
        Self {
            id,
            user_id,
            description: description.into(),
        }
    }
}

/// A photo stored in an album.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    /// Unique identifier
    pub id: EntityId,

    /// Owning album
    pub album_id: EntityId,

    /// Free text description
    pub description: String,
}

impl Photo {
    /// Create a new photo
    pub fn new(id: EntityId, album_id: EntityId, description: impl Into<String>) -> Self {
        Self {
            id,
            album_id,
            description: description.into(),
        }
    }
}

/// Result of a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Authentication {
    /// Signed bearer token
    pub token: String,

    /// The authenticated user
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zero_value() {
        let user = User::default();
        assert_eq!(user.id, 0);
        assert!(user.name.is_empty());
        assert!(user.email.is_empty());

        assert_eq!(Album::default(), Album::new(0, 0, ""));
        assert_eq!(Photo::default(), Photo::new(0, 0, ""));
    }

    #[test]
    fn test_user_builder() {
        let user = User::new(3, "User 3", "User3")
            .with_email("user3@example.com")
            .with_password_hash("$argon2id$...");

        assert_eq!(user.id, 3);
        assert_eq!(user.username, "User3");
        assert_eq!(user.email, "user3@example.com");
        assert_eq!(user.to_string(), "User(3, User3)");
    }

    #[test]
    fn test_password_hash_is_not_serialized() {
        let user = User::new(1, "User 1", "User1").with_password_hash("secret-hash");
        let json = serde_json::to_value(&user).unwrap();

        assert!(json.get("password_hash").is_none());
        assert_eq!(json["username"], "User1");

        let back: User = serde_json::from_value(json).unwrap();
        assert!(back.password_hash.is_empty());
    }
}
