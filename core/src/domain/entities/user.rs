//! User identity entity.

use serde::{Deserialize, Serialize};

/// A registered user account
///
/// `password_hash` holds an Argon2 PHC-format digest. It must never reach an
/// API response; the presentation layer serializes users through a DTO that
/// omits it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Auto-increment identifier
    pub id: i64,

    /// Unique login name
    pub username: String,

    /// Contact address, used for password-reset delivery
    pub email: String,

    /// Argon2 digest of the password
    pub password_hash: String,

    pub first_name: Option<String>,

    pub last_name: Option<String>,

    /// Deactivated accounts keep their data but cannot log in
    pub is_active: bool,
}

impl User {
    /// Creates a new user pending insertion (id assigned by the database)
    pub fn new(username: String, email: String, password_hash: String) -> Self {
        Self {
            id: 0,
            username,
            email,
            password_hash,
            first_name: None,
            last_name: None,
            is_active: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_defaults() {
        let user = User::new(
            "alice".to_string(),
            "alice@example.com".to_string(),
            "$argon2id$stub".to_string(),
        );

        assert_eq!(user.id, 0);
        assert!(user.is_active);
        assert!(user.first_name.is_none());
    }
}
