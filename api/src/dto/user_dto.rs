use serde::{Deserialize, Serialize};
use validator::Validate;

use mt_core::domain::entities::user::User;
use mt_core::services::user::{NewUser, UserUpdate};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    #[validate(length(min = 3, max = 32))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8, max = 128))]
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl From<RegisterUserRequest> for NewUser {
    fn from(request: RegisterUserRequest) -> Self {
        NewUser {
            username: request.username,
            email: request.email,
            password: request.password,
            first_name: request.first_name,
            last_name: request.last_name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[validate(email)]
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl From<UpdateUserRequest> for UserUpdate {
    fn from(request: UpdateUserRequest) -> Self {
        UserUpdate {
            email: request.email,
            first_name: request.first_name,
            last_name: request.last_name,
        }
    }
}

/// Public user representation; never carries the password digest
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub is_active: bool,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            is_active: user.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_validation() {
        let request = RegisterUserRequest {
            username: "al".to_string(),
            email: "alice@example.com".to_string(),
            password: "long-enough".to_string(),
            first_name: None,
            last_name: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_user_response_omits_password_digest() {
        let user = User::new(
            "alice".to_string(),
            "alice@example.com".to_string(),
            "$argon2id$digest".to_string(),
        );

        let json = serde_json::to_string(&UserResponse::from(user)).unwrap();
        assert!(!json.contains("argon2id"));
        assert!(json.contains("\"isActive\":true"));
    }
}
