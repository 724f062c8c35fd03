use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 64))]
    pub username: String,
    #[validate(length(min = 1, max = 128))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ForgotPasswordRequest {
    #[validate(email)]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ResetPasswordRequest {
    #[validate(length(min = 1))]
    pub token: String,
    #[validate(length(min = 8, max = 128))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_rejects_empty_fields() {
        let request = LoginRequest {
            username: String::new(),
            password: "hunter2".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_forgot_password_requires_valid_email() {
        let request = ForgotPasswordRequest {
            email: "not-an-email".to_string(),
        };
        assert!(request.validate().is_err());

        let request = ForgotPasswordRequest {
            email: "alice@example.com".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_reset_password_requires_minimum_length() {
        let request = ResetPasswordRequest {
            token: "abc".to_string(),
            password: "short".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_refresh_request_uses_camel_case() {
        let request: RefreshTokenRequest =
            serde_json::from_str(r#"{"refreshToken": "tok"}"#).unwrap();
        assert_eq!(request.refresh_token, "tok");
    }
}
