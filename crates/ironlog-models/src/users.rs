//! Accounts, signup and login.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use ironlog_auth::Role;

use crate::ids::UserId;

/// Public view of an account. The password hash is not selected into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Deserialize, Validate, ToSchema)]
pub struct SignupRequest {
    #[validate(email)]
    #[schema(example = "lifter@example.com")]
    pub email: String,
    #[validate(length(min = 6, max = 128))]
    #[schema(example = "testpassword123")]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignupResponse {
    pub message: String,
    pub user_id: UserId,
}

#[derive(Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email)]
    #[schema(example = "admin@workout.com")]
    pub email: String,
    #[validate(length(min = 1))]
    #[schema(example = "admin123")]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
    pub user: User,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_request_rules() {
        let ok = SignupRequest {
            email: "lifter@example.com".to_string(),
            password: "newpassword".to_string(),
        };
        assert!(ok.validate().is_ok());

        let bad = SignupRequest {
            email: "not-an-email".to_string(),
            password: "123".to_string(),
        };
        let errors = bad.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
    }

    #[test]
    fn test_login_response_is_camel_case() {
        let response = LoginResponse {
            message: "Login successful".to_string(),
            token: "t".to_string(),
            expires_in: 604800,
            user: User {
                id: UserId::new(),
                email: "a@b.com".to_string(),
                role: Role::User,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            },
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["expiresIn"], 604800);
        assert_eq!(json["user"]["role"], "user");
        assert!(json["user"].get("createdAt").is_some());
        assert!(json["user"].get("password").is_none());
    }
}
