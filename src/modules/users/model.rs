//! User models, re-exported from `ironlog-models`, plus the profile view.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use ironlog_auth::Role;
pub use ironlog_models::users::{MessageResponse, User};
use ironlog_models::UserId;

/// Body of `GET /users/me`.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub id: UserId,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl From<User> for ProfileResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            role: user.role,
            created_at: user.created_at,
        }
    }
}
