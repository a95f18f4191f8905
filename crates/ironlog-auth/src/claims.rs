//! Claims carried by a session token.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::jwt::TokenError;
use crate::role::Role;

/// The role is informational; the verifier always re-reads the stored role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID (subject claim)
    pub sub: String,
    pub email: String,
    pub role: Role,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
}

impl Claims {
    pub fn subject_id(&self) -> Result<Uuid, TokenError> {
        Uuid::parse_str(&self.sub).map_err(|_| TokenError::Invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(sub: String) -> Claims {
        Claims {
            sub,
            email: "lifter@example.com".to_string(),
            role: Role::User,
            exp: 1_900_000_000,
            iat: 1_800_000_000,
        }
    }

    #[test]
    fn test_claims_serialize_role_lowercase() {
        let json = serde_json::to_value(sample(Uuid::new_v4().to_string())).unwrap();
        assert_eq!(json["role"], "user");
        assert_eq!(json["exp"], 1_900_000_000u64);
    }

    #[test]
    fn test_subject_id() {
        let id = Uuid::new_v4();
        assert_eq!(sample(id.to_string()).subject_id().unwrap(), id);
        assert_eq!(
            sample("not-a-uuid".to_string()).subject_id().unwrap_err(),
            TokenError::Invalid
        );
    }
}
