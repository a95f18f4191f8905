use std::env;

use crate::env_or;

/// Seven days, the lifetime of a login session.
pub const DEFAULT_ACCESS_EXPIRY: i64 = 604_800;

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    /// Token lifetime in seconds.
    pub access_token_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self {
            secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| "your-secret-key-change-in-production".to_string()),
            access_token_expiry: env_or("JWT_ACCESS_EXPIRY", DEFAULT_ACCESS_EXPIRY),
        }
    }

    pub fn new(secret: impl Into<String>, access_token_expiry: i64) -> Self {
        Self {
            secret: secret.into(),
            access_token_expiry,
        }
    }
}
