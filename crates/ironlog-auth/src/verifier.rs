//! Token verification: from an `Authorization` header to an [`AuthContext`].

use ironlog_config::JwtConfig;
use ironlog_core::AppError;

use crate::context::AuthContext;
use crate::jwt::{INVALID_TOKEN, verify_token};
use crate::store::IdentityStore;

/// Extracts the token from a header of the exact form `Bearer <token>`.
pub fn bearer_token(header: Option<&str>) -> Result<&str, AppError> {
    let header = header.ok_or_else(|| AppError::unauthorized("Missing authorization header"))?;

    match header.strip_prefix("Bearer ") {
        Some(token) if !token.is_empty() && !token.contains(char::is_whitespace) => Ok(token),
        _ => Err(AppError::unauthorized("Invalid authorization header format")),
    }
}

/// Verifies the bearer token and resolves it against the identity store.
///
/// The returned context carries the role currently stored for the user,
/// so role changes apply to tokens issued before them. A token whose user
/// has been deleted is rejected like an invalid one.
pub async fn authenticate<S>(
    store: &S,
    jwt_config: &JwtConfig,
    header: Option<&str>,
) -> Result<AuthContext, AppError>
where
    S: IdentityStore,
{
    let token = bearer_token(header)?;
    let claims = verify_token(token, jwt_config)?;
    let user_id = claims.subject_id()?;

    let identity = store.find_by_id(user_id).await?.ok_or_else(|| {
        tracing::debug!(%user_id, "Token subject no longer exists");
        AppError::unauthorized(INVALID_TOKEN)
    })?;

    Ok(AuthContext::from(&identity))
}
