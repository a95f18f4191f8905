use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts},
    middleware::Next,
    response::Response,
};

use ironlog_auth::{AuthContext, Role, authenticate, require_role};
use ironlog_core::AppError;

use crate::metrics::track_authorization_denied;
use crate::state::AppState;

/// Copies the `Authorization` header out of the request so it is not
/// borrowed across the store lookup.
pub(crate) fn authorization_header(req: &Request) -> Option<String> {
    req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}

/// Verifies the bearer token against the identity store and attaches the
/// resulting [`AuthContext`] to the request.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let header = authorization_header(&req);
    let ctx = authenticate(&state.auth_store, &state.jwt_config, header.as_deref())
        .await
        .inspect_err(|_| track_authorization_denied("token"))?;

    req.extensions_mut().insert(ctx);
    Ok(next.run(req).await)
}

/// Extractor for the context attached by [`require_auth`].
///
/// Used on a route without the middleware it fails with a 500.
#[derive(Debug, Clone)]
pub struct AuthUser(pub AuthContext);

impl AuthUser {
    pub fn user_id(&self) -> uuid::Uuid {
        self.0.user_id
    }

    pub fn is_admin(&self) -> bool {
        self.0.is_admin()
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let ctx = require_role(parts.extensions.get::<AuthContext>(), Role::User)?;
        Ok(AuthUser(ctx.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use uuid::Uuid;

    fn parts_with(ctx: Option<AuthContext>) -> Parts {
        let (mut parts, _) = axum::http::Request::new(()).into_parts();
        if let Some(ctx) = ctx {
            parts.extensions.insert(ctx);
        }
        parts
    }

    #[tokio::test]
    async fn test_auth_user_reads_attached_context() {
        let ctx = AuthContext {
            user_id: Uuid::new_v4(),
            email: "lifter@example.com".to_string(),
            role: Role::User,
        };
        let mut parts = parts_with(Some(ctx.clone()));

        let AuthUser(extracted) = AuthUser::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(extracted, ctx);
    }

    #[tokio::test]
    async fn test_missing_context_fails_closed() {
        let mut parts = parts_with(None);
        let err = AuthUser::from_request_parts(&mut parts, &()).await.unwrap_err();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
