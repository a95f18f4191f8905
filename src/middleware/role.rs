//! Admin gate, as route middleware and as an extractor.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};

use ironlog_auth::{AuthContext, Role, authenticate, require_role};
use ironlog_core::AppError;

use crate::metrics::track_authorization_denied;
use crate::middleware::auth::authorization_header;
use crate::state::AppState;

/// Authenticates the request and rejects callers whose stored role is not
/// admin. The context is attached for the handlers behind it.
pub async fn require_admin(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let header = authorization_header(&req);
    let ctx = authenticate(&state.auth_store, &state.jwt_config, header.as_deref())
        .await
        .inspect_err(|_| track_authorization_denied("token"))?;

    require_role(Some(&ctx), Role::Admin).inspect_err(|_| {
        tracing::warn!(user_id = %ctx.user_id, "Admin route denied");
        track_authorization_denied("role");
    })?;

    req.extensions_mut().insert(ctx);
    Ok(next.run(req).await)
}

/// Extractor that applies the admin gate to an already authenticated request.
#[derive(Debug, Clone)]
pub struct AdminUser(pub AuthContext);

impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let ctx = require_role(parts.extensions.get::<AuthContext>(), Role::Admin)
            .inspect_err(|e| {
                if !e.is_server_error() {
                    track_authorization_denied("role");
                }
            })?;
        Ok(AdminUser(ctx.clone()))
    }
}
