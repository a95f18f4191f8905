//! Ownership gate for user-scoped resources.
//!
//! Layered on the `/{id}` routes of workouts and progress logs, behind
//! [`require_auth`](super::auth::require_auth), so the owner check runs
//! before the request body is read.

use axum::{
    extract::{Path, Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use ironlog_auth::{AuthContext, ResourceKind, Role, authorize_owner, require_role};
use ironlog_core::AppError;

use crate::metrics::track_authorization_denied;
use crate::state::AppState;

async fn gate(
    state: &AppState,
    kind: ResourceKind,
    id: Uuid,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let ctx = req.extensions().get::<AuthContext>().cloned();
    let ctx = require_role(ctx.as_ref(), Role::User)?;

    authorize_owner(&state.auth_store, ctx, kind, id)
        .await
        .inspect_err(|e| {
            if e.status == StatusCode::FORBIDDEN {
                track_authorization_denied("ownership");
            }
        })?;

    Ok(next.run(req).await)
}

pub async fn require_workout_owner(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    gate(&state, ResourceKind::Workout, id, req, next).await
}

pub async fn require_progress_owner(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    gate(&state, ResourceKind::ProgressLog, id, req, next).await
}
