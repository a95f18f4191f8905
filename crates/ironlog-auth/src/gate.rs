//! Role and ownership gates.
//!
//! Both gates take the [`AuthContext`] attached by the verifier. A route
//! that reaches a gate without a context is misconfigured, so the gates
//! fail closed with a 500 instead of letting the request through.

use anyhow::anyhow;
use uuid::Uuid;

use ironlog_core::AppError;

use crate::context::AuthContext;
use crate::role::Role;
use crate::store::{OwnershipStore, ResourceKind};

pub const ADMINS_ONLY: &str = "Forbidden: Admins only";
pub const NOT_OWNER: &str = "Forbidden: You do not have access to this resource";

fn missing_context() -> AppError {
    tracing::error!("Authorization gate reached without an authenticated context");
    AppError::internal_error("Authorization context missing")
}

/// Passes when the caller holds `required`. Admins satisfy every role.
pub fn require_role(ctx: Option<&AuthContext>, required: Role) -> Result<&AuthContext, AppError> {
    let ctx = ctx.ok_or_else(missing_context)?;

    match (required, ctx.role) {
        (Role::User, _) | (Role::Admin, Role::Admin) => Ok(ctx),
        (Role::Admin, Role::User) => Err(AppError::forbidden(ADMINS_ONLY)),
    }
}

/// Passes when the caller owns the resource or is an admin.
pub fn check_owner(ctx: &AuthContext, owner_id: Uuid) -> Result<(), AppError> {
    if ctx.is_admin() || ctx.user_id == owner_id {
        Ok(())
    } else {
        Err(AppError::forbidden(NOT_OWNER))
    }
}

/// Looks up the owner of `kind`/`id` in the store and applies [`check_owner`].
///
/// The owner always comes from the store, never from the request. A
/// resource that does not exist is reported as 404 before ownership is
/// considered.
pub async fn authorize_owner<S>(
    store: &S,
    ctx: &AuthContext,
    kind: ResourceKind,
    id: Uuid,
) -> Result<(), AppError>
where
    S: OwnershipStore,
{
    let owner_id = store
        .find_owner_id(kind, id)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow!("{} not found", kind.label())))?;

    check_owner(ctx, owner_id).inspect_err(|_| {
        tracing::warn!(
            user_id = %ctx.user_id,
            resource = kind.table(),
            resource_id = %id,
            "Ownership check denied"
        );
    })
}
