//! # Ironlog Auth
//!
//! The authorization pipeline of the Ironlog API, independent of HTTP:
//!
//! - [`jwt`]: signing and verifying session tokens
//! - [`verifier`]: turning an `Authorization` header into an [`AuthContext`]
//! - [`gate`]: role and ownership checks
//! - [`store`]: identity and ownership lookups, with a Postgres backend
//!
//! A protected request runs token verification, then the role gate where
//! the route requires one, then the ownership gate for user-scoped
//! resources. Each stage either passes or rejects with an [`AppError`]
//! carrying 401, 403 or 404.
//!
//! # Example
//!
//! ```ignore
//! use ironlog_auth::{PgAuthStore, ResourceKind, authenticate, authorize_owner};
//!
//! let store = PgAuthStore::new(pool);
//! let ctx = authenticate(&store, &jwt_config, headers.get("authorization")).await?;
//! authorize_owner(&store, &ctx, ResourceKind::Workout, workout_id).await?;
//! ```
//!
//! [`AppError`]: ironlog_core::AppError

pub mod claims;
pub mod context;
pub mod gate;
pub mod jwt;
#[cfg(test)]
mod memory;
pub mod role;
pub mod store;
pub mod verifier;

// Re-export commonly used types at crate root
pub use claims::Claims;
pub use context::AuthContext;
pub use gate::{authorize_owner, check_owner, require_role};
pub use jwt::{TokenError, create_access_token, verify_token};
pub use role::Role;
pub use store::{Identity, IdentityStore, OwnershipStore, PgAuthStore, ResourceKind};
pub use verifier::{authenticate, bearer_token};
