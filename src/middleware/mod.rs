//! Authentication and authorization middleware.
//!
//! - [`auth`]: `require_auth` verifies the bearer token and attaches an
//!   [`AuthContext`](ironlog_auth::AuthContext); `AuthUser` reads it back.
//! - [`role`]: `require_admin` adds the admin role gate; `AdminUser` is the
//!   per-handler form of the same gate.
//! - [`ownership`]: owner checks for `/{id}` routes of user-scoped resources.
//!
//! ```ignore
//! Router::new()
//!     .nest("/users", init_users_router(state.clone())
//!         .route_layer(middleware::from_fn_with_state(state.clone(), require_auth)))
//!     .nest("/admin", init_admin_router(max_upload_bytes)
//!         .route_layer(middleware::from_fn_with_state(state.clone(), require_admin)));
//! ```

pub mod auth;
pub mod ownership;
pub mod role;
