//! Administrator routes: catalog management and workouts of any user.
//!
//! Every route sits behind `require_admin`; handlers additionally take the
//! [`AdminUser`](crate::middleware::role::AdminUser) extractor.

pub mod controller;
pub mod router;

pub use router::init_admin_router;
