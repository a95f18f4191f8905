//! Identity attached to a request once its token has been verified.

use uuid::Uuid;

use crate::role::Role;
use crate::store::Identity;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    pub user_id: Uuid,
    pub email: String,
    /// Role read from the identity store, not from the token.
    pub role: Role,
}

impl AuthContext {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

impl From<&Identity> for AuthContext {
    fn from(identity: &Identity) -> Self {
        Self {
            user_id: identity.id,
            email: identity.email.clone(),
            role: identity.role,
        }
    }
}
