//! In-memory stores for exercising the pipeline without a database.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::Utc;
use uuid::Uuid;

use ironlog_core::AppError;

use crate::role::Role;
use crate::store::{Identity, IdentityStore, OwnershipStore, ResourceKind};

#[derive(Default)]
pub struct MemoryStore {
    identities: Mutex<HashMap<Uuid, Identity>>,
    owners: HashMap<(ResourceKind, Uuid), Uuid>,
}

impl MemoryStore {
    pub fn add_identity(&self, email: &str, role: Role) -> Uuid {
        let id = Uuid::new_v4();
        let identity = Identity {
            id,
            email: email.to_string(),
            password_hash: String::new(),
            role,
            created_at: Utc::now(),
        };
        self.identities.lock().unwrap().insert(id, identity);
        id
    }

    pub fn set_role(&self, id: Uuid, role: Role) {
        if let Some(identity) = self.identities.lock().unwrap().get_mut(&id) {
            identity.role = role;
        }
    }

    pub fn with_resource(mut self, kind: ResourceKind, id: Uuid, owner_id: Uuid) -> Self {
        self.owners.insert((kind, id), owner_id);
        self
    }
}

impl IdentityStore for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Identity>, AppError> {
        Ok(self.identities.lock().unwrap().get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>, AppError> {
        Ok(self
            .identities
            .lock()
            .unwrap()
            .values()
            .find(|identity| identity.email.eq_ignore_ascii_case(email))
            .cloned())
    }
}

impl OwnershipStore for MemoryStore {
    async fn find_owner_id(&self, kind: ResourceKind, id: Uuid) -> Result<Option<Uuid>, AppError> {
        Ok(self.owners.get(&(kind, id)).copied())
    }
}
