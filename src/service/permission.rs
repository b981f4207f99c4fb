//! Role based authorization for commands.

use crate::{config::Config, model::command::Permission};

/// Role ids that grant elevated access.
#[derive(Debug, Clone)]
pub struct RolePolicy {
    /// Highest privilege role.
    pub owner_role_id: u64,
    /// Roles allowed to manage sessions.
    pub allowed_role_ids: Vec<u64>,
}

impl RolePolicy {
    pub fn new(owner_role_id: u64, allowed_role_ids: Vec<u64>) -> Self {
        Self {
            owner_role_id,
            allowed_role_ids,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.owner_role_id, config.allowed_role_ids.clone())
    }

    /// Whether the member holds the owner role.
    pub fn is_owner(&self, role_ids: &[u64]) -> bool {
        role_ids.contains(&self.owner_role_id)
    }

    /// Whether the member holds at least one allowed role.
    ///
    /// The owner role always counts as allowed.
    pub fn has_allowed_roles(&self, role_ids: &[u64]) -> bool {
        self.is_owner(role_ids)
            || role_ids
                .iter()
                .any(|role_id| self.allowed_role_ids.contains(role_id))
    }

    /// Whether a member with these roles may run a command needing `permission`.
    pub fn permits(&self, permission: Permission, role_ids: &[u64]) -> bool {
        match permission {
            Permission::Everyone => true,
            Permission::Staff => self.has_allowed_roles(role_ids),
            Permission::Owner => self.is_owner(role_ids),
        }
    }
}
