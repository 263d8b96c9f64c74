use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use mintgate_types::{PrincipalId, Role};

/// Role membership relation: which principals hold which capability.
///
/// The registry is the pure relation; the policy of who may change it lives
/// in the gateway. Memberships are:
/// - many-to-many across the closed [`Role`] set
/// - idempotent under grant (regranting a held role changes nothing)
/// - symmetric under revoke (removing an absent membership changes nothing)
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoleRegistry {
    memberships: HashMap<Role, HashSet<PrincipalId>>,
}

impl RoleRegistry {
    pub fn new() -> Self {
        Self {
            memberships: HashMap::new(),
        }
    }

    /// Add `principal` to `role`. Returns whether the membership is new.
    pub fn grant(&mut self, role: Role, principal: &PrincipalId) -> bool {
        self.memberships
            .entry(role)
            .or_default()
            .insert(principal.clone())
    }

    /// Remove `principal` from `role`. Returns whether a membership existed.
    pub fn revoke(&mut self, role: Role, principal: &PrincipalId) -> bool {
        self.memberships
            .get_mut(&role)
            .map(|holders| holders.remove(principal))
            .unwrap_or(false)
    }

    /// Check whether `principal` currently holds `role`.
    pub fn has_role(&self, role: Role, principal: &PrincipalId) -> bool {
        self.memberships
            .get(&role)
            .map(|holders| holders.contains(principal))
            .unwrap_or(false)
    }

    /// Current holders of `role`, in no particular order.
    pub fn members(&self, role: Role) -> impl Iterator<Item = &PrincipalId> {
        self.memberships.get(&role).into_iter().flatten()
    }
}

impl Default for RoleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
