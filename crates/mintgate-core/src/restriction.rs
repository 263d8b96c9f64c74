use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use mintgate_types::{PrincipalId, TransferRestriction};

/// Blacklist consulted by ordinary transfers.
///
/// Administrative clawback and burn skip this check on purpose: recovery has
/// to work against exactly the accounts that are frozen.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Blacklist {
    members: HashSet<PrincipalId>,
}

impl Blacklist {
    pub fn new() -> Self {
        Self {
            members: HashSet::new(),
        }
    }

    /// Set membership for `principal`. Returns whether anything changed.
    pub fn set(&mut self, principal: &PrincipalId, blacklisted: bool) -> bool {
        if blacklisted {
            self.members.insert(principal.clone())
        } else {
            self.members.remove(principal)
        }
    }

    pub fn contains(&self, principal: &PrincipalId) -> bool {
        self.members.contains(principal)
    }

    /// Restriction that would apply to a transfer between the two parties.
    pub fn detect(&self, from: &PrincipalId, to: &PrincipalId) -> TransferRestriction {
        if self.contains(from) || self.contains(to) {
            TransferRestriction::Blacklist
        } else {
            TransferRestriction::None
        }
    }
}

impl Default for Blacklist {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> PrincipalId {
        PrincipalId::new("alice")
    }

    fn bob() -> PrincipalId {
        PrincipalId::new("bob")
    }

    #[test]
    fn either_party_on_the_list_restricts() {
        let mut blacklist = Blacklist::new();
        assert_eq!(blacklist.detect(&alice(), &bob()), TransferRestriction::None);

        blacklist.set(&alice(), true);
        assert_eq!(
            blacklist.detect(&alice(), &bob()),
            TransferRestriction::Blacklist
        );
        assert_eq!(
            blacklist.detect(&bob(), &alice()),
            TransferRestriction::Blacklist
        );
    }

    #[test]
    fn removal_restores_transfers() {
        let mut blacklist = Blacklist::new();
        assert!(blacklist.set(&alice(), true));
        assert!(blacklist.set(&alice(), false));
        assert!(!blacklist.contains(&alice()));
        assert_eq!(blacklist.detect(&alice(), &bob()), TransferRestriction::None);
    }

    #[test]
    fn set_reports_whether_membership_changed() {
        let mut blacklist = Blacklist::new();
        assert!(blacklist.set(&bob(), true));
        assert!(!blacklist.set(&bob(), true));
        assert!(blacklist.set(&bob(), false));
        assert!(!blacklist.set(&bob(), false));
    }
}
