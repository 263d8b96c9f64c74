use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of administrative capabilities recognized by the token.
///
/// Authorization never consults dynamic policy, only membership of a
/// principal under one of these variants. Each mutating ledger operation is
/// gated on exactly one role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Administers the role relation itself: may grant and revoke any role.
    Owner,
    /// May create new tokens, growing total supply.
    Minter,
    /// May destroy tokens, shrinking total supply.
    Burner,
    /// May forcibly move tokens between accounts; supply is conserved.
    Revoker,
    /// May add and remove principals on the transfer blacklist.
    Blacklister,
}

impl Role {
    /// Every role, in declaration order.
    pub const ALL: [Role; 5] = [
        Role::Owner,
        Role::Minter,
        Role::Burner,
        Role::Revoker,
        Role::Blacklister,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Owner => "owner",
            Role::Minter => "minter",
            Role::Burner => "burner",
            Role::Revoker => "revoker",
            Role::Blacklister => "blacklister",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serialization() {
        for role in &Role::ALL {
            let json = serde_json::to_string(role).unwrap();
            assert_eq!(json, format!("\"{}\"", role.as_str()));

            let restored: Role = serde_json::from_str(&json).unwrap();
            assert_eq!(restored, *role);
        }
    }
}
