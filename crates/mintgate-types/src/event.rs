use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::principal::PrincipalId;
use crate::role::Role;
use crate::Amount;

/// Journal record of one committed state mutation.
///
/// The journal is append-only: failed operations never produce an event, so
/// replaying the records of a token reproduces its state exactly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenEvent {
    pub event_id: String,
    pub recorded_at: DateTime<Utc>,
    pub kind: TokenEventKind,
}

/// What happened, with the principals and quantities involved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenEventKind {
    Initialized {
        admin: PrincipalId,
        caller: PrincipalId,
    },
    RoleGranted {
        role: Role,
        principal: PrincipalId,
        granted_by: PrincipalId,
    },
    RoleRevoked {
        role: Role,
        principal: PrincipalId,
        revoked_by: PrincipalId,
    },
    Minted {
        recipient: PrincipalId,
        amount: Amount,
    },
    Burned {
        holder: PrincipalId,
        amount: Amount,
    },
    Revoked {
        from: PrincipalId,
        to: PrincipalId,
        amount: Amount,
    },
    Transferred {
        from: PrincipalId,
        to: PrincipalId,
        amount: Amount,
    },
    BlacklistUpdated {
        principal: PrincipalId,
        blacklisted: bool,
        updated_by: PrincipalId,
    },
}

impl TokenEvent {
    /// Stamp a new journal record for a mutation that just committed.
    pub fn record(kind: TokenEventKind) -> Self {
        Self {
            event_id: Uuid::new_v4().to_string(),
            recorded_at: Utc::now(),
            kind,
        }
    }
}
