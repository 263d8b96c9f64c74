use thiserror::Error;

use mintgate_types::{Amount, MetadataError, PrincipalId, Role, TransferRestriction};

/// Errors returned by token ledger operations.
///
/// Each variant corresponds to one violated check. Operations return the
/// first violation encountered and leave state untouched; there is no
/// partial application and no internal retry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("token has not been initialized")]
    NotInitialized,

    #[error("token has already been initialized")]
    AlreadyInitialized,

    #[error("caller {caller} does not hold required role {role}")]
    Unauthorized { role: Role, caller: PrincipalId },

    #[error("caller {caller} cannot transfer tokens held by {from}")]
    SenderMismatch {
        caller: PrincipalId,
        from: PrincipalId,
    },

    #[error("token amount must be greater than zero")]
    InvalidAmount,

    #[error("insufficient balance: have {have}, need {need}")]
    InsufficientBalance { have: Amount, need: Amount },

    #[error("arithmetic overflow while updating ledger totals")]
    ArithmeticOverflow,

    #[error("transfer restricted: {0}")]
    TransferRestricted(TransferRestriction),

    #[error("invalid token metadata: {0}")]
    Metadata(#[from] MetadataError),

    #[error("conservation violated: total supply {total_supply} != balance sum {balance_sum}")]
    ConservationViolated {
        total_supply: Amount,
        balance_sum: Amount,
    },

    #[error("token state lock poisoned")]
    StatePoisoned,
}

impl TokenError {
    /// Shorthand for the role-gate failure on `required` by `caller`.
    pub fn unauthorized(required: Role, caller: &PrincipalId) -> Self {
        TokenError::Unauthorized {
            role: required,
            caller: caller.clone(),
        }
    }
}
