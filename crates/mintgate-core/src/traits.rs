use mintgate_types::{Amount, PrincipalId, Role, TokenMetadata};

use crate::error::TokenError;

/// Read boundary for token query operations.
///
/// Queries carry no authorization; the only failure modes are an
/// uninitialized token and a poisoned state lock.
pub trait TokenReader {
    fn total_supply(&self) -> Result<Amount, TokenError>;

    fn balance_of(&self, principal: &PrincipalId) -> Result<Amount, TokenError>;

    fn has_role(&self, role: Role, principal: &PrincipalId) -> Result<bool, TokenError>;

    fn is_blacklisted(&self, principal: &PrincipalId) -> Result<bool, TokenError>;

    fn metadata(&self) -> Result<TokenMetadata, TokenError>;
}
