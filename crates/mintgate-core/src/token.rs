use std::sync::RwLock;

use tracing::{info, warn};

use mintgate_types::{
    Amount, PrincipalId, Role, TokenEvent, TokenEventKind, TokenMetadata, TransferRestriction,
};

use crate::error::TokenError;
use crate::ledger::BalanceBook;
use crate::restriction::Blacklist;
use crate::roles::RoleRegistry;
use crate::traits::TokenReader;

/// Role-gated fungible token, the single authority over ledger state.
///
/// Every mutating operation is one critical section: lock, check, apply,
/// record. Checks always run before the first write, so a failed operation
/// is observationally a no-op; balances, supply, roles, and the journal all
/// keep their prior values.
///
/// Operations are gated as follows:
/// - `grant_role` / `revoke_role` require the caller to hold `Owner`
/// - `mint` requires `Minter`, `burn` requires `Burner`
/// - `revoke` (clawback) requires `Revoker`
/// - `set_blacklisted` requires `Blacklister`
/// - `transfer` requires no role, only that the caller owns the balance
/// - queries require nothing
pub struct RestrictedToken {
    inner: RwLock<Option<TokenState>>,
}

/// Full ledger state, existing only after `initialize`.
struct TokenState {
    metadata: TokenMetadata,
    roles: RoleRegistry,
    book: BalanceBook,
    blacklist: Blacklist,
    journal: Vec<TokenEvent>,
}

impl TokenState {
    fn require_role(&self, role: Role, caller: &PrincipalId) -> Result<(), TokenError> {
        if self.roles.has_role(role, caller) {
            Ok(())
        } else {
            warn!(
                caller = %caller,
                role = %role,
                "Operation refused: caller does not hold required role"
            );
            Err(TokenError::unauthorized(role, caller))
        }
    }

    fn record(&mut self, kind: TokenEventKind) {
        self.journal.push(TokenEvent::record(kind));
    }
}

impl RestrictedToken {
    /// Create an uninitialized token. Every operation except `initialize`
    /// fails with `NotInitialized` until the token is set up.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(None),
        }
    }

    /// Set up the token exactly once: fix the metadata and grant `Owner` to
    /// the admin principal so it can bootstrap the role relation.
    ///
    /// The deployment boundary is trusted, so `caller` is recorded in the
    /// journal but not itself authorized.
    pub fn initialize(
        &self,
        name: impl Into<String>,
        symbol: impl Into<String>,
        decimals: u8,
        admin: &PrincipalId,
        caller: &PrincipalId,
    ) -> Result<(), TokenError> {
        let mut guard = self.inner.write().map_err(|_| TokenError::StatePoisoned)?;
        if guard.is_some() {
            return Err(TokenError::AlreadyInitialized);
        }

        let metadata = TokenMetadata::new(name, symbol, decimals, admin.clone())?;

        let mut state = TokenState {
            metadata,
            roles: RoleRegistry::new(),
            book: BalanceBook::new(),
            blacklist: Blacklist::new(),
            journal: Vec::new(),
        };
        state.roles.grant(Role::Owner, admin);
        state.record(TokenEventKind::Initialized {
            admin: admin.clone(),
            caller: caller.clone(),
        });

        info!(
            name = %state.metadata.name,
            symbol = %state.metadata.symbol,
            admin = %admin,
            "Token initialized"
        );

        *guard = Some(state);
        Ok(())
    }

    // ===== ROLE OPERATIONS =====

    /// Grant `role` to `principal`. Idempotent: regranting a held role
    /// succeeds without recording anything.
    pub fn grant_role(
        &self,
        role: Role,
        principal: &PrincipalId,
        caller: &PrincipalId,
    ) -> Result<(), TokenError> {
        let mut guard = self.inner.write().map_err(|_| TokenError::StatePoisoned)?;
        let state = guard.as_mut().ok_or(TokenError::NotInitialized)?;
        state.require_role(Role::Owner, caller)?;

        if state.roles.grant(role, principal) {
            state.record(TokenEventKind::RoleGranted {
                role,
                principal: principal.clone(),
                granted_by: caller.clone(),
            });
            info!(role = %role, principal = %principal, granted_by = %caller, "Role granted");
        }
        Ok(())
    }

    /// Remove `role` from `principal`. Symmetric no-op when the membership
    /// does not exist.
    pub fn revoke_role(
        &self,
        role: Role,
        principal: &PrincipalId,
        caller: &PrincipalId,
    ) -> Result<(), TokenError> {
        let mut guard = self.inner.write().map_err(|_| TokenError::StatePoisoned)?;
        let state = guard.as_mut().ok_or(TokenError::NotInitialized)?;
        state.require_role(Role::Owner, caller)?;

        if state.roles.revoke(role, principal) {
            state.record(TokenEventKind::RoleRevoked {
                role,
                principal: principal.clone(),
                revoked_by: caller.clone(),
            });
            warn!(role = %role, principal = %principal, revoked_by = %caller, "Role revoked");
        }
        Ok(())
    }

    // ===== SUPPLY OPERATIONS =====

    /// Create `amount` new tokens on `recipient`'s balance.
    pub fn mint(
        &self,
        amount: Amount,
        recipient: &PrincipalId,
        caller: &PrincipalId,
    ) -> Result<(), TokenError> {
        let mut guard = self.inner.write().map_err(|_| TokenError::StatePoisoned)?;
        let state = guard.as_mut().ok_or(TokenError::NotInitialized)?;
        state.require_role(Role::Minter, caller)?;

        state.book.mint(recipient, amount)?;
        state.record(TokenEventKind::Minted {
            recipient: recipient.clone(),
            amount,
        });
        info!(recipient = %recipient, amount = %amount, "Tokens minted");
        Ok(())
    }

    /// Destroy `amount` tokens from `holder`'s balance, shrinking supply.
    ///
    /// Burning skips the blacklist: administrative removal has to work
    /// against frozen accounts as well.
    pub fn burn(
        &self,
        amount: Amount,
        holder: &PrincipalId,
        caller: &PrincipalId,
    ) -> Result<(), TokenError> {
        let mut guard = self.inner.write().map_err(|_| TokenError::StatePoisoned)?;
        let state = guard.as_mut().ok_or(TokenError::NotInitialized)?;
        state.require_role(Role::Burner, caller)?;

        state.book.burn(holder, amount)?;
        state.record(TokenEventKind::Burned {
            holder: holder.clone(),
            amount,
        });
        warn!(holder = %holder, amount = %amount, burned_by = %caller, "Tokens burned");
        Ok(())
    }

    /// Forcibly move `amount` from `from` to `to` without the holder's
    /// consent: the administrative clawback.
    ///
    /// Supply is conserved and the blacklist is not consulted. Insufficient
    /// source funds surface exactly as they do for a transfer, and a
    /// self-revoke commits as a no-op, recording nothing.
    pub fn revoke(
        &self,
        amount: Amount,
        from: &PrincipalId,
        to: &PrincipalId,
        caller: &PrincipalId,
    ) -> Result<(), TokenError> {
        let mut guard = self.inner.write().map_err(|_| TokenError::StatePoisoned)?;
        let state = guard.as_mut().ok_or(TokenError::NotInitialized)?;
        state.require_role(Role::Revoker, caller)?;

        state.book.transfer(from, to, amount)?;
        if from != to {
            state.record(TokenEventKind::Revoked {
                from: from.clone(),
                to: to.clone(),
                amount,
            });
            warn!(from = %from, to = %to, amount = %amount, revoked_by = %caller, "Tokens revoked");
        }
        Ok(())
    }

    // ===== TRANSFER OPERATIONS =====

    /// Move `amount` of the caller's own tokens to `to`.
    ///
    /// A self-transfer is validated like any other transfer and commits as a
    /// no-op, recording nothing.
    pub fn transfer(
        &self,
        amount: Amount,
        from: &PrincipalId,
        to: &PrincipalId,
        caller: &PrincipalId,
    ) -> Result<(), TokenError> {
        let mut guard = self.inner.write().map_err(|_| TokenError::StatePoisoned)?;
        let state = guard.as_mut().ok_or(TokenError::NotInitialized)?;

        if caller != from {
            warn!(
                caller = %caller,
                from = %from,
                "Transfer refused: caller is not the balance holder"
            );
            return Err(TokenError::SenderMismatch {
                caller: caller.clone(),
                from: from.clone(),
            });
        }

        let restriction = state.blacklist.detect(from, to);
        if restriction.is_restricted() {
            warn!(
                from = %from,
                to = %to,
                code = restriction.code(),
                "Transfer refused by restriction rules"
            );
            return Err(TokenError::TransferRestricted(restriction));
        }

        state.book.transfer(from, to, amount)?;
        if from != to {
            state.record(TokenEventKind::Transferred {
                from: from.clone(),
                to: to.clone(),
                amount,
            });
            info!(from = %from, to = %to, amount = %amount, "Tokens transferred");
        }
        Ok(())
    }

    // ===== RESTRICTION OPERATIONS =====

    /// Add or remove `principal` on the transfer blacklist. Repeating the
    /// current membership records nothing.
    pub fn set_blacklisted(
        &self,
        principal: &PrincipalId,
        blacklisted: bool,
        caller: &PrincipalId,
    ) -> Result<(), TokenError> {
        let mut guard = self.inner.write().map_err(|_| TokenError::StatePoisoned)?;
        let state = guard.as_mut().ok_or(TokenError::NotInitialized)?;
        state.require_role(Role::Blacklister, caller)?;

        if state.blacklist.set(principal, blacklisted) {
            state.record(TokenEventKind::BlacklistUpdated {
                principal: principal.clone(),
                blacklisted,
                updated_by: caller.clone(),
            });
            info!(
                principal = %principal,
                blacklisted,
                updated_by = %caller,
                "Blacklist updated"
            );
        }
        Ok(())
    }

    /// Restriction that would currently apply to a transfer between the two
    /// parties, without executing anything.
    pub fn detect_transfer_restriction(
        &self,
        from: &PrincipalId,
        to: &PrincipalId,
    ) -> Result<TransferRestriction, TokenError> {
        let guard = self.inner.read().map_err(|_| TokenError::StatePoisoned)?;
        let state = guard.as_ref().ok_or(TokenError::NotInitialized)?;
        Ok(state.blacklist.detect(from, to))
    }

    // ===== QUERY OPERATIONS =====

    pub fn total_supply(&self) -> Result<Amount, TokenError> {
        let guard = self.inner.read().map_err(|_| TokenError::StatePoisoned)?;
        let state = guard.as_ref().ok_or(TokenError::NotInitialized)?;
        Ok(state.book.total_supply())
    }

    pub fn balance_of(&self, principal: &PrincipalId) -> Result<Amount, TokenError> {
        let guard = self.inner.read().map_err(|_| TokenError::StatePoisoned)?;
        let state = guard.as_ref().ok_or(TokenError::NotInitialized)?;
        Ok(state.book.balance_of(principal))
    }

    pub fn has_role(&self, role: Role, principal: &PrincipalId) -> Result<bool, TokenError> {
        let guard = self.inner.read().map_err(|_| TokenError::StatePoisoned)?;
        let state = guard.as_ref().ok_or(TokenError::NotInitialized)?;
        Ok(state.roles.has_role(role, principal))
    }

    pub fn is_blacklisted(&self, principal: &PrincipalId) -> Result<bool, TokenError> {
        let guard = self.inner.read().map_err(|_| TokenError::StatePoisoned)?;
        let state = guard.as_ref().ok_or(TokenError::NotInitialized)?;
        Ok(state.blacklist.contains(principal))
    }

    pub fn metadata(&self) -> Result<TokenMetadata, TokenError> {
        let guard = self.inner.read().map_err(|_| TokenError::StatePoisoned)?;
        let state = guard.as_ref().ok_or(TokenError::NotInitialized)?;
        Ok(state.metadata.clone())
    }

    /// Journal of committed mutations, oldest first.
    pub fn events(&self) -> Result<Vec<TokenEvent>, TokenError> {
        let guard = self.inner.read().map_err(|_| TokenError::StatePoisoned)?;
        let state = guard.as_ref().ok_or(TokenError::NotInitialized)?;
        Ok(state.journal.clone())
    }

    /// Re-derive the balance sum and verify it against the supply counter.
    pub fn verify_conservation(&self) -> Result<(), TokenError> {
        let guard = self.inner.read().map_err(|_| TokenError::StatePoisoned)?;
        let state = guard.as_ref().ok_or(TokenError::NotInitialized)?;
        state.book.verify_conservation()
    }
}

impl Default for RestrictedToken {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenReader for RestrictedToken {
    fn total_supply(&self) -> Result<Amount, TokenError> {
        RestrictedToken::total_supply(self)
    }

    fn balance_of(&self, principal: &PrincipalId) -> Result<Amount, TokenError> {
        RestrictedToken::balance_of(self, principal)
    }

    fn has_role(&self, role: Role, principal: &PrincipalId) -> Result<bool, TokenError> {
        RestrictedToken::has_role(self, role, principal)
    }

    fn is_blacklisted(&self, principal: &PrincipalId) -> Result<bool, TokenError> {
        RestrictedToken::is_blacklisted(self, principal)
    }

    fn metadata(&self) -> Result<TokenMetadata, TokenError> {
        RestrictedToken::metadata(self)
    }
}
