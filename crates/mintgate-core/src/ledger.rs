use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use mintgate_types::{Amount, PrincipalId};

use crate::error::TokenError;

/// Account balances plus the running supply counter.
///
/// Primitives here know nothing about roles or restrictions; they enforce
/// only the arithmetic contract:
/// - amounts must be non-zero
/// - every update is checked; overflow is an error, never a wrap
/// - a failed primitive leaves both the map and the counter untouched
/// - `total_supply` equals the balance sum after every successful call
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BalanceBook {
    balances: HashMap<PrincipalId, Amount>,
    total_supply: Amount,
}

impl BalanceBook {
    pub fn new() -> Self {
        Self {
            balances: HashMap::new(),
            total_supply: 0,
        }
    }

    /// Balance of `principal`; absent accounts read as zero.
    pub fn balance_of(&self, principal: &PrincipalId) -> Amount {
        self.balances.get(principal).copied().unwrap_or(0)
    }

    pub fn total_supply(&self) -> Amount {
        self.total_supply
    }

    /// Create `amount` new tokens on `recipient`'s balance.
    pub fn mint(&mut self, recipient: &PrincipalId, amount: Amount) -> Result<(), TokenError> {
        require_nonzero(amount)?;

        let new_supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(TokenError::ArithmeticOverflow)?;
        let new_balance = self
            .balance_of(recipient)
            .checked_add(amount)
            .ok_or(TokenError::ArithmeticOverflow)?;

        self.total_supply = new_supply;
        self.balances.insert(recipient.clone(), new_balance);
        Ok(())
    }

    /// Destroy `amount` tokens from `holder`'s balance.
    pub fn burn(&mut self, holder: &PrincipalId, amount: Amount) -> Result<(), TokenError> {
        require_nonzero(amount)?;

        let have = self.balance_of(holder);
        let remaining = have
            .checked_sub(amount)
            .ok_or(TokenError::InsufficientBalance { have, need: amount })?;
        // supply >= any single balance, so this cannot fail once the balance
        // check passed
        let new_supply = self
            .total_supply
            .checked_sub(amount)
            .ok_or(TokenError::ArithmeticOverflow)?;

        self.total_supply = new_supply;
        self.set_balance(holder, remaining);
        Ok(())
    }

    /// Move `amount` from `from` to `to`; supply is unchanged.
    ///
    /// A self-transfer is validated like any other transfer and then commits
    /// as a no-op.
    pub fn transfer(
        &mut self,
        from: &PrincipalId,
        to: &PrincipalId,
        amount: Amount,
    ) -> Result<(), TokenError> {
        require_nonzero(amount)?;

        let have = self.balance_of(from);
        let remaining = have
            .checked_sub(amount)
            .ok_or(TokenError::InsufficientBalance { have, need: amount })?;

        if from == to {
            return Ok(());
        }

        let receiving = self
            .balance_of(to)
            .checked_add(amount)
            .ok_or(TokenError::ArithmeticOverflow)?;

        self.set_balance(from, remaining);
        self.balances.insert(to.clone(), receiving);
        Ok(())
    }

    /// Re-derive the balance sum and verify it against the supply counter.
    pub fn verify_conservation(&self) -> Result<(), TokenError> {
        let mut balance_sum: Amount = 0;
        for amount in self.balances.values() {
            balance_sum = balance_sum
                .checked_add(*amount)
                .ok_or(TokenError::ArithmeticOverflow)?;
        }

        if balance_sum != self.total_supply {
            return Err(TokenError::ConservationViolated {
                total_supply: self.total_supply,
                balance_sum,
            });
        }

        Ok(())
    }

    /// Funded accounts and their balances, in no particular order.
    pub fn balances(&self) -> impl Iterator<Item = (&PrincipalId, Amount)> {
        self.balances
            .iter()
            .map(|(principal, amount)| (principal, *amount))
    }

    fn set_balance(&mut self, principal: &PrincipalId, amount: Amount) {
        // Zero balances are dropped so the map carries only funded accounts.
        if amount == 0 {
            self.balances.remove(principal);
        } else {
            self.balances.insert(principal.clone(), amount);
        }
    }
}

impl Default for BalanceBook {
    fn default() -> Self {
        Self::new()
    }
}

fn require_nonzero(amount: Amount) -> Result<(), TokenError> {
    if amount == 0 {
        return Err(TokenError::InvalidAmount);
    }
    Ok(())
}
