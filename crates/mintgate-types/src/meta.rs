use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::principal::PrincipalId;
use crate::Amount;

/// Longest accepted token name, in bytes.
pub const MAX_NAME_LEN: usize = 32;
/// Longest accepted ticker symbol, in bytes.
pub const MAX_SYMBOL_LEN: usize = 10;

/// Rejection reasons for malformed token metadata.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MetadataError {
    #[error("token name must be between 1 and {max} bytes, got {0}", max = MAX_NAME_LEN)]
    NameLength(usize),
    #[error("token symbol must be between 1 and {max} bytes, got {0}", max = MAX_SYMBOL_LEN)]
    SymbolLength(usize),
}

/// Descriptive token metadata, fixed once at initialization.
///
/// `decimals` carries no ledger semantics: balances and supply are always
/// base units, and the field only parameterizes [`TokenMetadata::format_amount`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    /// Principal granted the owner role when the token was initialized.
    pub admin: PrincipalId,
    pub initialized_at: DateTime<Utc>,
}

impl TokenMetadata {
    /// Validate and construct metadata for a new token.
    pub fn new(
        name: impl Into<String>,
        symbol: impl Into<String>,
        decimals: u8,
        admin: PrincipalId,
    ) -> Result<Self, MetadataError> {
        let name = name.into();
        let symbol = symbol.into();

        if name.is_empty() || name.len() > MAX_NAME_LEN {
            return Err(MetadataError::NameLength(name.len()));
        }
        if symbol.is_empty() || symbol.len() > MAX_SYMBOL_LEN {
            return Err(MetadataError::SymbolLength(symbol.len()));
        }

        Ok(Self {
            name,
            symbol,
            decimals,
            admin,
            initialized_at: Utc::now(),
        })
    }

    /// Render a base-unit amount at the configured display precision.
    ///
    /// Falls back to base units when `decimals` exceeds the representable
    /// scale of [`Amount`].
    pub fn format_amount(&self, amount: Amount) -> String {
        if self.decimals == 0 {
            return amount.to_string();
        }
        let scale = match 10u128.checked_pow(u32::from(self.decimals)) {
            Some(scale) => scale,
            None => return amount.to_string(),
        };
        format!(
            "{}.{:0width$}",
            amount / scale,
            amount % scale,
            width = usize::from(self.decimals)
        )
    }
}
