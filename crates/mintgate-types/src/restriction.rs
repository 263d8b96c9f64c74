use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of evaluating a proposed transfer against the restriction rules.
///
/// Codes are stable wire values: `0` always means unrestricted, so callers
/// may branch on the numeric code instead of the variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferRestriction {
    /// No rule applies; the transfer may proceed.
    None,
    /// Sender or recipient is blacklisted.
    Blacklist,
}

impl TransferRestriction {
    /// Stable numeric code for the restriction.
    pub fn code(&self) -> u8 {
        match self {
            TransferRestriction::None => 0,
            TransferRestriction::Blacklist => 1,
        }
    }

    /// Human-readable explanation suitable for surfacing to end users.
    pub fn message(&self) -> &'static str {
        match self {
            TransferRestriction::None => "no transfer restriction detected",
            TransferRestriction::Blacklist => {
                "sender or recipient is on the blacklist and prevented from transacting"
            }
        }
    }

    pub fn is_restricted(&self) -> bool {
        !matches!(self, TransferRestriction::None)
    }
}

impl fmt::Display for TransferRestriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(TransferRestriction::None.code(), 0);
        assert_eq!(TransferRestriction::Blacklist.code(), 1);
        assert!(!TransferRestriction::None.is_restricted());
        assert!(TransferRestriction::Blacklist.is_restricted());
    }

    #[test]
    fn every_code_has_a_message() {
        for restriction in [TransferRestriction::None, TransferRestriction::Blacklist] {
            assert!(!restriction.message().is_empty());
        }
    }
}
