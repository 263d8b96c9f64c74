//! Mintgate core: the role-gated fungible token ledger engine.
//!
//! This crate enforces the ledger invariants with explicit role gating,
//! checked balance arithmetic, transfer restriction rules, and an
//! append-only journal of committed mutations.

#![deny(unsafe_code)]

pub mod error;
pub mod ledger;
pub mod restriction;
pub mod roles;
pub mod token;
pub mod traits;

pub use error::TokenError;
pub use ledger::BalanceBook;
pub use restriction::Blacklist;
pub use roles::RoleRegistry;
pub use token::RestrictedToken;
pub use traits::TokenReader;

// Re-export the shared data model so embedders need only one dependency.
pub use mintgate_types::{
    Amount, MetadataError, PrincipalId, Role, TokenEvent, TokenEventKind, TokenMetadata,
    TransferRestriction,
};
