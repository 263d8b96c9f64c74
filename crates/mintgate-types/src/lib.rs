//! Shared type definitions for the Mintgate token ledger.
//!
//! This crate provides the principal/role vocabulary, token metadata, and
//! journal event records used by the ledger engine and by anything embedding
//! it.

#![deny(unsafe_code)]

pub mod event;
pub mod meta;
pub mod principal;
pub mod restriction;
pub mod role;

/// Base-unit token quantity. Unsigned, 128-bit, and never implicitly scaled;
/// `decimals` in [`meta::TokenMetadata`] affects display only.
pub type Amount = u128;

// Re-export primary types at crate root for ergonomic use.
pub use event::{TokenEvent, TokenEventKind};
pub use meta::{MetadataError, TokenMetadata, MAX_NAME_LEN, MAX_SYMBOL_LEN};
pub use principal::PrincipalId;
pub use restriction::TransferRestriction;
pub use role::Role;
