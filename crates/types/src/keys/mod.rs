// Path: crates/types/src/keys/mod.rs
//! Defines constants for well-known state keys and program identities.
//!
//! These constants provide a single source of truth for the keys used to store
//! ledger data in the state store.

use crate::app::AccountId;

/// The state key prefix for account slots: `account::{address}`.
pub const ACCOUNT_KEY_PREFIX: &[u8] = b"account::";

/// The state key for the persisted ledger status (slot counter).
pub const STATUS_KEY: &[u8] = b"ledger::status";

/// The system program. Owns funded, data-less accounts and performs allocations.
pub const SYSTEM_PROGRAM_ID: AccountId = AccountId([0u8; 32]);

/// The well-known id of the post program, `6Uys4XvKfzPo2a5JG4VzEkvY3dY4JwYPQ3WRG7MJsaBQ`.
pub const POST_PROGRAM_ID: AccountId = AccountId([
    81, 117, 105, 108, 108, 182, 155, 59, 176, 133, 94, 2, 100, 7, 36, 143, 111, 40, 85, 160, 54,
    48, 199, 114, 78, 17, 27, 79, 242, 8, 171, 95,
]);

/// Builds the canonical state key for an account slot.
pub fn account_key(address: &AccountId) -> Vec<u8> {
    [ACCOUNT_KEY_PREFIX, address.as_ref()].concat()
}
