// Path: crates/types/src/app/mod.rs

//! Core application-level data structures.

/// Host-runtime storage slots.
pub mod account;
/// Byte-offset filters over raw slot data.
pub mod filter;
pub(crate) mod hex_serde;
/// The canonical `AccountId`.
pub mod identity;
/// The post record and its frozen byte layout.
pub mod post;
/// Transactions and receipts.
pub mod transaction;

pub use account::Account;
pub use filter::{AccountFilter, Memcmp};
pub use identity::{AccountId, ACCOUNT_ID_LENGTH};
pub use post::Post;
pub use transaction::{Transaction, TxReceipt};
