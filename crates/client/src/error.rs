// Path: crates/client/src/error.rs

//! Errors surfaced to client callers.

use quill_types::app::AccountId;
use quill_types::error::{CorruptRecord, ErrorCode, StateError, TransactionError};
use thiserror::Error;

/// Errors returned by [`crate::Workspace`] operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The ledger rejected the transaction. Post validation messages are preserved verbatim.
    #[error(transparent)]
    Transaction(#[from] TransactionError),
    /// The ledger's state could not be read.
    #[error("Ledger read failed: {0}")]
    State(#[from] StateError),
    /// No account exists at the address.
    #[error("No account at {0}")]
    NotFound(AccountId),
    /// The account exists but is not a post of this program.
    #[error("Account {0} is not a post")]
    NotAPost(AccountId),
    /// The post slot could not be decoded.
    #[error("Corrupt post at {address}: {source}")]
    Corrupt {
        /// The slot address.
        address: AccountId,
        /// The decode failure.
        source: CorruptRecord,
    },
}

impl ErrorCode for ClientError {
    fn code(&self) -> &'static str {
        match self {
            Self::Transaction(e) => e.code(),
            Self::State(e) => e.code(),
            Self::NotFound(_) => "CLIENT_NOT_FOUND",
            Self::NotAPost(_) => "CLIENT_NOT_A_POST",
            Self::Corrupt { source, .. } => source.code(),
        }
    }
}
