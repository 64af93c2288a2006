// Path: crates/types/src/app/transaction.rs

//! Transactions submitted to the host runtime.

use crate::app::AccountId;
use parity_scale_codec::{Decode, Encode};
use serde::{Deserialize, Serialize};

/// A request to invoke one method of one program.
///
/// `signers` lists the identities whose signatures the host has already verified.
/// Programs trust this list; they never see signature bytes.
#[derive(Encode, Decode, Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// The program that handles the call.
    pub program_id: AccountId,
    /// Versioned method name, e.g. `send_post@v1`.
    pub method: String,
    /// SCALE-encoded method parameters.
    pub params: Vec<u8>,
    /// Verified signers.
    pub signers: Vec<AccountId>,
}

impl Transaction {
    /// Creates an unsigned transaction.
    pub fn new(program_id: AccountId, method: impl Into<String>, params: Vec<u8>) -> Self {
        Self {
            program_id,
            method: method.into(),
            params,
            signers: Vec::new(),
        }
    }

    /// Adds a signer, ignoring duplicates.
    pub fn with_signer(mut self, signer: AccountId) -> Self {
        if !self.signers.contains(&signer) {
            self.signers.push(signer);
        }
        self
    }
}

/// Confirmation of a committed transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxReceipt {
    /// The slot in which the transaction was committed.
    pub slot: u64,
    /// Host clock at commit time, in seconds since the Unix epoch.
    pub timestamp: i64,
}
