// Path: crates/api/src/transaction/context.rs
//! Defines the stable context for transaction execution.

use quill_types::app::AccountId;
use quill_types::config::RentConfig;
use quill_types::error::TransactionError;

/// Provides stable, read-only context to programs during execution.
#[derive(Clone, Copy, Debug)]
pub struct TxContext<'a> {
    /// The slot the transaction will be committed in.
    pub slot: u64,
    /// The host clock for this transaction, in seconds since the Unix epoch.
    /// Programs read time from here and nowhere else.
    pub unix_timestamp: i64,
    /// The program being invoked.
    pub program_id: AccountId,
    /// Identities whose signatures the host has verified for this transaction.
    /// This is the authoritative source for permission checks within programs.
    pub signers: &'a [AccountId],
    /// Rent parameters used when allocating new slots.
    pub rent: &'a RentConfig,
}

impl TxContext<'_> {
    /// Returns true if `account` signed the transaction.
    pub fn is_signer(&self, account: &AccountId) -> bool {
        self.signers.contains(account)
    }

    /// Fails with `MissingRequiredSignature` unless `account` signed the transaction.
    pub fn require_signer(&self, account: &AccountId) -> Result<(), TransactionError> {
        if self.is_signer(account) {
            Ok(())
        } else {
            Err(TransactionError::MissingRequiredSignature(*account))
        }
    }
}
