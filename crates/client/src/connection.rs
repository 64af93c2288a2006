// Path: crates/client/src/connection.rs

//! The seam between a [`crate::Workspace`] and the ledger it talks to.

use crate::error::ClientError;
use async_trait::async_trait;
use quill_execution::Ledger;
use quill_types::app::{Account, AccountFilter, AccountId, Transaction, TxReceipt};
use quill_types::error::TransactionError;

/// Submits transactions to, and reads committed accounts from, a ledger.
#[async_trait]
pub trait LedgerConnection: Send + Sync {
    /// Submits a signed transaction and waits for it to commit.
    async fn send_transaction(&self, tx: &Transaction) -> Result<TxReceipt, TransactionError>;

    /// Reads one committed account.
    fn get_account(&self, address: &AccountId) -> Result<Option<Account>, ClientError>;

    /// Returns the committed accounts owned by `program_id` whose data satisfies
    /// every filter, in ascending address order.
    fn get_program_accounts(
        &self,
        program_id: &AccountId,
        filters: &[AccountFilter],
    ) -> Result<Vec<(AccountId, Account)>, ClientError>;
}

#[async_trait]
impl LedgerConnection for Ledger {
    async fn send_transaction(&self, tx: &Transaction) -> Result<TxReceipt, TransactionError> {
        self.submit(tx).await
    }

    fn get_account(&self, address: &AccountId) -> Result<Option<Account>, ClientError> {
        Ok(Ledger::get_account(self, address)?)
    }

    fn get_program_accounts(
        &self,
        program_id: &AccountId,
        filters: &[AccountFilter],
    ) -> Result<Vec<(AccountId, Account)>, ClientError> {
        Ok(Ledger::get_program_accounts(self, program_id, filters)?)
    }
}
