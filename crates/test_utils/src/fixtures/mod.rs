//! Ledger fixtures for reproducible tests

use quill_execution::{FixedClock, Ledger};
use quill_types::app::AccountId;
use quill_types::config::LedgerConfig;
use quill_types::error::TransactionError;
use std::sync::Arc;

/// The frozen clock value every fixture ledger starts at.
pub const FIXTURE_EPOCH: i64 = 1_700_000_000;

/// Lamports airdropped to each funded identity: enough for many post slots.
pub const FIXTURE_AIRDROP: u64 = 1_000_000_000_000;

/// A ledger with a controllable clock.
pub struct TestLedger {
    /// The runtime.
    pub ledger: Arc<Ledger>,
    /// Its clock, frozen at [`FIXTURE_EPOCH`] until moved.
    pub clock: Arc<FixedClock>,
}

impl TestLedger {
    /// An empty ledger with default configuration.
    pub fn new() -> Self {
        Self::with_config(LedgerConfig::default())
    }

    /// An empty ledger with `config`.
    pub fn with_config(config: LedgerConfig) -> Self {
        let clock = Arc::new(FixedClock::new(FIXTURE_EPOCH));
        let ledger = Arc::new(Ledger::with_clock(config, clock.clone()));
        Self { ledger, clock }
    }

    /// Airdrops [`FIXTURE_AIRDROP`] lamports to each identity.
    pub async fn fund(&self, ids: &[AccountId]) -> Result<(), TransactionError> {
        for id in ids {
            self.ledger.request_airdrop(id, FIXTURE_AIRDROP).await?;
        }
        Ok(())
    }

    /// The committed balance of `id`, zero if it has no account.
    pub fn balance(&self, id: &AccountId) -> u64 {
        self.ledger
            .get_account(id)
            .ok()
            .flatten()
            .map(|a| a.lamports)
            .unwrap_or_default()
    }
}

impl Default for TestLedger {
    fn default() -> Self {
        Self::new()
    }
}
