// Path: crates/execution/src/app/mod.rs
mod query;

pub(crate) use query::scan_accounts;

use crate::clock::{Clock, SystemClock};
use arc_swap::ArcSwap;
use quill_api::accounts::{load_account, store_account};
use quill_api::services::access::ServiceDirectory;
use quill_api::services::BlockchainService;
use quill_api::state::{MemoryState, StateAccess, StateChangeSet, StateOverlay};
use quill_api::transaction::context::TxContext;
use quill_types::app::{Account, AccountId, Transaction, TxReceipt};
use quill_types::codec;
use quill_types::config::LedgerConfig;
use quill_types::error::{ErrorCode, StateError, TransactionError};
use quill_types::keys::STATUS_KEY;
use std::fmt::Debug;
use std::sync::Arc;
use tokio::sync::Mutex;

/// The in-process host runtime.
///
/// # Commit model
///
/// Committed state is an immutable `MemoryState` snapshot behind an `ArcSwap`.
/// Readers load the current snapshot without locking. Writers serialize on
/// `commit_lock`, run the program against a `StateOverlay` of the snapshot and,
/// only if the program succeeds, publish a new snapshot with the overlay applied.
/// A failed transaction leaves no trace and does not advance the slot.
pub struct Ledger {
    committed: ArcSwap<MemoryState>,
    services: ArcSwap<ServiceDirectory>,
    commit_lock: Mutex<()>,
    config: LedgerConfig,
    clock: Arc<dyn Clock>,
}

impl Debug for Ledger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ledger")
            .field("config", &self.config)
            .field("services", &**self.services.load())
            .field("keys", &self.committed.load().len())
            .finish()
    }
}

impl Ledger {
    /// Creates an empty ledger driven by the system clock.
    pub fn new(config: LedgerConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Creates an empty ledger driven by `clock`.
    pub fn with_clock(config: LedgerConfig, clock: Arc<dyn Clock>) -> Self {
        Self::from_state(config, MemoryState::new(), clock)
    }

    pub(crate) fn from_state(
        config: LedgerConfig,
        state: MemoryState,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            committed: ArcSwap::from_pointee(state),
            services: ArcSwap::from_pointee(ServiceDirectory::default()),
            commit_lock: Mutex::new(()),
            config,
            clock,
        }
    }

    /// Registers a program. A program registered at an already used id replaces
    /// the previous one for subsequent transactions.
    pub fn register_service(&self, service: Arc<dyn BlockchainService>) {
        let id = service.id().to_string();
        let program_id = service.program_id();
        self.services.rcu(|dir| dir.with(service.clone()));
        let programs = self.services.load().len();
        tracing::info!(
            target: "execution",
            event = "service_registered",
            %id,
            %program_id,
            programs
        );
    }

    /// The runtime configuration.
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// The last committed slot.
    pub fn slot(&self) -> Result<u64, StateError> {
        let snapshot = self.committed.load_full();
        read_slot(&*snapshot, self.config.genesis_slot)
    }

    /// The current committed snapshot.
    pub fn state(&self) -> Arc<MemoryState> {
        self.committed.load_full()
    }

    /// The lamports a new slot of `space` bytes must be funded with.
    pub fn minimum_balance(&self, space: usize) -> u64 {
        self.config.rent.minimum_balance(space)
    }

    /// Reads the committed account at `address`.
    pub fn get_account(&self, address: &AccountId) -> Result<Option<Account>, StateError> {
        let snapshot = self.committed.load_full();
        load_account(&*snapshot, address)
    }

    /// Executes `tx` atomically and commits it in the next slot.
    pub async fn submit(&self, tx: &Transaction) -> Result<TxReceipt, TransactionError> {
        let _guard = self.commit_lock.lock().await;
        let base = self.committed.load_full();
        let slot = next_slot(&*base, self.config.genesis_slot)?;
        let timestamp = self.clock.unix_timestamp();

        let service = self
            .services
            .load()
            .get_by_program(&tx.program_id)
            .cloned()
            .ok_or(TransactionError::UnknownProgram(tx.program_id))?;

        let ctx = TxContext {
            slot,
            unix_timestamp: timestamp,
            program_id: tx.program_id,
            signers: &tx.signers,
            rent: &self.config.rent,
        };

        let mut overlay = StateOverlay::new(&*base);
        if let Err(e) = service
            .handle_service_call(&mut overlay, &tx.method, &tx.params, &ctx)
            .await
        {
            tracing::warn!(
                target: "execution",
                event = "tx_rejected",
                slot,
                program = service.id(),
                method = %tx.method,
                code = e.code(),
                error = %e
            );
            return Err(e);
        }
        write_slot(&mut overlay, slot)?;
        let changes = overlay.into_ordered_batch();
        let writes = changes.0.len() + changes.1.len();
        self.publish(&base, changes)?;

        tracing::info!(
            target: "execution",
            event = "commit",
            slot,
            program = service.id(),
            method = %tx.method,
            writes
        );
        Ok(TxReceipt { slot, timestamp })
    }

    /// Credits `lamports` to `to`, creating a system account if needed.
    pub async fn request_airdrop(
        &self,
        to: &AccountId,
        lamports: u64,
    ) -> Result<TxReceipt, TransactionError> {
        let _guard = self.commit_lock.lock().await;
        let base = self.committed.load_full();
        let slot = next_slot(&*base, self.config.genesis_slot)?;
        let timestamp = self.clock.unix_timestamp();

        let mut overlay = StateOverlay::new(&*base);
        let mut account = load_account(&overlay, to)?.unwrap_or_else(|| Account::system(0));
        account.lamports = account.lamports.saturating_add(lamports);
        store_account(&mut overlay, to, &account)?;
        write_slot(&mut overlay, slot)?;
        self.publish(&base, overlay.into_ordered_batch())?;

        tracing::info!(
            target: "execution",
            event = "airdrop",
            slot,
            %to,
            lamports,
            balance = account.lamports
        );
        Ok(TxReceipt { slot, timestamp })
    }

    fn publish(&self, base: &MemoryState, changes: StateChangeSet) -> Result<(), StateError> {
        let (inserts, deletes) = changes;
        let mut next = base.clone();
        next.batch_apply(&inserts, &deletes)?;
        self.committed.store(Arc::new(next));
        Ok(())
    }
}

fn read_slot(state: &dyn StateAccess, genesis_slot: u64) -> Result<u64, StateError> {
    match state.get(STATUS_KEY)? {
        Some(bytes) => codec::from_bytes_canonical(&bytes).map_err(StateError::Decode),
        None => Ok(genesis_slot),
    }
}

fn next_slot(state: &dyn StateAccess, genesis_slot: u64) -> Result<u64, StateError> {
    let current = read_slot(state, genesis_slot)?;
    current
        .checked_add(1)
        .ok_or_else(|| StateError::InvalidValue(format!("slot {current} cannot advance")))
}

fn write_slot(state: &mut dyn StateAccess, slot: u64) -> Result<(), StateError> {
    let bytes = codec::to_bytes_canonical(&slot).map_err(StateError::InvalidValue)?;
    state.insert(STATUS_KEY, &bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use async_trait::async_trait;
    use quill_api::accounts::create_account;
    use quill_types::app::AccountFilter;
    use quill_types::error::AllocationError;

    const SCRIBE: AccountId = AccountId([42; 32]);
    const PAYER: AccountId = AccountId([1; 32]);

    /// Allocates a slot at the second signer, paid by the first, holding `params`.
    struct Scribe;

    #[async_trait]
    impl BlockchainService for Scribe {
        fn id(&self) -> &str {
            "scribe"
        }
        fn program_id(&self) -> AccountId {
            SCRIBE
        }
        async fn handle_service_call(
            &self,
            state: &mut dyn StateAccess,
            method: &str,
            params: &[u8],
            ctx: &TxContext<'_>,
        ) -> Result<(), TransactionError> {
            let payer = ctx.signers[0];
            let address = ctx.signers[1];
            let mut account = create_account(state, ctx, &payer, &address, params.len(), &SCRIBE)?;
            account.data.copy_from_slice(params);
            store_account(state, &address, &account)?;
            match method {
                "write@v1" => Ok(()),
                _ => Err(TransactionError::Unsupported(method.to_string())),
            }
        }
    }

    fn write(address: AccountId, data: &[u8]) -> Transaction {
        Transaction::new(SCRIBE, "write@v1", data.to_vec())
            .with_signer(PAYER)
            .with_signer(address)
    }

    async fn funded_ledger() -> (Ledger, Arc<FixedClock>) {
        let clock = Arc::new(FixedClock::new(1_700_000_000));
        let ledger = Ledger::with_clock(LedgerConfig::default(), clock.clone());
        ledger.register_service(Arc::new(Scribe));
        ledger.request_airdrop(&PAYER, 1_000_000_000).await.unwrap();
        (ledger, clock)
    }

    #[tokio::test]
    async fn submit_commits_in_the_next_slot() {
        let (ledger, clock) = funded_ledger().await;
        clock.advance(30);
        let address = AccountId([9; 32]);

        let receipt = ledger.submit(&write(address, b"hello")).await.unwrap();
        assert_eq!(receipt.slot, 2);
        assert_eq!(receipt.timestamp, 1_700_000_030);
        assert_eq!(ledger.slot().unwrap(), 2);

        let account = ledger.get_account(&address).unwrap().unwrap();
        assert_eq!(account.data, b"hello".to_vec());
        assert_eq!(account.owner, SCRIBE);
        let payer = ledger.get_account(&PAYER).unwrap().unwrap();
        assert_eq!(payer.lamports, 1_000_000_000 - ledger.minimum_balance(5));
    }

    #[tokio::test]
    async fn failed_transaction_leaves_no_trace() {
        let (ledger, _) = funded_ledger().await;
        let before = ledger.state();
        let address = AccountId([9; 32]);
        let mut tx = write(address, b"doomed");
        tx.method = "write_then_fail@v1".into();

        let err = ledger.submit(&tx).await.unwrap_err();
        assert!(matches!(err, TransactionError::Unsupported(_)));
        assert_eq!(ledger.state(), before);
        assert_eq!(ledger.get_account(&address).unwrap(), None);
        assert_eq!(ledger.slot().unwrap(), 1);
    }

    #[tokio::test]
    async fn exhausted_slot_counter_is_an_error_not_a_wrap() {
        let config = LedgerConfig {
            genesis_slot: u64::MAX,
            ..LedgerConfig::default()
        };
        let ledger = Ledger::with_clock(config, Arc::new(FixedClock::new(0)));
        ledger.register_service(Arc::new(Scribe));
        let before = ledger.state();

        let err = ledger.request_airdrop(&PAYER, 10).await.unwrap_err();
        assert!(matches!(err, TransactionError::State(StateError::InvalidValue(_))));
        let err = ledger.submit(&write(AccountId([9; 32]), b"x")).await.unwrap_err();
        assert!(matches!(err, TransactionError::State(StateError::InvalidValue(_))));

        assert_eq!(ledger.state(), before);
        assert_eq!(ledger.slot().unwrap(), u64::MAX);
    }

    #[tokio::test]
    async fn unknown_program_is_rejected() {
        let (ledger, _) = funded_ledger().await;
        let mut tx = write(AccountId([9; 32]), b"x");
        tx.program_id = AccountId([77; 32]);
        assert_eq!(
            ledger.submit(&tx).await.unwrap_err(),
            TransactionError::UnknownProgram(AccountId([77; 32]))
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn racing_creations_at_one_address_yield_one_winner() {
        let (ledger, _) = funded_ledger().await;
        let ledger = Arc::new(ledger);
        let address = AccountId([9; 32]);

        let handles: Vec<_> = (0..8u8)
            .map(|i| {
                let ledger = ledger.clone();
                tokio::spawn(async move { ledger.submit(&write(address, &[i; 4])).await })
            })
            .collect();

        let mut ok = 0;
        let mut in_use = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => ok += 1,
                Err(TransactionError::Allocation(AllocationError::AccountAlreadyInUse(a))) => {
                    assert_eq!(a, address);
                    in_use += 1;
                }
                Err(other) => panic!("unexpected error: {other}"),
            }
        }
        assert_eq!((ok, in_use), (1, 7));
    }

    #[tokio::test]
    async fn program_accounts_are_filtered_and_ordered() {
        let (ledger, _) = funded_ledger().await;
        for (n, data) in [(7u8, b"bb"), (3u8, b"ab"), (5u8, b"ba")] {
            ledger.submit(&write(AccountId([n; 32]), data)).await.unwrap();
        }

        let all = ledger.get_program_accounts(&SCRIBE, &[]).unwrap();
        let order: Vec<_> = all.iter().map(|(a, _)| a.0[0]).collect();
        assert_eq!(order, vec![3, 5, 7]);

        let b_first = ledger
            .get_program_accounts(&SCRIBE, &[AccountFilter::memcmp(0, b"b".to_vec())])
            .unwrap();
        assert_eq!(b_first.len(), 2);
        assert!(ledger
            .get_program_accounts(&SCRIBE, &[AccountFilter::DataSize(3)])
            .unwrap()
            .is_empty());
        // The payer is a system account and never matches another owner.
        assert!(ledger
            .get_program_accounts(&AccountId([0; 32]), &[])
            .unwrap()
            .iter()
            .all(|(a, _)| *a == PAYER));
    }
}
