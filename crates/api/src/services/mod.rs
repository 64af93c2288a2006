// Path: crates/api/src/services/mod.rs
//! Traits for programs hosted by the runtime.

use crate::state::StateAccess;
use crate::transaction::context::TxContext;
use async_trait::async_trait;
use quill_types::app::AccountId;
use quill_types::error::TransactionError;

pub mod access;

/// The base trait for any program hosted by the runtime.
///
/// # State Invariant: All-or-nothing
///
/// The `StateAccess` handed to `handle_service_call` is a transactional overlay.
/// If the call returns `Err`, every write it made is discarded by the host. A
/// program may therefore write eagerly and fail late.
#[async_trait]
pub trait BlockchainService: Send + Sync {
    /// A stable, human-readable name, used in logs.
    fn id(&self) -> &str;

    /// The address transactions use to reach this program. It is also the owner
    /// of every slot the program allocates.
    fn program_id(&self) -> AccountId;

    /// Handles one method call.
    ///
    /// `params` are the SCALE-encoded arguments of `method`. Programs that
    /// do not recognise `method` return `TransactionError::Unsupported`.
    async fn handle_service_call(
        &self,
        _state: &mut dyn StateAccess,
        method: &str,
        _params: &[u8],
        _ctx: &TxContext<'_>,
    ) -> Result<(), TransactionError> {
        Err(TransactionError::Unsupported(format!(
            "Service '{}' does not implement '{}'",
            self.id(),
            method
        )))
    }
}
