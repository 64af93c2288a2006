// Path: crates/api/src/services/access.rs

//! Read-only access to the programs registered with the host.

use crate::services::BlockchainService;
use quill_types::app::AccountId;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// A read-only service locator keyed by program id.
#[derive(Clone, Default)]
pub struct ServiceDirectory {
    by_program: Arc<BTreeMap<AccountId, Arc<dyn BlockchainService>>>,
}

impl fmt::Debug for ServiceDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceDirectory")
            .field("programs", &self.by_program.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl ServiceDirectory {
    /// Creates a new directory from a list of services.
    /// A later service with the same program id replaces an earlier one.
    pub fn new(services: Vec<Arc<dyn BlockchainService>>) -> Self {
        let mut by_program = BTreeMap::new();
        for s in services {
            by_program.insert(s.program_id(), s);
        }
        Self {
            by_program: Arc::new(by_program),
        }
    }

    /// Returns a new directory with `service` added.
    pub fn with(&self, service: Arc<dyn BlockchainService>) -> Self {
        let mut services: Vec<_> = self.by_program.values().cloned().collect();
        services.push(service);
        Self::new(services)
    }

    /// Gets the program registered at `program_id`.
    pub fn get_by_program(&self, program_id: &AccountId) -> Option<&Arc<dyn BlockchainService>> {
        self.by_program.get(program_id)
    }

    /// Number of registered programs.
    pub fn len(&self) -> usize {
        self.by_program.len()
    }

    /// True if no program is registered.
    pub fn is_empty(&self) -> bool {
        self.by_program.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{MemoryState, StateAccess};
    use crate::transaction::context::TxContext;
    use quill_types::config::RentConfig;
    use quill_types::error::TransactionError;

    struct Echo(AccountId);

    impl BlockchainService for Echo {
        fn id(&self) -> &str {
            "echo"
        }
        fn program_id(&self) -> AccountId {
            self.0
        }
    }

    #[test]
    fn lookup_by_program_and_replacement() {
        assert!(ServiceDirectory::default().is_empty());
        let dir = ServiceDirectory::new(vec![Arc::new(Echo(AccountId([3; 32])))]);
        assert_eq!(dir.len(), 1);
        assert!(dir.get_by_program(&AccountId([4; 32])).is_none());
        let found = dir.get_by_program(&AccountId([3; 32])).unwrap();
        assert_eq!(found.id(), "echo");

        let grown = dir.with(Arc::new(Echo(AccountId([4; 32]))));
        assert_eq!(grown.len(), 2);
        assert_eq!(dir.len(), 1);
        let replaced = grown.with(Arc::new(Echo(AccountId([4; 32]))));
        assert_eq!(replaced.len(), 2);
    }

    #[tokio::test]
    async fn default_handler_is_unsupported() {
        let svc = Echo(AccountId([3; 32]));
        let mut state = MemoryState::new();
        let rent = RentConfig::default();
        let ctx = TxContext {
            slot: 0,
            unix_timestamp: 0,
            program_id: svc.0,
            signers: &[],
            rent: &rent,
        };
        let err = svc
            .handle_service_call(&mut state as &mut dyn StateAccess, "nope@v1", &[], &ctx)
            .await
            .unwrap_err();
        assert!(matches!(err, TransactionError::Unsupported(_)));
    }
}
