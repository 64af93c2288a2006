// Path: crates/api/src/state/accessor.rs
//! The key-value interface programs and the ledger execute against.

use crate::state::StateScanIter;
use quill_types::error::StateError;

/// Ordered key-value storage, usable as `&dyn StateAccess`.
///
/// Account slots live under `account::<address>` and the ledger status under
/// `STATUS_KEY`; implementations only need to keep keys ordered bytewise so
/// that `prefix_scan` yields accounts in ascending address order.
pub trait StateAccess: Send + Sync {
    /// Reads the value stored at `key`.
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StateError>;

    /// Writes `value` at `key`, replacing any previous value.
    fn insert(&mut self, key: &[u8], value: &[u8]) -> Result<(), StateError>;

    /// Removes `key`. Removing an absent key is not an error.
    fn delete(&mut self, key: &[u8]) -> Result<(), StateError>;

    /// Applies a committed change set: `deletes` first, then `inserts`.
    fn batch_apply(
        &mut self,
        inserts: &[(Vec<u8>, Vec<u8>)],
        deletes: &[Vec<u8>],
    ) -> Result<(), StateError>;

    /// Yields every pair whose key starts with `prefix`, in ascending key order.
    fn prefix_scan(&self, prefix: &[u8]) -> Result<StateScanIter<'_>, StateError>;
}
