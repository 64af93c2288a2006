// Path: crates/execution/src/app/query.rs
//! Read-only account queries over the committed snapshot.

use super::Ledger;
use quill_api::state::StateAccess;
use quill_types::app::{Account, AccountFilter, AccountId};
use quill_types::codec;
use quill_types::error::StateError;
use quill_types::keys::ACCOUNT_KEY_PREFIX;

impl Ledger {
    /// Returns every committed account owned by `owner` whose data satisfies all
    /// `filters`, in ascending address order.
    pub fn get_program_accounts(
        &self,
        owner: &AccountId,
        filters: &[AccountFilter],
    ) -> Result<Vec<(AccountId, Account)>, StateError> {
        let snapshot = self.state();
        let matched: Vec<_> = scan_accounts(&*snapshot)?
            .into_iter()
            .filter(|(_, account)| account.owner == *owner)
            .filter(|(_, account)| filters.iter().all(|f| f.matches(&account.data)))
            .collect();
        tracing::debug!(
            target: "execution",
            event = "program_accounts",
            %owner,
            filters = filters.len(),
            matched = matched.len()
        );
        Ok(matched)
    }
}

/// Decodes every account in `state`, in key (and therefore address) order.
pub(crate) fn scan_accounts(
    state: &dyn StateAccess,
) -> Result<Vec<(AccountId, Account)>, StateError> {
    let mut accounts = Vec::new();
    for item in state.prefix_scan(ACCOUNT_KEY_PREFIX)? {
        let (key, value) = item?;
        let raw = key
            .get(ACCOUNT_KEY_PREFIX.len()..)
            .ok_or_else(|| StateError::Decode("account key without address".into()))?;
        let address =
            AccountId::try_from_slice(raw).map_err(|e| StateError::Decode(e.to_string()))?;
        let account: Account = codec::from_bytes_canonical(&value).map_err(StateError::Decode)?;
        accounts.push((address, account));
    }
    Ok(accounts)
}
