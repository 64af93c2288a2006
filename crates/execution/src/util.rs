// Path: crates/execution/src/util.rs

//! File-backed snapshots of the ledger, used by the developer CLI.

use crate::app::{scan_accounts, Ledger};
use crate::clock::Clock;
use anyhow::{Context, Result};
use quill_api::accounts::store_account;
use quill_api::state::{MemoryState, StateAccess};
use quill_types::app::{Account, AccountId};
use quill_types::codec;
use quill_types::config::LedgerConfig;
use quill_types::keys::STATUS_KEY;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// A serializable image of the committed ledger state.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct LedgerSnapshot {
    /// The last committed slot.
    pub slot: u64,
    /// Every account, keyed by address.
    pub accounts: BTreeMap<AccountId, Account>,
}

impl Ledger {
    /// Captures the committed state.
    pub fn snapshot(&self) -> Result<LedgerSnapshot> {
        let state = self.state();
        Ok(LedgerSnapshot {
            slot: self.slot()?,
            accounts: scan_accounts(&*state)?.into_iter().collect(),
        })
    }

    /// Rebuilds a ledger from a snapshot. Programs must be registered again.
    pub fn from_snapshot(
        config: LedgerConfig,
        snapshot: &LedgerSnapshot,
        clock: Arc<dyn Clock>,
    ) -> Result<Self> {
        let mut state = MemoryState::new();
        for (address, account) in &snapshot.accounts {
            store_account(&mut state, address, account)?;
        }
        let slot = codec::to_bytes_canonical(&snapshot.slot).map_err(anyhow::Error::msg)?;
        state.insert(STATUS_KEY, &slot)?;
        Ok(Self::from_state(config, state, clock))
    }
}

/// Loads a snapshot from a JSON file. Returns `None` if the file does not exist.
pub fn load_snapshot(path: &Path) -> Result<Option<LedgerSnapshot>> {
    if !path.exists() {
        log::info!(
            "No ledger file at '{}'. Starting from an empty ledger.",
            path.display()
        );
        return Ok(None);
    }
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let snapshot: LedgerSnapshot = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing ledger snapshot {}", path.display()))?;
    log::debug!(
        "Loaded {} accounts at slot {} from '{}'",
        snapshot.accounts.len(),
        snapshot.slot,
        path.display()
    );
    Ok(Some(snapshot))
}

/// Writes a snapshot as pretty JSON, creating parent directories as needed.
/// The file is replaced atomically via a sibling temporary file.
pub fn save_snapshot(path: &Path, snapshot: &LedgerSnapshot) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating directory {}", parent.display()))?;
    }
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, serde_json::to_vec_pretty(snapshot)?)
        .with_context(|| format!("writing {}", tmp.display()))?;
    fs::rename(&tmp, path).with_context(|| format!("replacing {}", path.display()))?;
    log::debug!("Saved ledger at slot {} to '{}'", snapshot.slot, path.display());
    Ok(())
}
