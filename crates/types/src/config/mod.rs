// Path: crates/types/src/config/mod.rs

//! Shared configuration structures for the host runtime and the client workspace.
//!
//! Every field has a serde default, so an empty TOML document is a valid
//! configuration.

use crate::app::AccountId;
use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Parameters for the rent-exempt minimum balance of a slot.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct RentConfig {
    /// Rental rate per byte of account storage per year.
    #[serde(default = "default_lamports_per_byte_year")]
    pub lamports_per_byte_year: u64,
    /// Number of years of rent a slot must prepay to be exempt.
    #[serde(default = "default_exemption_threshold_years")]
    pub exemption_threshold_years: u64,
    /// Fixed per-account bookkeeping bytes charged on top of the slot size.
    #[serde(default = "default_account_storage_overhead")]
    pub account_storage_overhead: u64,
}

fn default_lamports_per_byte_year() -> u64 {
    3480
}
fn default_exemption_threshold_years() -> u64 {
    2
}
fn default_account_storage_overhead() -> u64 {
    128
}

impl Default for RentConfig {
    fn default() -> Self {
        Self {
            lamports_per_byte_year: default_lamports_per_byte_year(),
            exemption_threshold_years: default_exemption_threshold_years(),
            account_storage_overhead: default_account_storage_overhead(),
        }
    }
}

impl RentConfig {
    /// The lamports a slot of `space` data bytes must hold to be rent exempt.
    pub fn minimum_balance(&self, space: usize) -> u64 {
        (self.account_storage_overhead.saturating_add(space as u64))
            .saturating_mul(self.lamports_per_byte_year)
            .saturating_mul(self.exemption_threshold_years)
    }
}

/// Configuration for the host runtime (`ledger.toml` section).
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct LedgerConfig {
    /// Rent parameters.
    #[serde(default)]
    pub rent: RentConfig,
    /// The slot number assigned to the first committed transaction.
    #[serde(default)]
    pub genesis_slot: u64,
}

/// The client-side context configuration (`quill.toml`).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct WorkspaceConfig {
    /// The post program to talk to.
    #[serde(default = "default_program_id")]
    pub program_id: AccountId,
    /// Settings for the local host runtime.
    #[serde(default)]
    pub ledger: LedgerConfig,
}

fn default_program_id() -> AccountId {
    crate::keys::POST_PROGRAM_ID
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            program_id: default_program_id(),
            ledger: LedgerConfig::default(),
        }
    }
}

impl WorkspaceConfig {
    /// Parses a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, CoreError> {
        toml::from_str(text).map_err(|e| CoreError::Config(e.to_string()))
    }

    /// Reads and parses a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| CoreError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&text)
    }
}
