// Path: crates/types/src/app/account.rs

//! The host runtime's storage slot.

use crate::app::AccountId;
use parity_scale_codec::{Decode, Encode};
use serde::{Deserialize, Serialize};

/// A uniquely addressed storage slot.
///
/// `data` is allocated once, at a fixed size, when the slot is created. The
/// `owner` is the program that created the slot; only that program's records
/// are returned by program-account queries.
#[derive(Encode, Decode, Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Account {
    /// Balance held by the slot. Program-owned slots hold their rent-exempt minimum.
    pub lamports: u64,
    /// The program that owns the slot.
    pub owner: AccountId,
    /// The slot's raw bytes.
    #[serde(with = "crate::app::hex_serde")]
    pub data: Vec<u8>,
}

impl Account {
    /// A data-less account owned by the system program, as created by an airdrop.
    pub fn system(lamports: u64) -> Self {
        Self {
            lamports,
            owner: crate::keys::SYSTEM_PROGRAM_ID,
            data: Vec::new(),
        }
    }
}

