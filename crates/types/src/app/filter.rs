// Path: crates/types/src/app/filter.rs

//! Byte-offset filters evaluated against raw account data.
//!
//! A filter never decodes the slot. It compares raw bytes at a fixed offset, which
//! is why the post layout in [`crate::app::post`] is treated as a wire contract.

use serde::{Deserialize, Serialize};

/// An exact-match comparison of `bytes` against the account data at `offset`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memcmp {
    /// Byte offset into the account data.
    pub offset: usize,
    /// The expected bytes.
    #[serde(with = "crate::app::hex_serde")]
    pub bytes: Vec<u8>,
}

impl Memcmp {
    /// Creates a new comparison.
    pub fn new(offset: usize, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            offset,
            bytes: bytes.into(),
        }
    }

    /// True iff `data[offset..offset + bytes.len()] == bytes`. A window that
    /// reaches past the end of `data` never matches.
    pub fn matches(&self, data: &[u8]) -> bool {
        self.offset
            .checked_add(self.bytes.len())
            .and_then(|end| data.get(self.offset..end))
            .is_some_and(|window| window == self.bytes.as_slice())
    }
}

/// A predicate applied by program-account queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountFilter {
    /// Exact byte comparison at an offset.
    Memcmp(Memcmp),
    /// Matches accounts whose data is exactly this many bytes long.
    DataSize(u64),
}

impl AccountFilter {
    /// Shorthand for an [`AccountFilter::Memcmp`].
    pub fn memcmp(offset: usize, bytes: impl Into<Vec<u8>>) -> Self {
        Self::Memcmp(Memcmp::new(offset, bytes))
    }

    /// Evaluates the filter against raw account data.
    pub fn matches(&self, data: &[u8]) -> bool {
        match self {
            Self::Memcmp(m) => m.matches(data),
            Self::DataSize(size) => data.len() as u64 == *size,
        }
    }
}
