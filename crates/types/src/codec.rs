// Path: crates/types/src/codec.rs

//! Defines the canonical, deterministic binary codec for ledger state.
//!
//! This module provides thin wrappers around `parity-scale-codec` (SCALE). Account
//! records and transaction parameters are stored and transported with it, so every
//! component agrees on one binary representation of the same data.
//!
//! The post record itself is *not* SCALE-encoded: its layout is fixed by
//! [`crate::app::post`] because clients filter it by byte offset.

use parity_scale_codec::{Decode, DecodeAll, Encode};

/// Encodes a value into its canonical SCALE byte representation.
pub fn to_bytes_canonical<T: Encode>(v: &T) -> Result<Vec<u8>, String> {
    Ok(v.encode())
}

/// Decodes a value from its canonical SCALE byte representation.
///
/// Fails fast on any decoding error, including trailing bytes, returning a
/// descriptive string.
pub fn from_bytes_canonical<T: Decode>(b: &[u8]) -> Result<T, String> {
    T::decode_all(&mut &*b).map_err(|e| format!("canonical decode failed: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{Account, AccountId, Transaction};

    #[test]
    fn test_canonical_codec_roundtrip() {
        let account = Account {
            lamports: 1_000_000,
            owner: AccountId([3u8; 32]),
            data: vec![1, 2, 3],
        };
        let encoded = to_bytes_canonical(&account).unwrap();
        assert!(!encoded.is_empty());
        assert_eq!(from_bytes_canonical::<Account>(&encoded).unwrap(), account);

        let tx = Transaction::new(AccountId([1u8; 32]), "send_post@v1", vec![9, 9])
            .with_signer(AccountId([2u8; 32]))
            .with_signer(AccountId([2u8; 32]));
        assert_eq!(tx.signers.len(), 1);
        let encoded_tx = to_bytes_canonical(&tx).unwrap();
        assert_eq!(from_bytes_canonical::<Transaction>(&encoded_tx).unwrap(), tx);
    }

    #[test]
    fn test_canonical_decode_failure() {
        let account = Account {
            lamports: 99,
            owner: AccountId([4u8; 32]),
            data: vec![10, 20, 30, 40, 50],
        };

        let mut encoded = to_bytes_canonical(&account).unwrap();
        encoded.pop();
        encoded.pop();

        let error_msg = from_bytes_canonical::<Account>(&encoded).unwrap_err();
        assert!(error_msg.contains("canonical decode failed"));

        // Trailing garbage is rejected as well.
        let mut padded = to_bytes_canonical(&account).unwrap();
        padded.push(0);
        assert!(from_bytes_canonical::<Account>(&padded).is_err());
    }
}
