// Path: crates/types/src/app/identity.rs

//! Defines the canonical `AccountId`, the 32-byte identity used both for signers
//! (post authors, fee payers) and for addressed ledger slots.

use crate::error::CoreError;
use parity_scale_codec::{Decode, Encode};
use rand::RngCore;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The width in bytes of an identity.
pub const ACCOUNT_ID_LENGTH: usize = 32;

/// A unique, stable identifier for an on-ledger account or signer.
///
/// Authors are identified by their public key; slots are identified by the public
/// key of the keypair that authorized their creation. Both are represented as a
/// raw 32-byte array and displayed in base58.
#[derive(Encode, Decode, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct AccountId(pub [u8; ACCOUNT_ID_LENGTH]);

impl AccountId {
    /// Generates a fresh, random identity. Used for new slot addresses.
    pub fn new_unique<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        let mut bytes = [0u8; ACCOUNT_ID_LENGTH];
        rng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Returns the raw identity bytes.
    pub fn to_bytes(self) -> [u8; ACCOUNT_ID_LENGTH] {
        self.0
    }

    /// Builds an identity from a byte slice of exactly 32 bytes.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self, CoreError> {
        let arr: [u8; ACCOUNT_ID_LENGTH] = bytes.try_into().map_err(|_| {
            CoreError::InvalidIdentity(format!(
                "expected {} bytes, got {}",
                ACCOUNT_ID_LENGTH,
                bytes.len()
            ))
        })?;
        Ok(Self(arr))
    }
}

impl AsRef<[u8]> for AccountId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; ACCOUNT_ID_LENGTH]> for AccountId {
    fn from(bytes: [u8; ACCOUNT_ID_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", bs58::encode(self.0).into_string())
    }
}

impl fmt::Debug for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountId({})", self)
    }
}

impl FromStr for AccountId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = bs58::decode(s)
            .into_vec()
            .map_err(|e| CoreError::InvalidIdentity(format!("{}: {}", s, e)))?;
        Self::try_from_slice(&bytes)
    }
}

// Identities travel as base58 strings in JSON and TOML.
impl Serialize for AccountId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AccountId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn base58_display_roundtrips_through_from_str() {
        let mut rng = StdRng::seed_from_u64(7);
        let id = AccountId::new_unique(&mut rng);
        let parsed: AccountId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn parsing_rejects_wrong_width() {
        let short = bs58::encode([1u8; 31]).into_string();
        let err = short.parse::<AccountId>().unwrap_err();
        assert!(matches!(err, CoreError::InvalidIdentity(_)));
        assert!("not-base58-0OIl".parse::<AccountId>().is_err());
    }

    #[test]
    fn serde_uses_base58_strings() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            id: AccountId,
        }
        let id = AccountId([9u8; 32]);
        let text = toml::to_string(&Wrapper { id }).unwrap();
        assert_eq!(text.trim(), format!("id = \"{}\"", id));
        let back: Wrapper = toml::from_str(&text).unwrap();
        assert_eq!(back.id, id);
    }
}
