//! Deterministic randomness for reproducible tests

use quill_types::app::AccountId;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Deterministic random number generator for tests
pub struct TestRng {
    /// Internal RNG with fixed seed
    rng: StdRng,
}

impl TestRng {
    /// Create a new test RNG with the specified seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a test RNG with the default seed 12345
    pub fn with_default_seed() -> Self {
        Self::new(12345)
    }

    /// A fresh identity, usable as an author, payer or slot address.
    pub fn account_id(&mut self) -> AccountId {
        AccountId::new_unique(&mut self.rng)
    }
}

impl Default for TestRng {
    fn default() -> Self {
        Self::with_default_seed()
    }
}

impl RngCore for TestRng {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.rng.try_fill_bytes(dest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_identities() {
        let mut a = TestRng::new(7);
        let mut b = TestRng::new(7);
        assert_eq!(a.account_id(), b.account_id());
        assert_ne!(a.account_id(), TestRng::new(8).account_id());
    }
}
