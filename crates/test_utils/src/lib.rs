// Path: crates/test_utils/src/lib.rs
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::unimplemented,
        clippy::todo,
        clippy::indexing_slicing
    )
)]

//! # Quill Test Utilities
//!
//! Assertion macros, deterministic identities and funded ledgers for tests.

pub mod assertions;
pub mod fixtures;
pub mod randomness;

#[doc(hidden)]
pub use quill_types as __quill_types;
