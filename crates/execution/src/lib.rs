// Path: crates/execution/src/lib.rs
//! # Quill Execution Crate Lints
//!
//! This crate enforces a strict set of lints to ensure high-quality,
//! panic-free, and well-documented code. Panics are disallowed in non-test
//! code to promote robust error handling.
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::unimplemented,
        clippy::todo,
        clippy::indexing_slicing
    )
)]
//! # Quill Execution
//!
//! This crate provides `Ledger`, the in-process host runtime that executes
//! program transactions atomically against a committed state snapshot.

pub mod app;
pub mod clock;
pub mod util;

pub use crate::app::Ledger;
pub use crate::clock::{Clock, FixedClock, SystemClock};
