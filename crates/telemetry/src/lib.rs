// Path: crates/telemetry/src/lib.rs
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

//! # Quill Telemetry
//!
//! Structured logging initialization shared by Quill binaries. Libraries only
//! emit `tracing` events; installing a subscriber is the binary's job.

/// The initialization routine for global structured logging.
pub mod init;

pub use init::{init_tracing, init_tracing_with, LogFormat};
