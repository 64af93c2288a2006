// Path: crates/client/src/lib.rs
//! # Quill Client Crate Lints
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

//! # Quill Client
//!
//! Client-side logic for creating posts and querying them by byte-offset filters.
//! All calls go through an explicit [`Workspace`], which carries the connection,
//! the wallet identity and the program id.

pub mod connection;
pub mod error;
pub mod filters;
pub mod workspace;

// Re-export for convenience
pub use connection::LedgerConnection;
pub use error::ClientError;
pub use workspace::{PostListing, PostRecord, Workspace};
