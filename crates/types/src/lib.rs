// Path: crates/types/src/lib.rs
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::todo,
        clippy::unimplemented,
        clippy::indexing_slicing
    )
)]

//! # Quill Types
//!
//! This crate is the foundational library for Quill, containing the record
//! layout, identities, accounts, transactions, error types and configuration
//! objects.
//!
//! ## Architectural Role
//!
//! As the base crate, `quill-types` has minimal dependencies and is itself a
//! dependency for every other crate in the workspace. The post record layout
//! defined in [`app::post`] is a frozen wire contract: client-side filters
//! address its fields by byte offset.

/// A top-level, crate-wide `Result` type alias with a default error type.
pub type Result<T, E = crate::error::CoreError> = std::result::Result<T, E>;

/// Application-level data structures: identities, accounts, posts, transactions.
pub mod app;
/// The canonical, deterministic binary codec for ledger state.
pub mod codec;
/// Shared configuration structures (`RentConfig`, `LedgerConfig`, `WorkspaceConfig`).
pub mod config;
/// A unified set of all error types used across the workspace.
pub mod error;
/// Constants for well-known state keys and program identities.
pub mod keys;
/// A prelude containing useful extension traits like `OptionExt`.
pub mod prelude;
