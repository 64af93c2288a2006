// Path: crates/api/src/lib.rs

//! # Quill API Crate Lints
//!
//! This crate enforces a strict set of lints to ensure panic-free, documented
//! code. Panics are disallowed in non-test code to promote robust error handling.
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
//! # Quill API
//!
//! Core traits and interfaces shared by the host runtime and the programs it
//! executes. This crate defines the stable contract between them.

/// Slot allocation performed on behalf of programs (the system program).
pub mod accounts;
/// Re-exports all core error types from the central `quill-types` crate.
pub mod error;
/// Traits for programs hosted by the runtime.
pub mod services;
/// Core traits for state management, including `StateAccess` and `StateOverlay`.
pub mod state;
/// Defines the execution context handed to programs.
pub mod transaction;

/// A curated set of the most commonly used traits and types.
pub mod prelude {
    pub use crate::error::{
        AllocationError, ErrorCode, PostError, StateError, TransactionError,
    };
    pub use crate::services::access::ServiceDirectory;
    pub use crate::services::BlockchainService;
    pub use crate::state::{MemoryState, StateAccess, StateOverlay};
    pub use crate::transaction::context::TxContext;
}
