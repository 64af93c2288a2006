// Path: crates/api/src/transaction/mod.rs
//! Execution context shared between the host runtime and its programs.

pub mod context;

pub use context::TxContext;
