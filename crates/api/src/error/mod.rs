// Path: crates/api/src/error/mod.rs
// Re-export all core error types from the central types crate.
pub use quill_types::error::{
    AllocationError, CoreError, CorruptRecord, ErrorCode, PostError, StateError,
    TransactionError,
};
pub use quill_types::Result;
