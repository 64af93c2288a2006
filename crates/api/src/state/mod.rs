// Path: crates/api/src/state/mod.rs
//! Core traits and types for state management.
//!
//! - `StateAccess`: the dyn-safe key-value interface programs execute against.
//! - `StateOverlay`: a copy-on-write layer that captures a transaction's writes
//!   so they can be committed atomically or discarded.
//! - `MemoryState`: an ordered in-memory store used as the committed snapshot.

use quill_types::error::StateError;
use std::sync::Arc;

// --- Type Aliases for common state patterns ---
/// An atomically reference-counted, owned key slice.
pub type StateKey = Arc<[u8]>;
/// An atomically reference-counted, owned value slice.
pub type StateVal = Arc<[u8]>;
/// An owned key-value pair from the state, using cheap-to-clone Arcs.
pub type StateKVPair = (StateKey, StateVal);
/// A streaming iterator over key-value pairs from the state. It is Send-safe
/// to be moved across async tasks. `Sync` is omitted as iterators are stateful.
pub type StateScanIter<'a> = Box<dyn Iterator<Item = Result<StateKVPair, StateError>> + Send + 'a>;

// --- Module Structure ---

mod accessor;
mod memory;
mod overlay;

#[cfg(test)]
mod tests;

// --- Public Exports ---

pub use accessor::*;
pub use memory::MemoryState;
pub use overlay::*;
