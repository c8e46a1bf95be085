//! Profile Store Adapters.
//!
//! Implementations of the ProfileStore port.

mod in_memory;

pub use in_memory::InMemoryProfileStore;
