//! Adapters - Implementations of port interfaces.
//!
//! - `storage` - Quote store implementations (in-memory)

pub mod storage;

pub use storage::InMemoryQuoteStore;
