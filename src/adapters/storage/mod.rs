//! Storage Adapters
//!
//! Implementations of the QuoteStore port.
//!
//! ## Available Adapters
//!
//! - **InMemoryQuoteStore** - Keeps saved snapshots for the process lifetime
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::InMemoryQuoteStore;
//!
//! let mut store = InMemoryQuoteStore::new();
//! builder.save_to(&mut store);
//! ```

mod in_memory_quote_store;

pub use in_memory_quote_store::InMemoryQuoteStore;
