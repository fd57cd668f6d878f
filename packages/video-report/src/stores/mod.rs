//! Session store implementations.
//!
//! Available backends:
//! - `MemorySessionStore` - In-memory storage (always available)

pub mod memory;

pub use memory::{MemorySessionStore, DEFAULT_SESSION_CAPACITY};
