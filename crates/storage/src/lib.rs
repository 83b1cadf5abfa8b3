//! Forum Storage
//!
//! Storage implementations for the forum server. Ships an in-memory backend;
//! the traits allow plugging in a relational backend without touching the
//! service layer.

pub mod memory_store;
pub mod session_store;
pub mod traits;

pub use memory_store::MemoryStore;
pub use session_store::MemorySessionStore;
pub use traits::{SessionStore, Storage};
