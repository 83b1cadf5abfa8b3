//! Storage traits for pluggable storage implementations

// Re-export the storage traits from the types crate
pub use forum_types::sessions::SessionStore;
pub use forum_types::storage::{
	BoardStorage, PostStorage, Storage, StorageError, StorageResult, StorageStats, TopicStorage,
	UserStorage,
};
