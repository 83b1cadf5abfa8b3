//! Storage traits and error types shared by all storage backends

pub mod traits;

pub use traits::{
	BoardStorage, PostStorage, Storage, StorageError, StorageResult, StorageStats, TopicStorage,
	UserStorage,
};
