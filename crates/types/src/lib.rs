//! Forum Types
//!
//! Shared models and traits for the forum server.
//! This crate contains all domain models organized by business entity.

pub mod boards;
pub mod constants;
pub mod posts;
pub mod sessions;
pub mod storage;
pub mod topics;
pub mod users;

// Re-export chrono and serde_json for convenience
pub use chrono;
pub use serde_json;

// Re-export commonly used types for convenience
pub use boards::{Board, BoardResponse, BoardsResponse};

pub use topics::{
	NewTopicRequest, Topic, TopicResponse, TopicValidationError, TopicValidationResult,
	TopicsPageResponse,
};

pub use posts::{
	Post, PostRequest, PostResponse, PostValidationError, PostValidationResult, ReplyResponse,
	TopicPostsResponse,
};

pub use users::{
	AccountResponse, LoginRequest, SettingsRequest, SignupRequest, User, UserValidationError,
	UserValidationResult,
};

pub use sessions::{topic_view_key, SessionStore};

pub use storage::{
	BoardStorage, PostStorage, Storage, StorageError, StorageResult, StorageStats, TopicStorage,
	UserStorage,
};
