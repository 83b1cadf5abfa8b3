//! Storage traits for pluggable storage implementations

use crate::{Board, Post, Topic, User};
use async_trait::async_trait;
use thiserror::Error;

/// Storage error type
#[derive(Debug, Error)]
pub enum StorageError {
	#[error("Item not found: {id}")]
	NotFound { id: String },
	#[error("Connection error: {message}")]
	Connection { message: String },
	#[error("Serialization error: {message}")]
	Serialization { message: String },
	#[error("Storage operation failed: {message}")]
	Operation { message: String },
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Statistics about storage usage
#[derive(Debug, Clone)]
pub struct StorageStats {
	pub total_boards: usize,
	pub total_topics: usize,
	pub total_posts: usize,
	pub total_users: usize,
}

/// Trait for board storage operations
#[async_trait]
pub trait BoardStorage: Send + Sync {
	/// Persist a new board, assigning its id. Returns the stored board.
	async fn create_board(&self, board: Board) -> StorageResult<Board>;

	/// Get a board by id
	async fn get_board(&self, board_id: u64) -> StorageResult<Option<Board>>;

	/// Get all boards, ordered by id ascending
	async fn list_boards(&self) -> StorageResult<Vec<Board>>;

	/// Get board count
	async fn board_count(&self) -> StorageResult<usize>;
}

/// Trait for topic storage operations
#[async_trait]
pub trait TopicStorage: Send + Sync {
	/// Persist a new topic, assigning its id. Returns the stored topic.
	async fn create_topic(&self, topic: Topic) -> StorageResult<Topic>;

	/// Get a topic by id
	async fn get_topic(&self, topic_id: u64) -> StorageResult<Option<Topic>>;

	/// Replace an existing topic
	async fn update_topic(&self, topic: Topic) -> StorageResult<()>;

	/// Get all topics for a board, ordered by `last_updated` descending
	async fn list_topics_by_board(&self, board_id: u64) -> StorageResult<Vec<Topic>>;

	/// Count topics in a board
	async fn count_topics_by_board(&self, board_id: u64) -> StorageResult<usize>;

	/// Get topic count
	async fn topic_count(&self) -> StorageResult<usize>;
}

/// Trait for post storage operations
#[async_trait]
pub trait PostStorage: Send + Sync {
	/// Persist a new post, assigning its id. Returns the stored post.
	async fn create_post(&self, post: Post) -> StorageResult<Post>;

	/// Get a post by id
	async fn get_post(&self, post_id: u64) -> StorageResult<Option<Post>>;

	/// Replace an existing post
	async fn update_post(&self, post: Post) -> StorageResult<()>;

	/// Get all posts in a topic, ordered by `created_at` ascending
	async fn list_posts_by_topic(&self, topic_id: u64) -> StorageResult<Vec<Post>>;

	/// Count posts in a topic (includes the starter post)
	async fn count_posts_by_topic(&self, topic_id: u64) -> StorageResult<usize>;

	/// Get post count
	async fn post_count(&self) -> StorageResult<usize>;
}

/// Trait for user storage operations
#[async_trait]
pub trait UserStorage: Send + Sync {
	/// Persist a new user, assigning its id. Returns the stored user.
	async fn create_user(&self, user: User) -> StorageResult<User>;

	/// Get a user by id
	async fn get_user(&self, user_id: u64) -> StorageResult<Option<User>>;

	/// Look up a user by username (exact match)
	async fn find_user_by_username(&self, username: &str) -> StorageResult<Option<User>>;

	/// Replace an existing user
	async fn update_user(&self, user: User) -> StorageResult<()>;

	/// Get user count
	async fn user_count(&self) -> StorageResult<usize>;
}

/// Main storage trait that combines all storage operations
#[async_trait]
pub trait Storage: BoardStorage + TopicStorage + PostStorage + UserStorage {
	/// Health check for the storage system
	async fn health_check(&self) -> StorageResult<bool>;

	/// Get overall storage statistics
	async fn stats(&self) -> StorageResult<StorageStats>;

	/// Close the storage connection
	async fn close(&self) -> StorageResult<()>;
}
