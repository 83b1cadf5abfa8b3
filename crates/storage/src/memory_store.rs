//! In-memory storage implementation using DashMap

use crate::traits::{
	BoardStorage, PostStorage, Storage, StorageError, StorageResult, StorageStats, TopicStorage,
	UserStorage,
};
use async_trait::async_trait;
use dashmap::DashMap;
use forum_types::{Board, Post, Topic, User};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::debug;

/// In-memory storage for boards, topics, posts and users
///
/// Ids are assigned from per-entity counters, starting at 1, mirroring
/// integer primary keys in a relational backend.
#[derive(Clone)]
pub struct MemoryStore {
	boards: Arc<DashMap<u64, Board>>,
	topics: Arc<DashMap<u64, Topic>>,
	posts: Arc<DashMap<u64, Post>>,
	users: Arc<DashMap<u64, User>>,
	next_board_id: Arc<AtomicU64>,
	next_topic_id: Arc<AtomicU64>,
	next_post_id: Arc<AtomicU64>,
	next_user_id: Arc<AtomicU64>,
}

impl MemoryStore {
	/// Create a new memory store instance
	pub fn new() -> Self {
		Self {
			boards: Arc::new(DashMap::new()),
			topics: Arc::new(DashMap::new()),
			posts: Arc::new(DashMap::new()),
			users: Arc::new(DashMap::new()),
			next_board_id: Arc::new(AtomicU64::new(1)),
			next_topic_id: Arc::new(AtomicU64::new(1)),
			next_post_id: Arc::new(AtomicU64::new(1)),
			next_user_id: Arc::new(AtomicU64::new(1)),
		}
	}
}

impl Default for MemoryStore {
	fn default() -> Self {
		Self::new()
	}
}

// Trait implementations for pluggable storage

#[async_trait]
impl BoardStorage for MemoryStore {
	async fn create_board(&self, mut board: Board) -> StorageResult<Board> {
		board.id = self.next_board_id.fetch_add(1, Ordering::SeqCst);
		debug!("Creating board {} ({})", board.id, board.name);
		self.boards.insert(board.id, board.clone());
		Ok(board)
	}

	async fn get_board(&self, board_id: u64) -> StorageResult<Option<Board>> {
		Ok(self.boards.get(&board_id).map(|b| b.clone()))
	}

	async fn list_boards(&self) -> StorageResult<Vec<Board>> {
		let mut boards: Vec<Board> = self.boards.iter().map(|entry| entry.clone()).collect();
		boards.sort_by_key(|b| b.id);
		Ok(boards)
	}

	async fn board_count(&self) -> StorageResult<usize> {
		Ok(self.boards.len())
	}
}

#[async_trait]
impl TopicStorage for MemoryStore {
	async fn create_topic(&self, mut topic: Topic) -> StorageResult<Topic> {
		topic.id = self.next_topic_id.fetch_add(1, Ordering::SeqCst);
		debug!("Creating topic {} in board {}", topic.id, topic.board_id);
		self.topics.insert(topic.id, topic.clone());
		Ok(topic)
	}

	async fn get_topic(&self, topic_id: u64) -> StorageResult<Option<Topic>> {
		Ok(self.topics.get(&topic_id).map(|t| t.clone()))
	}

	async fn update_topic(&self, topic: Topic) -> StorageResult<()> {
		match self.topics.get_mut(&topic.id) {
			Some(mut entry) => {
				*entry = topic;
				Ok(())
			},
			None => Err(StorageError::NotFound {
				id: topic.id.to_string(),
			}),
		}
	}

	async fn list_topics_by_board(&self, board_id: u64) -> StorageResult<Vec<Topic>> {
		let mut topics: Vec<Topic> = self
			.topics
			.iter()
			.filter_map(|entry| {
				let topic = entry.value();
				if topic.board_id == board_id {
					Some(topic.clone())
				} else {
					None
				}
			})
			.collect();

		// Most recently active first; id as a deterministic tie-break
		topics.sort_by(|a, b| {
			b.last_updated
				.cmp(&a.last_updated)
				.then_with(|| b.id.cmp(&a.id))
		});
		Ok(topics)
	}

	async fn count_topics_by_board(&self, board_id: u64) -> StorageResult<usize> {
		Ok(self
			.topics
			.iter()
			.filter(|entry| entry.value().board_id == board_id)
			.count())
	}

	async fn topic_count(&self) -> StorageResult<usize> {
		Ok(self.topics.len())
	}
}

#[async_trait]
impl PostStorage for MemoryStore {
	async fn create_post(&self, mut post: Post) -> StorageResult<Post> {
		post.id = self.next_post_id.fetch_add(1, Ordering::SeqCst);
		debug!("Creating post {} in topic {}", post.id, post.topic_id);
		self.posts.insert(post.id, post.clone());
		Ok(post)
	}

	async fn get_post(&self, post_id: u64) -> StorageResult<Option<Post>> {
		Ok(self.posts.get(&post_id).map(|p| p.clone()))
	}

	async fn update_post(&self, post: Post) -> StorageResult<()> {
		match self.posts.get_mut(&post.id) {
			Some(mut entry) => {
				*entry = post;
				Ok(())
			},
			None => Err(StorageError::NotFound {
				id: post.id.to_string(),
			}),
		}
	}

	async fn list_posts_by_topic(&self, topic_id: u64) -> StorageResult<Vec<Post>> {
		let mut posts: Vec<Post> = self
			.posts
			.iter()
			.filter_map(|entry| {
				let post = entry.value();
				if post.topic_id == topic_id {
					Some(post.clone())
				} else {
					None
				}
			})
			.collect();

		// Oldest first; id as a deterministic tie-break
		posts.sort_by(|a, b| {
			a.created_at
				.cmp(&b.created_at)
				.then_with(|| a.id.cmp(&b.id))
		});
		Ok(posts)
	}

	async fn count_posts_by_topic(&self, topic_id: u64) -> StorageResult<usize> {
		Ok(self
			.posts
			.iter()
			.filter(|entry| entry.value().topic_id == topic_id)
			.count())
	}

	async fn post_count(&self) -> StorageResult<usize> {
		Ok(self.posts.len())
	}
}

#[async_trait]
impl UserStorage for MemoryStore {
	async fn create_user(&self, mut user: User) -> StorageResult<User> {
		user.id = self.next_user_id.fetch_add(1, Ordering::SeqCst);
		debug!("Creating user {} ({})", user.id, user.username);
		self.users.insert(user.id, user.clone());
		Ok(user)
	}

	async fn get_user(&self, user_id: u64) -> StorageResult<Option<User>> {
		Ok(self.users.get(&user_id).map(|u| u.clone()))
	}

	async fn find_user_by_username(&self, username: &str) -> StorageResult<Option<User>> {
		Ok(self
			.users
			.iter()
			.find(|entry| entry.value().username == username)
			.map(|entry| entry.value().clone()))
	}

	async fn update_user(&self, user: User) -> StorageResult<()> {
		match self.users.get_mut(&user.id) {
			Some(mut entry) => {
				*entry = user;
				Ok(())
			},
			None => Err(StorageError::NotFound {
				id: user.id.to_string(),
			}),
		}
	}

	async fn user_count(&self) -> StorageResult<usize> {
		Ok(self.users.len())
	}
}

#[async_trait]
impl Storage for MemoryStore {
	async fn health_check(&self) -> StorageResult<bool> {
		// For in-memory storage, just check that the maps are accessible
		Ok(true)
	}

	async fn stats(&self) -> StorageResult<StorageStats> {
		Ok(StorageStats {
			total_boards: self.board_count().await?,
			total_topics: self.topic_count().await?,
			total_posts: self.post_count().await?,
			total_users: self.user_count().await?,
		})
	}

	async fn close(&self) -> StorageResult<()> {
		// For memory store, there's nothing to close
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::Duration;

	#[tokio::test]
	async fn test_ids_assigned_sequentially() {
		let store = MemoryStore::new();

		let first = store.create_board(Board::new("A", "first")).await.unwrap();
		let second = store.create_board(Board::new("B", "second")).await.unwrap();

		assert_eq!(first.id, 1);
		assert_eq!(second.id, 2);
		assert_eq!(store.board_count().await.unwrap(), 2);
	}

	#[tokio::test]
	async fn test_topics_ordered_by_last_updated_desc() {
		let store = MemoryStore::new();
		let board = store.create_board(Board::new("A", "board")).await.unwrap();

		let mut old = Topic::new(board.id, "old", 1);
		old.last_updated = old.last_updated - Duration::hours(2);
		let old = store.create_topic(old).await.unwrap();
		let fresh = store
			.create_topic(Topic::new(board.id, "fresh", 1))
			.await
			.unwrap();

		let topics = store.list_topics_by_board(board.id).await.unwrap();
		assert_eq!(topics[0].id, fresh.id);
		assert_eq!(topics[1].id, old.id);
	}

	#[tokio::test]
	async fn test_posts_ordered_by_created_at_asc() {
		let store = MemoryStore::new();

		let mut late = Post::new(1, "late", 1);
		late.created_at = late.created_at + Duration::minutes(5);
		store.create_post(late).await.unwrap();
		let early = store.create_post(Post::new(1, "early", 1)).await.unwrap();

		let posts = store.list_posts_by_topic(1).await.unwrap();
		assert_eq!(posts[0].id, early.id);
		assert_eq!(posts[0].message, "early");
		assert_eq!(posts[1].message, "late");
	}

	#[tokio::test]
	async fn test_update_missing_topic_is_not_found() {
		let store = MemoryStore::new();
		let mut topic = Topic::new(1, "ghost", 1);
		topic.id = 99;

		let result = store.update_topic(topic).await;
		assert!(matches!(result, Err(StorageError::NotFound { .. })));
	}

	#[tokio::test]
	async fn test_find_user_by_username() {
		let store = MemoryStore::new();
		store
			.create_user(User::new("alice", "alice@example.com", "s$h"))
			.await
			.unwrap();

		let found = store.find_user_by_username("alice").await.unwrap();
		assert!(found.is_some());
		assert!(store
			.find_user_by_username("nobody")
			.await
			.unwrap()
			.is_none());
	}
}
