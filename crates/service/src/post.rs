//! Post service
//!
//! Post listings, replies and ownership-checked edits.

use std::sync::Arc;

use forum_storage::Storage;
use forum_types::{Post, PostRequest, PostValidationError};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum PostServiceError {
	#[error("storage error: {0}")]
	Storage(String),
	#[error("post not found: {0}")]
	NotFound(u64),
	#[error("topic not found: {0}")]
	TopicNotFound(u64),
	#[error("validation error: {0}")]
	Validation(#[from] PostValidationError),
}

/// Outcome of the edit authorization predicate
///
/// A denied edit is reported as not-found so that another user's post cannot
/// be probed for existence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAccess {
	Granted,
	DeniedHidden,
}

/// Decide whether `editor_id` may edit `post`. Only the author may.
pub fn authorize_edit(post: &Post, editor_id: u64) -> EditAccess {
	if post.created_by == editor_id {
		EditAccess::Granted
	} else {
		EditAccess::DeniedHidden
	}
}

/// A post together with its author's username
#[derive(Debug, Clone)]
pub struct PostWithAuthor {
	pub post: Post,
	pub author: String,
}

#[derive(Clone)]
pub struct PostService {
	storage: Arc<dyn Storage>,
}

impl PostService {
	pub fn new(storage: Arc<dyn Storage>) -> Self {
		Self { storage }
	}

	/// List a topic's posts, oldest first, with author usernames
	pub async fn list_topic_posts(
		&self,
		topic_id: u64,
	) -> Result<Vec<PostWithAuthor>, PostServiceError> {
		let posts = self
			.storage
			.list_posts_by_topic(topic_id)
			.await
			.map_err(|e| PostServiceError::Storage(e.to_string()))?;

		let mut result = Vec::with_capacity(posts.len());
		for post in posts {
			let author = self.author_name(post.created_by).await?;
			result.push(PostWithAuthor { post, author });
		}
		Ok(result)
	}

	/// Create a reply and bump the topic's activity timestamp.
	///
	/// Returns the post with its author plus the topic's new post count, so
	/// the caller can point the client at the listing's last page.
	pub async fn reply(
		&self,
		board_id: u64,
		topic_id: u64,
		author_id: u64,
		request: &PostRequest,
	) -> Result<(PostWithAuthor, usize), PostServiceError> {
		request.validate()?;

		let mut topic = self.scoped_topic(board_id, topic_id).await?;

		let post = self
			.storage
			.create_post(Post::new(topic_id, request.message.trim(), author_id))
			.await
			.map_err(|e| PostServiceError::Storage(e.to_string()))?;

		topic.touch();
		self.storage
			.update_topic(topic)
			.await
			.map_err(|e| PostServiceError::Storage(e.to_string()))?;

		let post_count = self
			.storage
			.count_posts_by_topic(topic_id)
			.await
			.map_err(|e| PostServiceError::Storage(e.to_string()))?;

		debug!("Created reply {} in topic {}", post.id, topic_id);
		let author = self.author_name(author_id).await?;
		Ok((PostWithAuthor { post, author }, post_count))
	}

	/// Edit a post. Only the author may edit; anyone else sees not-found.
	pub async fn edit_post(
		&self,
		board_id: u64,
		topic_id: u64,
		post_id: u64,
		editor_id: u64,
		request: &PostRequest,
	) -> Result<PostWithAuthor, PostServiceError> {
		request.validate()?;

		// Scope checks first: a mismatched board/topic/post path is a 404
		self.scoped_topic(board_id, topic_id).await?;

		let mut post = self
			.storage
			.get_post(post_id)
			.await
			.map_err(|e| PostServiceError::Storage(e.to_string()))?
			.ok_or(PostServiceError::NotFound(post_id))?;
		if post.topic_id != topic_id {
			return Err(PostServiceError::NotFound(post_id));
		}

		// Authorization decided before any mutation
		if authorize_edit(&post, editor_id) == EditAccess::DeniedHidden {
			return Err(PostServiceError::NotFound(post_id));
		}

		post.apply_edit(request.message.trim(), editor_id);
		self.storage
			.update_post(post.clone())
			.await
			.map_err(|e| PostServiceError::Storage(e.to_string()))?;

		debug!("Edited post {} in topic {}", post_id, topic_id);
		let author = self.author_name(post.created_by).await?;
		Ok(PostWithAuthor { post, author })
	}

	async fn scoped_topic(
		&self,
		board_id: u64,
		topic_id: u64,
	) -> Result<forum_types::Topic, PostServiceError> {
		let topic = self
			.storage
			.get_topic(topic_id)
			.await
			.map_err(|e| PostServiceError::Storage(e.to_string()))?
			.ok_or(PostServiceError::TopicNotFound(topic_id))?;
		if topic.board_id != board_id {
			return Err(PostServiceError::TopicNotFound(topic_id));
		}
		Ok(topic)
	}

	async fn author_name(&self, user_id: u64) -> Result<String, PostServiceError> {
		Ok(self
			.storage
			.get_user(user_id)
			.await
			.map_err(|e| PostServiceError::Storage(e.to_string()))?
			.map(|user| user.username)
			.unwrap_or_else(|| "unknown".to_string()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use forum_storage::traits::*;
	use forum_storage::MemoryStore;
	use forum_types::{Board, Topic, User};

	async fn seed() -> (Arc<MemoryStore>, PostService, u64, u64) {
		let store = Arc::new(MemoryStore::new());
		let service = PostService::new(store.clone());

		let board = store
			.create_board(Board::new("Rust", "All things Rust."))
			.await
			.unwrap();
		let topic = store
			.create_topic(Topic::new(board.id, "Hello", 1))
			.await
			.unwrap();
		store
			.create_user(User::new("alice", "alice@example.com", "s$h"))
			.await
			.unwrap();
		store
			.create_user(User::new("bob", "bob@example.com", "s$h"))
			.await
			.unwrap();
		store
			.create_post(Post::new(topic.id, "starter", 1))
			.await
			.unwrap();

		(store, service, board.id, topic.id)
	}

	#[test]
	fn test_authorize_edit_outcomes() {
		let post = Post::new(1, "hello", 7);
		assert_eq!(authorize_edit(&post, 7), EditAccess::Granted);
		assert_eq!(authorize_edit(&post, 8), EditAccess::DeniedHidden);
	}

	#[tokio::test]
	async fn test_reply_bumps_topic_activity() {
		let (store, service, board_id, topic_id) = seed().await;
		let before = store.get_topic(topic_id).await.unwrap().unwrap();

		let request = PostRequest {
			message: "a reply".to_string(),
		};
		let (reply, post_count) = service
			.reply(board_id, topic_id, 2, &request)
			.await
			.unwrap();

		assert_eq!(post_count, 2);
		assert_eq!(reply.author, "bob");
		let after = store.get_topic(topic_id).await.unwrap().unwrap();
		assert!(after.last_updated >= before.last_updated);
	}

	#[tokio::test]
	async fn test_non_owner_edit_reads_as_not_found() {
		let (_, service, board_id, topic_id) = seed().await;
		let request = PostRequest {
			message: "hijacked".to_string(),
		};

		// bob (id 2) trying to edit alice's starter post (id 1)
		let result = service
			.edit_post(board_id, topic_id, 1, 2, &request)
			.await;
		assert!(matches!(result, Err(PostServiceError::NotFound(1))));
	}

	#[tokio::test]
	async fn test_owner_edit_records_editor_and_time() {
		let (store, service, board_id, topic_id) = seed().await;
		let request = PostRequest {
			message: "edited".to_string(),
		};

		let edited = service
			.edit_post(board_id, topic_id, 1, 1, &request)
			.await
			.unwrap();

		assert_eq!(edited.post.message, "edited");
		assert_eq!(edited.post.updated_by, Some(1));
		assert!(edited.post.updated_at.is_some());

		let stored = store.get_post(1).await.unwrap().unwrap();
		assert_eq!(stored.message, "edited");
	}

	#[tokio::test]
	async fn test_edit_checks_topic_scope() {
		let (store, service, _, topic_id) = seed().await;
		let other = store
			.create_board(Board::new("Go", "Other board."))
			.await
			.unwrap();
		let request = PostRequest {
			message: "edited".to_string(),
		};

		let result = service
			.edit_post(other.id, topic_id, 1, 1, &request)
			.await;
		assert!(matches!(result, Err(PostServiceError::TopicNotFound(_))));
	}
}
