//! Topic service
//!
//! Topic listings with derived reply counts, topic creation and the
//! session-deduplicated view counter.

use std::sync::Arc;

use forum_storage::{SessionStore, Storage};
use forum_types::{topic_view_key, NewTopicRequest, Post, Topic, TopicValidationError};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum TopicServiceError {
	#[error("storage error: {0}")]
	Storage(String),
	#[error("board not found: {0}")]
	BoardNotFound(u64),
	#[error("topic not found: {0}")]
	NotFound(u64),
	#[error("validation error: {0}")]
	Validation(#[from] TopicValidationError),
}

/// A topic together with its starter's username and reply count
#[derive(Debug, Clone)]
pub struct TopicOverview {
	pub topic: Topic,
	pub starter: String,
	/// Post count minus the starter post
	pub replies: usize,
}

#[derive(Clone)]
pub struct TopicService {
	storage: Arc<dyn Storage>,
	sessions: Arc<dyn SessionStore>,
}

impl TopicService {
	pub fn new(storage: Arc<dyn Storage>, sessions: Arc<dyn SessionStore>) -> Self {
		Self { storage, sessions }
	}

	/// List a board's topics, most recently active first, with reply counts
	pub async fn list_board_topics(
		&self,
		board_id: u64,
	) -> Result<Vec<TopicOverview>, TopicServiceError> {
		self.storage
			.get_board(board_id)
			.await
			.map_err(|e| TopicServiceError::Storage(e.to_string()))?
			.ok_or(TopicServiceError::BoardNotFound(board_id))?;

		let topics = self
			.storage
			.list_topics_by_board(board_id)
			.await
			.map_err(|e| TopicServiceError::Storage(e.to_string()))?;

		let mut overviews = Vec::with_capacity(topics.len());
		for topic in topics {
			overviews.push(self.overview(topic).await?);
		}
		Ok(overviews)
	}

	/// Create a topic and its starter post
	pub async fn create_topic(
		&self,
		board_id: u64,
		starter_id: u64,
		request: &NewTopicRequest,
	) -> Result<(Topic, Post), TopicServiceError> {
		request.validate()?;

		self.storage
			.get_board(board_id)
			.await
			.map_err(|e| TopicServiceError::Storage(e.to_string()))?
			.ok_or(TopicServiceError::BoardNotFound(board_id))?;

		let topic = self
			.storage
			.create_topic(Topic::new(board_id, request.subject.trim(), starter_id))
			.await
			.map_err(|e| TopicServiceError::Storage(e.to_string()))?;

		let starter_post = self
			.storage
			.create_post(Post::new(topic.id, request.message.trim(), starter_id))
			.await
			.map_err(|e| TopicServiceError::Storage(e.to_string()))?;

		debug!("Created topic {} in board {}", topic.id, board_id);
		Ok((topic, starter_post))
	}

	/// Fetch a topic scoped to a board; a board mismatch reads as not-found
	pub async fn get_scoped_topic(
		&self,
		board_id: u64,
		topic_id: u64,
	) -> Result<Topic, TopicServiceError> {
		let topic = self
			.storage
			.get_topic(topic_id)
			.await
			.map_err(|e| TopicServiceError::Storage(e.to_string()))?
			.ok_or(TopicServiceError::NotFound(topic_id))?;

		if topic.board_id != board_id {
			return Err(TopicServiceError::NotFound(topic_id));
		}
		Ok(topic)
	}

	/// Count a view for this topic, at most once per browser session.
	///
	/// Returns whether the counter was incremented. The flag check and the
	/// flag write are separate session-store calls, so two simultaneous
	/// requests in the same session can both increment; last writer wins on
	/// the counter itself.
	pub async fn register_view(
		&self,
		session_id: &str,
		topic_id: u64,
	) -> Result<bool, TopicServiceError> {
		let key = topic_view_key(topic_id);

		let already_viewed = self
			.sessions
			.get_flag(session_id, &key)
			.await
			.map_err(|e| TopicServiceError::Storage(e.to_string()))?;
		if already_viewed {
			return Ok(false);
		}

		let mut topic = self
			.storage
			.get_topic(topic_id)
			.await
			.map_err(|e| TopicServiceError::Storage(e.to_string()))?
			.ok_or(TopicServiceError::NotFound(topic_id))?;

		topic.record_view();
		self.storage
			.update_topic(topic)
			.await
			.map_err(|e| TopicServiceError::Storage(e.to_string()))?;

		self.sessions
			.set_flag(session_id, &key, true)
			.await
			.map_err(|e| TopicServiceError::Storage(e.to_string()))?;

		debug!("Counted view for topic {} (session {})", topic_id, session_id);
		Ok(true)
	}

	/// Build the overview for a single topic
	pub async fn overview(&self, topic: Topic) -> Result<TopicOverview, TopicServiceError> {
		let post_count = self
			.storage
			.count_posts_by_topic(topic.id)
			.await
			.map_err(|e| TopicServiceError::Storage(e.to_string()))?;

		let starter = self
			.storage
			.get_user(topic.starter_id)
			.await
			.map_err(|e| TopicServiceError::Storage(e.to_string()))?
			.map(|user| user.username)
			.unwrap_or_else(|| "unknown".to_string());

		Ok(TopicOverview {
			topic,
			starter,
			// The starter post is not a reply
			replies: post_count.saturating_sub(1),
		})
	}
}
