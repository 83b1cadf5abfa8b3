//! Core Post domain model and business logic

use chrono::{DateTime, Utc};

pub mod errors;
pub mod request;
pub mod response;

pub use errors::{PostValidationError, PostValidationResult};
pub use request::PostRequest;
pub use response::{PostResponse, ReplyResponse, TopicPostsResponse};

/// A single message within a topic.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
	/// Storage-assigned identifier (0 until persisted)
	pub id: u64,

	/// Topic this post belongs to
	pub topic_id: u64,

	/// Message body
	pub message: String,

	/// User who wrote the post
	pub created_by: u64,

	/// When the post was created
	pub created_at: DateTime<Utc>,

	/// User who last edited the post, if it was ever edited
	pub updated_by: Option<u64>,

	/// When the post was last edited
	pub updated_at: Option<DateTime<Utc>>,
}

impl Post {
	/// Create a new post pending storage assignment of its id
	pub fn new(topic_id: u64, message: impl Into<String>, created_by: u64) -> Self {
		Self {
			id: 0,
			topic_id,
			message: message.into(),
			created_by,
			created_at: Utc::now(),
			updated_by: None,
			updated_at: None,
		}
	}

	/// Apply an edit, recording who made it and when
	pub fn apply_edit(&mut self, message: impl Into<String>, editor_id: u64) {
		self.message = message.into();
		self.updated_by = Some(editor_id);
		self.updated_at = Some(Utc::now());
	}

	/// Whether this post has ever been edited
	pub fn is_edited(&self) -> bool {
		self.updated_at.is_some()
	}
}
