//! Core Topic domain model and business logic

use chrono::{DateTime, Utc};

pub mod errors;
pub mod request;
pub mod response;

pub use errors::{TopicValidationError, TopicValidationResult};
pub use request::NewTopicRequest;
pub use response::{TopicResponse, TopicsPageResponse};

/// A discussion thread within a board.
///
/// Every topic owns a starter post; the reply count shown to clients is the
/// topic's post count minus that starter post.
#[derive(Debug, Clone, PartialEq)]
pub struct Topic {
	/// Storage-assigned identifier (0 until persisted)
	pub id: u64,

	/// Board this topic belongs to
	pub board_id: u64,

	/// Thread subject line
	pub subject: String,

	/// User who started the topic
	pub starter_id: u64,

	/// Persisted view counter, monotonically non-decreasing
	pub views: u64,

	/// Bumped whenever a reply is posted; board listings order by this
	pub last_updated: DateTime<Utc>,

	/// When the topic was created
	pub created_at: DateTime<Utc>,
}

impl Topic {
	/// Create a new topic pending storage assignment of its id
	pub fn new(board_id: u64, subject: impl Into<String>, starter_id: u64) -> Self {
		let now = Utc::now();

		Self {
			id: 0,
			board_id,
			subject: subject.into(),
			starter_id,
			views: 0,
			last_updated: now,
			created_at: now,
		}
	}

	/// Count one more view
	pub fn record_view(&mut self) {
		self.views += 1;
	}

	/// Mark the topic as active now (called when a reply lands)
	pub fn touch(&mut self) {
		self.last_updated = Utc::now();
	}
}
