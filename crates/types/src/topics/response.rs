//! Topic response models for API layer

use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use super::Topic;
use crate::boards::BoardResponse;

/// Response format for individual topics in API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TopicResponse {
	pub id: u64,
	pub board_id: u64,
	pub subject: String,
	/// Username of the topic starter
	pub starter: String,
	pub views: u64,
	/// Reply count, excluding the starter post
	pub replies: usize,
	pub last_updated: i64,
	pub created_at: i64,
}

impl TopicResponse {
	/// Build from a domain topic plus its starter's username and reply count
	pub fn from_topic(topic: &Topic, starter: impl Into<String>, replies: usize) -> Self {
		Self {
			id: topic.id,
			board_id: topic.board_id,
			subject: topic.subject.clone(),
			starter: starter.into(),
			views: topic.views,
			replies,
			last_updated: topic.last_updated.timestamp(),
			created_at: topic.created_at.timestamp(),
		}
	}
}

/// One page of a board's topic listing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TopicsPageResponse {
	pub board: BoardResponse,
	pub topics: Vec<TopicResponse>,
	pub current_page: usize,
	pub total_pages: usize,
	pub total_topics: usize,
	pub timestamp: i64,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_topic_response_from_domain() {
		let mut topic = Topic::new(1, "Borrow checker woes", 7);
		topic.id = 3;
		topic.views = 9;

		let response = TopicResponse::from_topic(&topic, "alice", 4);

		assert_eq!(response.id, 3);
		assert_eq!(response.board_id, 1);
		assert_eq!(response.starter, "alice");
		assert_eq!(response.views, 9);
		assert_eq!(response.replies, 4);
	}
}
