//! Post response models for API layer

use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use super::Post;
use crate::topics::TopicResponse;

/// Response format for individual posts in API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PostResponse {
	pub id: u64,
	pub topic_id: u64,
	pub message: String,
	/// Username of the post author
	pub author: String,
	pub created_at: i64,
	pub updated_at: Option<i64>,
	pub edited: bool,
}

impl PostResponse {
	/// Build from a domain post plus its author's username
	pub fn from_post(post: &Post, author: impl Into<String>) -> Self {
		Self {
			id: post.id,
			topic_id: post.topic_id,
			message: post.message.clone(),
			author: author.into(),
			created_at: post.created_at.timestamp(),
			updated_at: post.updated_at.map(|dt| dt.timestamp()),
			edited: post.is_edited(),
		}
	}
}

/// One page of a topic's posts, together with the topic itself
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TopicPostsResponse {
	pub topic: TopicResponse,
	pub posts: Vec<PostResponse>,
	pub current_page: usize,
	pub total_pages: usize,
	pub total_posts: usize,
	pub timestamp: i64,
}

/// Response for a newly created reply
///
/// `last_page` is the page the new post landed on, so clients can jump
/// straight to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ReplyResponse {
	pub post: PostResponse,
	pub last_page: usize,
	pub timestamp: i64,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_post_response_from_domain() {
		let mut post = Post::new(5, "hello", 2);
		post.id = 11;

		let response = PostResponse::from_post(&post, "bob");

		assert_eq!(response.id, 11);
		assert_eq!(response.topic_id, 5);
		assert_eq!(response.author, "bob");
		assert!(!response.edited);
		assert!(response.updated_at.is_none());
	}

	#[test]
	fn test_edited_post_reflects_update() {
		let mut post = Post::new(5, "hello", 2);
		post.apply_edit("hello again", 2);

		let response = PostResponse::from_post(&post, "bob");

		assert!(response.edited);
		assert!(response.updated_at.is_some());
	}
}
