//! Topic request model and validation

use crate::constants::limits::{MAX_MESSAGE_LEN, MAX_SUBJECT_LEN};
use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use super::{TopicValidationError, TopicValidationResult};

/// API request body for POST /api/v1/boards/{id}/topics
///
/// Creates the topic together with its starter post.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewTopicRequest {
	/// Thread subject line
	pub subject: String,
	/// Starter post message
	pub message: String,
}

impl NewTopicRequest {
	/// Validate subject and starter message lengths
	pub fn validate(&self) -> TopicValidationResult<()> {
		let subject = self.subject.trim();
		if subject.is_empty() {
			return Err(TopicValidationError::EmptySubject);
		}
		if subject.len() > MAX_SUBJECT_LEN {
			return Err(TopicValidationError::SubjectTooLong {
				len: subject.len(),
				max: MAX_SUBJECT_LEN,
			});
		}

		let message = self.message.trim();
		if message.is_empty() {
			return Err(TopicValidationError::EmptyMessage);
		}
		if message.len() > MAX_MESSAGE_LEN {
			return Err(TopicValidationError::MessageTooLong {
				len: message.len(),
				max: MAX_MESSAGE_LEN,
			});
		}

		Ok(())
	}
}
