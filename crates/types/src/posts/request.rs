//! Post request model and validation

use crate::constants::limits::MAX_MESSAGE_LEN;
use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use super::{PostValidationError, PostValidationResult};

/// API request body for replies and post edits
#[derive(Debug, Clone, Deserialize, Serialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PostRequest {
	/// Message body
	pub message: String,
}

impl PostRequest {
	/// Validate the message length
	pub fn validate(&self) -> PostValidationResult<()> {
		let message = self.message.trim();
		if message.is_empty() {
			return Err(PostValidationError::EmptyMessage);
		}
		if message.len() > MAX_MESSAGE_LEN {
			return Err(PostValidationError::MessageTooLong {
				len: message.len(),
				max: MAX_MESSAGE_LEN,
			});
		}

		Ok(())
	}
}
