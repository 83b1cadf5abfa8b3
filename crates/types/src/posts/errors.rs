//! Error types for post operations

use thiserror::Error;

/// Validation errors for post submissions and edits
#[derive(Error, Debug, PartialEq)]
pub enum PostValidationError {
	#[error("Message cannot be empty")]
	EmptyMessage,

	#[error("Message too long: {len} characters (maximum {max})")]
	MessageTooLong { len: usize, max: usize },
}

pub type PostValidationResult<T> = Result<T, PostValidationError>;
