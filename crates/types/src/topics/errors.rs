//! Error types for topic operations

use thiserror::Error;

/// Validation errors for new topic submissions
#[derive(Error, Debug, PartialEq)]
pub enum TopicValidationError {
	#[error("Subject cannot be empty")]
	EmptySubject,

	#[error("Subject too long: {len} characters (maximum {max})")]
	SubjectTooLong { len: usize, max: usize },

	#[error("Message cannot be empty")]
	EmptyMessage,

	#[error("Message too long: {len} characters (maximum {max})")]
	MessageTooLong { len: usize, max: usize },
}

pub type TopicValidationResult<T> = Result<T, TopicValidationError>;
