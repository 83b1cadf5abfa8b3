//! Error types for account operations

use thiserror::Error;

/// Validation errors for signup and settings updates
#[derive(Error, Debug, PartialEq)]
pub enum UserValidationError {
	#[error("Username cannot be empty")]
	EmptyUsername,

	#[error("Username too long: {len} characters (maximum {max})")]
	UsernameTooLong { len: usize, max: usize },

	#[error("Invalid email address: {email}")]
	InvalidEmail { email: String },

	#[error("Password too short (minimum {min} characters)")]
	PasswordTooShort { min: usize },
}

pub type UserValidationResult<T> = Result<T, UserValidationError>;
