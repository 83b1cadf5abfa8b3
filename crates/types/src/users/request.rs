//! Account request models and validation

use crate::constants::limits::{MAX_USERNAME_LEN, MIN_PASSWORD_LEN};
use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use super::{UserValidationError, UserValidationResult};

fn validate_email(email: &str) -> UserValidationResult<()> {
	// Same bar as the usual form-level check: something@something
	let trimmed = email.trim();
	match trimmed.split_once('@') {
		Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
		_ => Err(UserValidationError::InvalidEmail {
			email: trimmed.to_string(),
		}),
	}
}

/// API request body for POST /api/v1/accounts (signup)
#[derive(Debug, Clone, Deserialize, Serialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SignupRequest {
	pub username: String,
	pub email: String,
	pub password: String,
}

impl SignupRequest {
	/// Validate signup fields
	pub fn validate(&self) -> UserValidationResult<()> {
		let username = self.username.trim();
		if username.is_empty() {
			return Err(UserValidationError::EmptyUsername);
		}
		if username.len() > MAX_USERNAME_LEN {
			return Err(UserValidationError::UsernameTooLong {
				len: username.len(),
				max: MAX_USERNAME_LEN,
			});
		}

		validate_email(&self.email)?;

		if self.password.len() < MIN_PASSWORD_LEN {
			return Err(UserValidationError::PasswordTooShort {
				min: MIN_PASSWORD_LEN,
			});
		}

		Ok(())
	}
}

/// API request body for POST /api/v1/sessions (login)
#[derive(Debug, Clone, Deserialize, Serialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LoginRequest {
	pub username: String,
	pub password: String,
}

/// API request body for PUT /api/v1/accounts/me (settings)
#[derive(Debug, Clone, Deserialize, Serialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SettingsRequest {
	pub first_name: String,
	pub last_name: String,
	pub email: String,
}

impl SettingsRequest {
	/// Validate settings fields
	pub fn validate(&self) -> UserValidationResult<()> {
		validate_email(&self.email)
	}
}
