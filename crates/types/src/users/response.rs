//! Account response models for API layer

use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use super::User;

/// Response format for the authenticated account
///
/// Deliberately excludes the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AccountResponse {
	pub id: u64,
	pub username: String,
	pub email: String,
	pub first_name: String,
	pub last_name: String,
	pub joined_at: i64,
}

impl From<&User> for AccountResponse {
	fn from(user: &User) -> Self {
		Self {
			id: user.id,
			username: user.username.clone(),
			email: user.email.clone(),
			first_name: user.first_name.clone(),
			last_name: user.last_name.clone(),
			joined_at: user.created_at.timestamp(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_account_response_hides_password_hash() {
		let user = User::new("alice", "alice@example.com", "salt$hash");
		let response = AccountResponse::from(&user);

		let json = serde_json::to_string(&response).unwrap();
		assert!(!json.contains("hash"));
		assert!(json.contains("alice"));
	}
}
