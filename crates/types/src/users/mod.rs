//! Core User domain model

use chrono::{DateTime, Utc};

pub mod errors;
pub mod request;
pub mod response;

pub use errors::{UserValidationError, UserValidationResult};
pub use request::{LoginRequest, SettingsRequest, SignupRequest};
pub use response::AccountResponse;

/// A registered forum account.
///
/// `password_hash` holds `"{salt}${hex(sha256(salt || password))}"` and is
/// never serialized outward; the response type exposes profile fields only.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
	/// Storage-assigned identifier (0 until persisted)
	pub id: u64,

	/// Login name, unique per forum
	pub username: String,

	pub email: String,
	pub first_name: String,
	pub last_name: String,

	/// Salted password hash (see `forum-service`'s account service)
	pub password_hash: String,

	/// When the account was created
	pub created_at: DateTime<Utc>,
}

impl User {
	/// Create a new user pending storage assignment of its id
	pub fn new(
		username: impl Into<String>,
		email: impl Into<String>,
		password_hash: impl Into<String>,
	) -> Self {
		Self {
			id: 0,
			username: username.into(),
			email: email.into(),
			first_name: String::new(),
			last_name: String::new(),
			password_hash: password_hash.into(),
			created_at: Utc::now(),
		}
	}
}
