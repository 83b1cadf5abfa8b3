//! Account service
//!
//! Signup, login/logout and settings updates. Passwords are stored as
//! `"{salt}${hex(sha256(salt || '$' || password))}"` with a fresh random salt
//! per account.

use std::sync::Arc;

use forum_storage::{SessionStore, Storage};
use forum_types::{LoginRequest, SettingsRequest, SignupRequest, User, UserValidationError};
use sha2::{Digest, Sha256};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum AccountServiceError {
	#[error("storage error: {0}")]
	Storage(String),
	#[error("username already taken: {0}")]
	UsernameTaken(String),
	#[error("invalid username or password")]
	InvalidCredentials,
	#[error("user not found: {0}")]
	NotFound(u64),
	#[error("validation error: {0}")]
	Validation(#[from] UserValidationError),
}

fn digest_password(salt: &str, password: &str) -> String {
	let mut hasher = Sha256::new();
	hasher.update(salt.as_bytes());
	hasher.update(b"$");
	hasher.update(password.as_bytes());
	hex::encode(hasher.finalize())
}

/// Hash a password with a fresh random salt
pub fn hash_password(password: &str) -> String {
	let salt: [u8; 16] = rand::random();
	let salt = hex::encode(salt);
	format!("{}${}", salt, digest_password(&salt, password))
}

/// Check a password against a stored `salt$hash` value
pub fn verify_password(stored: &str, password: &str) -> bool {
	match stored.split_once('$') {
		Some((salt, hash)) => digest_password(salt, password) == hash,
		None => false,
	}
}

#[derive(Clone)]
pub struct AccountService {
	storage: Arc<dyn Storage>,
	sessions: Arc<dyn SessionStore>,
}

impl AccountService {
	pub fn new(storage: Arc<dyn Storage>, sessions: Arc<dyn SessionStore>) -> Self {
		Self { storage, sessions }
	}

	/// Create an account and log it into the given session
	pub async fn signup(
		&self,
		session_id: &str,
		request: &SignupRequest,
	) -> Result<User, AccountServiceError> {
		request.validate()?;

		let username = request.username.trim();
		let existing = self
			.storage
			.find_user_by_username(username)
			.await
			.map_err(|e| AccountServiceError::Storage(e.to_string()))?;
		if existing.is_some() {
			return Err(AccountServiceError::UsernameTaken(username.to_string()));
		}

		let user = self
			.storage
			.create_user(User::new(
				username,
				request.email.trim(),
				hash_password(&request.password),
			))
			.await
			.map_err(|e| AccountServiceError::Storage(e.to_string()))?;

		self.sessions
			.set_current_user(session_id, user.id)
			.await
			.map_err(|e| AccountServiceError::Storage(e.to_string()))?;

		info!("Created account {} ({})", user.id, user.username);
		Ok(user)
	}

	/// Log a user into the given session
	pub async fn login(
		&self,
		session_id: &str,
		request: &LoginRequest,
	) -> Result<User, AccountServiceError> {
		let user = self
			.storage
			.find_user_by_username(request.username.trim())
			.await
			.map_err(|e| AccountServiceError::Storage(e.to_string()))?
			.ok_or(AccountServiceError::InvalidCredentials)?;

		if !verify_password(&user.password_hash, &request.password) {
			return Err(AccountServiceError::InvalidCredentials);
		}

		self.sessions
			.set_current_user(session_id, user.id)
			.await
			.map_err(|e| AccountServiceError::Storage(e.to_string()))?;

		debug!("User {} logged in", user.username);
		Ok(user)
	}

	/// Log the session out, dropping all its state
	pub async fn logout(&self, session_id: &str) -> Result<(), AccountServiceError> {
		self.sessions
			.clear(session_id)
			.await
			.map_err(|e| AccountServiceError::Storage(e.to_string()))
	}

	/// Resolve the user currently logged into a session, if any
	pub async fn current_user(
		&self,
		session_id: &str,
	) -> Result<Option<User>, AccountServiceError> {
		let user_id = match self
			.sessions
			.current_user(session_id)
			.await
			.map_err(|e| AccountServiceError::Storage(e.to_string()))?
		{
			Some(id) => id,
			None => return Ok(None),
		};

		self.storage
			.get_user(user_id)
			.await
			.map_err(|e| AccountServiceError::Storage(e.to_string()))
	}

	/// Update profile settings for an account
	pub async fn update_settings(
		&self,
		user_id: u64,
		request: &SettingsRequest,
	) -> Result<User, AccountServiceError> {
		request.validate()?;

		let mut user = self
			.storage
			.get_user(user_id)
			.await
			.map_err(|e| AccountServiceError::Storage(e.to_string()))?
			.ok_or(AccountServiceError::NotFound(user_id))?;

		user.first_name = request.first_name.trim().to_string();
		user.last_name = request.last_name.trim().to_string();
		user.email = request.email.trim().to_string();

		self.storage
			.update_user(user.clone())
			.await
			.map_err(|e| AccountServiceError::Storage(e.to_string()))?;

		debug!("Updated settings for user {}", user.username);
		Ok(user)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use forum_storage::{MemorySessionStore, MemoryStore};

	fn service() -> AccountService {
		AccountService::new(
			Arc::new(MemoryStore::new()),
			Arc::new(MemorySessionStore::new()),
		)
	}

	fn signup_request() -> SignupRequest {
		SignupRequest {
			username: "alice".to_string(),
			email: "alice@example.com".to_string(),
			password: "correct horse battery".to_string(),
		}
	}

	#[test]
	fn test_password_hash_roundtrip() {
		let stored = hash_password("hunter2hunter2");
		assert!(verify_password(&stored, "hunter2hunter2"));
		assert!(!verify_password(&stored, "wrong password"));
	}

	#[test]
	fn test_password_hashes_are_salted() {
		assert_ne!(hash_password("same"), hash_password("same"));
	}

	#[tokio::test]
	async fn test_signup_logs_session_in() {
		let service = service();
		let user = service.signup("s1", &signup_request()).await.unwrap();

		let current = service.current_user("s1").await.unwrap();
		assert_eq!(current.map(|u| u.id), Some(user.id));
	}

	#[tokio::test]
	async fn test_duplicate_username_rejected() {
		let service = service();
		service.signup("s1", &signup_request()).await.unwrap();

		let result = service.signup("s2", &signup_request()).await;
		assert!(matches!(result, Err(AccountServiceError::UsernameTaken(_))));
	}

	#[tokio::test]
	async fn test_login_with_wrong_password_fails() {
		let service = service();
		service.signup("s1", &signup_request()).await.unwrap();

		let result = service
			.login(
				"s2",
				&LoginRequest {
					username: "alice".to_string(),
					password: "wrong password".to_string(),
				},
			)
			.await;
		assert!(matches!(
			result,
			Err(AccountServiceError::InvalidCredentials)
		));
	}

	#[tokio::test]
	async fn test_logout_clears_session() {
		let service = service();
		service.signup("s1", &signup_request()).await.unwrap();

		service.logout("s1").await.unwrap();
		assert!(service.current_user("s1").await.unwrap().is_none());
	}

	#[tokio::test]
	async fn test_update_settings() {
		let service = service();
		let user = service.signup("s1", &signup_request()).await.unwrap();

		let updated = service
			.update_settings(
				user.id,
				&SettingsRequest {
					first_name: "Alice".to_string(),
					last_name: "Liddell".to_string(),
					email: "alice@wonderland.example".to_string(),
				},
			)
			.await
			.unwrap();

		assert_eq!(updated.first_name, "Alice");
		assert_eq!(updated.email, "alice@wonderland.example");
	}
}
