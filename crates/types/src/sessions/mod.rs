//! Browser session state
//!
//! A session is a key-value record scoped to a browser-supplied token. The
//! forum uses it for two things: remembering which user is logged in, and
//! the per-topic "already viewed" flags that deduplicate view counting.

use crate::storage::StorageResult;
use async_trait::async_trait;

/// Session key gating the view counter for a topic.
///
/// Deterministic per topic so that repeat visits within one session hit the
/// same flag.
pub fn topic_view_key(topic_id: u64) -> String {
	format!("viewed_topic_{}", topic_id)
}

/// Trait for pluggable session storage
///
/// Flags default to `false` for sessions or keys that were never written.
/// Sessions may expire or reset per the backend's own policy; a fresh session
/// simply starts with no flags and no user.
#[async_trait]
pub trait SessionStore: Send + Sync {
	/// Read a boolean flag for a session. Absent keys read as `false`.
	async fn get_flag(&self, session_id: &str, key: &str) -> StorageResult<bool>;

	/// Write a boolean flag for a session
	async fn set_flag(&self, session_id: &str, key: &str, value: bool) -> StorageResult<()>;

	/// The user currently logged into this session, if any
	async fn current_user(&self, session_id: &str) -> StorageResult<Option<u64>>;

	/// Log a user into this session
	async fn set_current_user(&self, session_id: &str, user_id: u64) -> StorageResult<()>;

	/// Drop all state held for a session (logout)
	async fn clear(&self, session_id: &str) -> StorageResult<()>;
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_topic_view_key_is_deterministic() {
		assert_eq!(topic_view_key(42), "viewed_topic_42");
		assert_eq!(topic_view_key(42), topic_view_key(42));
		assert_ne!(topic_view_key(1), topic_view_key(2));
	}
}
