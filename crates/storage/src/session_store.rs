//! In-memory session store implementation using DashMap

use crate::traits::{SessionStore, StorageResult};
use async_trait::async_trait;
use dashmap::DashMap;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Default, Clone)]
struct SessionData {
	user_id: Option<u64>,
	flags: HashMap<String, bool>,
}

/// In-memory session storage keyed by the browser session token
///
/// Sessions live for the lifetime of the process; there is no expiry. A new
/// browser session (new token) starts empty, so per-session view flags reset
/// with it.
#[derive(Clone, Default)]
pub struct MemorySessionStore {
	sessions: Arc<DashMap<String, SessionData>>,
}

impl MemorySessionStore {
	/// Create a new session store instance
	pub fn new() -> Self {
		Self {
			sessions: Arc::new(DashMap::new()),
		}
	}

	/// Number of sessions currently held
	pub fn session_count(&self) -> usize {
		self.sessions.len()
	}
}

#[async_trait]
impl SessionStore for MemorySessionStore {
	async fn get_flag(&self, session_id: &str, key: &str) -> StorageResult<bool> {
		Ok(self
			.sessions
			.get(session_id)
			.map(|session| session.flags.get(key).copied().unwrap_or(false))
			.unwrap_or(false))
	}

	async fn set_flag(&self, session_id: &str, key: &str, value: bool) -> StorageResult<()> {
		self.sessions
			.entry(session_id.to_string())
			.or_default()
			.flags
			.insert(key.to_string(), value);
		Ok(())
	}

	async fn current_user(&self, session_id: &str) -> StorageResult<Option<u64>> {
		Ok(self
			.sessions
			.get(session_id)
			.and_then(|session| session.user_id))
	}

	async fn set_current_user(&self, session_id: &str, user_id: u64) -> StorageResult<()> {
		self.sessions
			.entry(session_id.to_string())
			.or_default()
			.user_id = Some(user_id);
		Ok(())
	}

	async fn clear(&self, session_id: &str) -> StorageResult<()> {
		self.sessions.remove(session_id);
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[tokio::test]
	async fn test_flags_default_to_false() {
		let store = MemorySessionStore::new();

		assert!(!store.get_flag("s1", "viewed_topic_1").await.unwrap());

		store.set_flag("s1", "viewed_topic_1", true).await.unwrap();
		assert!(store.get_flag("s1", "viewed_topic_1").await.unwrap());

		// Other sessions are unaffected
		assert!(!store.get_flag("s2", "viewed_topic_1").await.unwrap());
	}

	#[tokio::test]
	async fn test_current_user_roundtrip() {
		let store = MemorySessionStore::new();

		assert_eq!(store.current_user("s1").await.unwrap(), None);
		store.set_current_user("s1", 7).await.unwrap();
		assert_eq!(store.current_user("s1").await.unwrap(), Some(7));
	}

	#[tokio::test]
	async fn test_clear_drops_all_session_state() {
		let store = MemorySessionStore::new();
		store.set_current_user("s1", 7).await.unwrap();
		store.set_flag("s1", "viewed_topic_1", true).await.unwrap();

		store.clear("s1").await.unwrap();

		assert_eq!(store.current_user("s1").await.unwrap(), None);
		assert!(!store.get_flag("s1", "viewed_topic_1").await.unwrap());
	}
}
