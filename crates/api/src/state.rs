use std::sync::Arc;

use forum_service::{AccountService, BoardService, PostService, TopicService};
use forum_storage::Storage;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
	pub board_service: Arc<BoardService>,
	pub topic_service: Arc<TopicService>,
	pub post_service: Arc<PostService>,
	pub account_service: Arc<AccountService>,
	pub storage: Arc<dyn Storage>,
	/// Items per page on topic and post listings
	pub page_size: usize,
	/// Name of the browser session cookie
	pub session_cookie: String,
}
