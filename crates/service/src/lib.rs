//! Forum Service
//!
//! Core logic for boards, topics, posts and accounts: listing with derived
//! counts, session-deduplicated view counting, ownership-checked edits and
//! account management.

pub mod account;
pub mod board;
pub mod post;
pub mod topic;

pub use account::{AccountService, AccountServiceError};
pub use board::{BoardOverview, BoardService, BoardServiceError};
pub use post::{EditAccess, PostService, PostServiceError, PostWithAuthor};
pub use topic::{TopicOverview, TopicService, TopicServiceError};
