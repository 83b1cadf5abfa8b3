pub mod accounts;
pub mod boards;
pub mod common;
pub mod health;
pub mod posts;
pub mod topics;

pub use accounts::{delete_sessions, get_me, post_accounts, post_sessions, put_me};
pub use boards::{get_board_by_id, get_boards};
pub use health::{health, ready};
pub use posts::{get_topic_posts, post_reply, put_post};
pub use topics::{get_board_topics, post_board_topics};
