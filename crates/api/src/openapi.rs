use utoipa::OpenApi;

use crate::handlers::{accounts, boards, health, posts, topics};

use forum_types::boards::{BoardResponse, BoardsResponse};
use forum_types::posts::{PostRequest, PostResponse, ReplyResponse, TopicPostsResponse};
use forum_types::topics::{NewTopicRequest, TopicResponse, TopicsPageResponse};
use forum_types::users::{AccountResponse, LoginRequest, SettingsRequest, SignupRequest};

#[derive(OpenApi)]
#[openapi(
	paths(
		health::health,
		health::ready,
		boards::get_boards,
		boards::get_board_by_id,
		topics::get_board_topics,
		topics::post_board_topics,
		posts::get_topic_posts,
		posts::post_reply,
		posts::put_post,
		accounts::post_accounts,
		accounts::get_me,
		accounts::put_me,
		accounts::post_sessions,
		accounts::delete_sessions,
	),
	components(schemas(
		BoardResponse, BoardsResponse,
		NewTopicRequest, TopicResponse, TopicsPageResponse,
		PostRequest, PostResponse, TopicPostsResponse, ReplyResponse,
		SignupRequest, LoginRequest, SettingsRequest, AccountResponse
	)),
	tags(
		(name = "boards", description = "Board listing endpoints"),
		(name = "topics", description = "Topic listing and creation endpoints"),
		(name = "posts", description = "Topic pages, replies and edits"),
		(name = "accounts", description = "Account and session endpoints"),
		(name = "health", description = "Health and readiness endpoints")
	)
)]
pub struct ApiDoc;
