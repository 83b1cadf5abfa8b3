//! Post handlers
//!
//! Includes the topic page itself: fetching a topic's posts is what counts a
//! view, deduplicated per browser session.

use axum::{
	extract::{Extension, Path, Query, State},
	http::StatusCode,
	response::Json,
};
use tracing::debug;

use forum_service::PostServiceError;
use forum_types::{PostRequest, PostResponse, ReplyResponse, TopicPostsResponse, TopicResponse};

use crate::handlers::common::{error_response, internal_error, require_user, ApiError};
#[cfg(feature = "openapi")]
use crate::handlers::common::ErrorResponse;
use crate::handlers::topics::map_topic_error;
use crate::pagination::{paginate, total_pages, PageQuery};
use crate::session::SessionId;
use crate::state::AppState;

fn map_post_error(e: PostServiceError) -> ApiError {
	match e {
		PostServiceError::TopicNotFound(id) => error_response(
			StatusCode::NOT_FOUND,
			"TOPIC_NOT_FOUND",
			format!("Topic {} not found", id),
		),
		PostServiceError::NotFound(id) => error_response(
			StatusCode::NOT_FOUND,
			"POST_NOT_FOUND",
			format!("Post {} not found", id),
		),
		PostServiceError::Validation(e) => {
			error_response(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", e.to_string())
		},
		PostServiceError::Storage(msg) => internal_error(msg),
	}
}

/// GET /api/v1/boards/{id}/topics/{topic_id} - One page of a topic's posts
///
/// Reading a topic counts one view per browser session.
#[cfg_attr(feature = "openapi", utoipa::path(
	get,
	path = "/api/v1/boards/{id}/topics/{topic_id}",
	params(
		("id" = u64, Path, description = "Board ID"),
		("topic_id" = u64, Path, description = "Topic ID"),
		("page" = Option<String>, Query, description = "Page number; invalid values mean page 1")
	),
	responses(
		(status = 200, description = "Page of posts", body = TopicPostsResponse),
		(status = 404, description = "Not found", body = ErrorResponse)
	),
	tag = "posts"
))]
pub async fn get_topic_posts(
	State(state): State<AppState>,
	Extension(session): Extension<SessionId>,
	Path((board_id, topic_id)): Path<(u64, u64)>,
	Query(query): Query<PageQuery>,
) -> Result<Json<TopicPostsResponse>, ApiError> {
	// Scope check first so a foreign topic reads as 404 without counting
	state
		.topic_service
		.get_scoped_topic(board_id, topic_id)
		.await
		.map_err(map_topic_error)?;

	state
		.topic_service
		.register_view(&session.0, topic_id)
		.await
		.map_err(map_topic_error)?;

	// Re-fetch so the response carries the post-view counter
	let topic = state
		.topic_service
		.get_scoped_topic(board_id, topic_id)
		.await
		.map_err(map_topic_error)?;
	let overview = state
		.topic_service
		.overview(topic)
		.await
		.map_err(map_topic_error)?;

	let posts = state
		.post_service
		.list_topic_posts(topic_id)
		.await
		.map_err(map_post_error)?;

	let total_posts = posts.len();
	let page = paginate(posts, query.page.as_deref(), state.page_size);

	let posts = page
		.items
		.iter()
		.map(|p| PostResponse::from_post(&p.post, p.author.clone()))
		.collect();

	Ok(Json(TopicPostsResponse {
		topic: TopicResponse::from_topic(&overview.topic, overview.starter, overview.replies),
		posts,
		current_page: page.current_page,
		total_pages: page.total_pages,
		total_posts,
		timestamp: chrono::Utc::now().timestamp(),
	}))
}

/// POST /api/v1/boards/{id}/topics/{topic_id}/posts - Reply (authenticated)
#[cfg_attr(feature = "openapi", utoipa::path(
	post,
	path = "/api/v1/boards/{id}/topics/{topic_id}/posts",
	params(
		("id" = u64, Path, description = "Board ID"),
		("topic_id" = u64, Path, description = "Topic ID")
	),
	request_body = PostRequest,
	responses(
		(status = 201, description = "Reply created", body = ReplyResponse),
		(status = 400, description = "Validation error", body = ErrorResponse),
		(status = 401, description = "Not logged in", body = ErrorResponse),
		(status = 404, description = "Not found", body = ErrorResponse)
	),
	tag = "posts"
))]
pub async fn post_reply(
	State(state): State<AppState>,
	Extension(session): Extension<SessionId>,
	Path((board_id, topic_id)): Path<(u64, u64)>,
	Json(request): Json<PostRequest>,
) -> Result<(StatusCode, Json<ReplyResponse>), ApiError> {
	let user = require_user(&state, &session).await?;

	let (reply, post_count) = state
		.post_service
		.reply(board_id, topic_id, user.id, &request)
		.await
		.map_err(map_post_error)?;

	debug!("User {} replied to topic {}", user.username, topic_id);
	Ok((
		StatusCode::CREATED,
		Json(ReplyResponse {
			post: PostResponse::from_post(&reply.post, reply.author),
			// Where the new post landed in the listing
			last_page: total_pages(post_count, state.page_size),
			timestamp: chrono::Utc::now().timestamp(),
		}),
	))
}

/// PUT /api/v1/boards/{id}/topics/{topic_id}/posts/{post_id} - Edit own post
///
/// Editing someone else's post answers 404, not 403.
#[cfg_attr(feature = "openapi", utoipa::path(
	put,
	path = "/api/v1/boards/{id}/topics/{topic_id}/posts/{post_id}",
	params(
		("id" = u64, Path, description = "Board ID"),
		("topic_id" = u64, Path, description = "Topic ID"),
		("post_id" = u64, Path, description = "Post ID")
	),
	request_body = PostRequest,
	responses(
		(status = 200, description = "Post updated", body = PostResponse),
		(status = 400, description = "Validation error", body = ErrorResponse),
		(status = 401, description = "Not logged in", body = ErrorResponse),
		(status = 404, description = "Not found", body = ErrorResponse)
	),
	tag = "posts"
))]
pub async fn put_post(
	State(state): State<AppState>,
	Extension(session): Extension<SessionId>,
	Path((board_id, topic_id, post_id)): Path<(u64, u64, u64)>,
	Json(request): Json<PostRequest>,
) -> Result<Json<PostResponse>, ApiError> {
	let user = require_user(&state, &session).await?;

	let edited = state
		.post_service
		.edit_post(board_id, topic_id, post_id, user.id, &request)
		.await
		.map_err(map_post_error)?;

	Ok(Json(PostResponse::from_post(&edited.post, edited.author)))
}
