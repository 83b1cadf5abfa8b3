//! Topic handlers

use axum::{
	extract::{Extension, Path, Query, State},
	http::StatusCode,
	response::Json,
};
use tracing::debug;

use forum_service::TopicServiceError;
use forum_types::{BoardResponse, NewTopicRequest, TopicResponse, TopicsPageResponse};

use crate::handlers::common::{error_response, internal_error, require_user, ApiError};
#[cfg(feature = "openapi")]
use crate::handlers::common::ErrorResponse;
use crate::pagination::{paginate, PageQuery};
use crate::session::SessionId;
use crate::state::AppState;

pub(crate) fn map_topic_error(e: TopicServiceError) -> ApiError {
	match e {
		TopicServiceError::BoardNotFound(id) => error_response(
			StatusCode::NOT_FOUND,
			"BOARD_NOT_FOUND",
			format!("Board {} not found", id),
		),
		TopicServiceError::NotFound(id) => error_response(
			StatusCode::NOT_FOUND,
			"TOPIC_NOT_FOUND",
			format!("Topic {} not found", id),
		),
		TopicServiceError::Validation(e) => {
			error_response(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", e.to_string())
		},
		TopicServiceError::Storage(msg) => internal_error(msg),
	}
}

/// GET /api/v1/boards/{id}/topics - One page of a board's topics
#[cfg_attr(feature = "openapi", utoipa::path(
	get,
	path = "/api/v1/boards/{id}/topics",
	params(
		("id" = u64, Path, description = "Board ID"),
		("page" = Option<String>, Query, description = "Page number; invalid values mean page 1")
	),
	responses(
		(status = 200, description = "Page of topics", body = TopicsPageResponse),
		(status = 404, description = "Not found", body = ErrorResponse)
	),
	tag = "topics"
))]
pub async fn get_board_topics(
	State(state): State<AppState>,
	Path(board_id): Path<u64>,
	Query(query): Query<PageQuery>,
) -> Result<Json<TopicsPageResponse>, ApiError> {
	let board = state.board_service.get_board(board_id).await.map_err(|e| {
		match e {
			forum_service::BoardServiceError::NotFound(id) => error_response(
				StatusCode::NOT_FOUND,
				"BOARD_NOT_FOUND",
				format!("Board {} not found", id),
			),
			forum_service::BoardServiceError::Storage(msg) => internal_error(msg),
		}
	})?;

	let overviews = state
		.topic_service
		.list_board_topics(board_id)
		.await
		.map_err(map_topic_error)?;

	let total_topics = overviews.len();
	let page = paginate(overviews, query.page.as_deref(), state.page_size);

	let topics = page
		.items
		.iter()
		.map(|o| TopicResponse::from_topic(&o.topic, o.starter.clone(), o.replies))
		.collect();

	Ok(Json(TopicsPageResponse {
		board: BoardResponse::from_board(&board.board, board.topic_count, board.post_count),
		topics,
		current_page: page.current_page,
		total_pages: page.total_pages,
		total_topics,
		timestamp: chrono::Utc::now().timestamp(),
	}))
}

/// POST /api/v1/boards/{id}/topics - Start a topic (authenticated)
#[cfg_attr(feature = "openapi", utoipa::path(
	post,
	path = "/api/v1/boards/{id}/topics",
	params(("id" = u64, Path, description = "Board ID")),
	request_body = NewTopicRequest,
	responses(
		(status = 201, description = "Topic created", body = TopicResponse),
		(status = 400, description = "Validation error", body = ErrorResponse),
		(status = 401, description = "Not logged in", body = ErrorResponse),
		(status = 404, description = "Not found", body = ErrorResponse)
	),
	tag = "topics"
))]
pub async fn post_board_topics(
	State(state): State<AppState>,
	Extension(session): Extension<SessionId>,
	Path(board_id): Path<u64>,
	Json(request): Json<NewTopicRequest>,
) -> Result<(StatusCode, Json<TopicResponse>), ApiError> {
	let user = require_user(&state, &session).await?;

	let (topic, _starter_post) = state
		.topic_service
		.create_topic(board_id, user.id, &request)
		.await
		.map_err(map_topic_error)?;

	debug!("User {} started topic {}", user.username, topic.id);
	// A brand-new topic has a starter post and no replies
	Ok((
		StatusCode::CREATED,
		Json(TopicResponse::from_topic(&topic, user.username, 0)),
	))
}
