//! Board handlers

use axum::{
	extract::{Path, State},
	http::StatusCode,
	response::Json,
};
use tracing::debug;

use forum_service::BoardServiceError;
use forum_types::{BoardResponse, BoardsResponse};

use crate::handlers::common::{error_response, internal_error, ApiError};
#[cfg(feature = "openapi")]
use crate::handlers::common::ErrorResponse;
use crate::state::AppState;

fn map_board_error(e: BoardServiceError) -> ApiError {
	match e {
		BoardServiceError::NotFound(id) => error_response(
			StatusCode::NOT_FOUND,
			"BOARD_NOT_FOUND",
			format!("Board {} not found", id),
		),
		BoardServiceError::Storage(msg) => internal_error(msg),
	}
}

/// GET /api/v1/boards - List all boards with their counts
#[cfg_attr(feature = "openapi", utoipa::path(
	get,
	path = "/api/v1/boards",
	responses((status = 200, description = "List of boards", body = BoardsResponse)),
	tag = "boards"
))]
pub async fn get_boards(State(state): State<AppState>) -> Result<Json<BoardsResponse>, ApiError> {
	debug!("Listing boards");
	let overviews = state
		.board_service
		.list_boards()
		.await
		.map_err(map_board_error)?;

	let boards: Vec<_> = overviews
		.iter()
		.map(|o| BoardResponse::from_board(&o.board, o.topic_count, o.post_count))
		.collect();

	Ok(Json(BoardsResponse {
		total_boards: boards.len(),
		boards,
		timestamp: chrono::Utc::now().timestamp(),
	}))
}

/// GET /api/v1/boards/{id} - Get a board by id
#[cfg_attr(feature = "openapi", utoipa::path(
	get,
	path = "/api/v1/boards/{id}",
	params(("id" = u64, Path, description = "Board ID")),
	responses(
		(status = 200, description = "Board details", body = BoardResponse),
		(status = 404, description = "Not found", body = ErrorResponse)
	),
	tag = "boards"
))]
pub async fn get_board_by_id(
	State(state): State<AppState>,
	Path(board_id): Path<u64>,
) -> Result<Json<BoardResponse>, ApiError> {
	let overview = state
		.board_service
		.get_board(board_id)
		.await
		.map_err(map_board_error)?;

	Ok(Json(BoardResponse::from_board(
		&overview.board,
		overview.topic_count,
		overview.post_count,
	)))
}
