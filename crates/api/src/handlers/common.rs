use axum::{http::StatusCode, response::Json};
use serde::Serialize;
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use forum_types::User;

use crate::session::SessionId;
use crate::state::AppState;

/// Error response format shared by handlers
#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ErrorResponse {
	pub error: String,
	pub message: String,
	pub timestamp: i64,
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);

pub fn error_response(status: StatusCode, error: &str, message: impl Into<String>) -> ApiError {
	(
		status,
		Json(ErrorResponse {
			error: error.to_string(),
			message: message.into(),
			timestamp: chrono::Utc::now().timestamp(),
		}),
	)
}

pub fn internal_error(message: impl Into<String>) -> ApiError {
	error_response(
		StatusCode::INTERNAL_SERVER_ERROR,
		"STORAGE_ERROR",
		message,
	)
}

/// Resolve the session's logged-in user, or fail with 401
pub async fn require_user(state: &AppState, session: &SessionId) -> Result<User, ApiError> {
	match state.account_service.current_user(&session.0).await {
		Ok(Some(user)) => Ok(user),
		Ok(None) => Err(error_response(
			StatusCode::UNAUTHORIZED,
			"UNAUTHORIZED",
			"Authentication required",
		)),
		Err(e) => Err(internal_error(e.to_string())),
	}
}
