//! Account and session handlers

use axum::{
	extract::{Extension, State},
	http::StatusCode,
	response::Json,
};
use tracing::debug;

use forum_service::AccountServiceError;
use forum_types::{AccountResponse, LoginRequest, SettingsRequest, SignupRequest};

use crate::handlers::common::{error_response, internal_error, require_user, ApiError};
#[cfg(feature = "openapi")]
use crate::handlers::common::ErrorResponse;
use crate::session::SessionId;
use crate::state::AppState;

fn map_account_error(e: AccountServiceError) -> ApiError {
	match e {
		AccountServiceError::UsernameTaken(name) => error_response(
			StatusCode::BAD_REQUEST,
			"USERNAME_TAKEN",
			format!("Username {} is already taken", name),
		),
		AccountServiceError::InvalidCredentials => error_response(
			StatusCode::UNAUTHORIZED,
			"INVALID_CREDENTIALS",
			"Invalid username or password",
		),
		AccountServiceError::NotFound(id) => error_response(
			StatusCode::NOT_FOUND,
			"USER_NOT_FOUND",
			format!("User {} not found", id),
		),
		AccountServiceError::Validation(e) => {
			error_response(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", e.to_string())
		},
		AccountServiceError::Storage(msg) => internal_error(msg),
	}
}

/// POST /api/v1/accounts - Sign up and log the session in
#[cfg_attr(feature = "openapi", utoipa::path(
	post,
	path = "/api/v1/accounts",
	request_body = SignupRequest,
	responses(
		(status = 201, description = "Account created", body = AccountResponse),
		(status = 400, description = "Validation error or taken username", body = ErrorResponse)
	),
	tag = "accounts"
))]
pub async fn post_accounts(
	State(state): State<AppState>,
	Extension(session): Extension<SessionId>,
	Json(request): Json<SignupRequest>,
) -> Result<(StatusCode, Json<AccountResponse>), ApiError> {
	let user = state
		.account_service
		.signup(&session.0, &request)
		.await
		.map_err(map_account_error)?;

	Ok((StatusCode::CREATED, Json(AccountResponse::from(&user))))
}

/// GET /api/v1/accounts/me - The logged-in account
#[cfg_attr(feature = "openapi", utoipa::path(
	get,
	path = "/api/v1/accounts/me",
	responses(
		(status = 200, description = "Current account", body = AccountResponse),
		(status = 401, description = "Not logged in", body = ErrorResponse)
	),
	tag = "accounts"
))]
pub async fn get_me(
	State(state): State<AppState>,
	Extension(session): Extension<SessionId>,
) -> Result<Json<AccountResponse>, ApiError> {
	let user = require_user(&state, &session).await?;
	Ok(Json(AccountResponse::from(&user)))
}

/// PUT /api/v1/accounts/me - Update profile settings
#[cfg_attr(feature = "openapi", utoipa::path(
	put,
	path = "/api/v1/accounts/me",
	request_body = SettingsRequest,
	responses(
		(status = 200, description = "Account updated", body = AccountResponse),
		(status = 400, description = "Validation error", body = ErrorResponse),
		(status = 401, description = "Not logged in", body = ErrorResponse)
	),
	tag = "accounts"
))]
pub async fn put_me(
	State(state): State<AppState>,
	Extension(session): Extension<SessionId>,
	Json(request): Json<SettingsRequest>,
) -> Result<Json<AccountResponse>, ApiError> {
	let user = require_user(&state, &session).await?;

	let updated = state
		.account_service
		.update_settings(user.id, &request)
		.await
		.map_err(map_account_error)?;

	debug!("User {} updated settings", updated.username);
	Ok(Json(AccountResponse::from(&updated)))
}

/// POST /api/v1/sessions - Log in
#[cfg_attr(feature = "openapi", utoipa::path(
	post,
	path = "/api/v1/sessions",
	request_body = LoginRequest,
	responses(
		(status = 200, description = "Logged in", body = AccountResponse),
		(status = 401, description = "Invalid credentials", body = ErrorResponse)
	),
	tag = "accounts"
))]
pub async fn post_sessions(
	State(state): State<AppState>,
	Extension(session): Extension<SessionId>,
	Json(request): Json<LoginRequest>,
) -> Result<Json<AccountResponse>, ApiError> {
	let user = state
		.account_service
		.login(&session.0, &request)
		.await
		.map_err(map_account_error)?;

	Ok(Json(AccountResponse::from(&user)))
}

/// DELETE /api/v1/sessions - Log out, dropping all session state
#[cfg_attr(feature = "openapi", utoipa::path(
	delete,
	path = "/api/v1/sessions",
	responses((status = 204, description = "Logged out")),
	tag = "accounts"
))]
pub async fn delete_sessions(
	State(state): State<AppState>,
	Extension(session): Extension<SessionId>,
) -> Result<StatusCode, ApiError> {
	state
		.account_service
		.logout(&session.0)
		.await
		.map_err(map_account_error)?;

	Ok(StatusCode::NO_CONTENT)
}
