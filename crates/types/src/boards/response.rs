//! Board response models for API layer

use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use super::Board;

/// Response format for individual boards in API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BoardResponse {
	pub id: u64,
	pub name: String,
	pub description: String,
	pub topic_count: usize,
	pub post_count: usize,
	pub created_at: i64,
}

impl BoardResponse {
	/// Build from a domain board plus its derived counts
	pub fn from_board(board: &Board, topic_count: usize, post_count: usize) -> Self {
		Self {
			id: board.id,
			name: board.name.clone(),
			description: board.description.clone(),
			topic_count,
			post_count,
			created_at: board.created_at.timestamp(),
		}
	}
}

/// Collection of boards response for API endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BoardsResponse {
	pub boards: Vec<BoardResponse>,
	pub total_boards: usize,
	pub timestamp: i64,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_board_response_from_domain() {
		let board = Board::new("Rust", "All things Rust.");
		let response = BoardResponse::from_board(&board, 3, 17);

		assert_eq!(response.name, "Rust");
		assert_eq!(response.topic_count, 3);
		assert_eq!(response.post_count, 17);
		assert_eq!(response.created_at, board.created_at.timestamp());
	}
}
