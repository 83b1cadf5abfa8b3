//! Board service
//!
//! Service for listing boards with their derived topic and post counts.

use std::sync::Arc;

use forum_storage::Storage;
use forum_types::Board;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BoardServiceError {
	#[error("storage error: {0}")]
	Storage(String),
	#[error("board not found: {0}")]
	NotFound(u64),
}

/// A board together with its derived counts
#[derive(Debug, Clone)]
pub struct BoardOverview {
	pub board: Board,
	pub topic_count: usize,
	pub post_count: usize,
}

#[derive(Clone)]
pub struct BoardService {
	storage: Arc<dyn Storage>,
}

impl BoardService {
	pub fn new(storage: Arc<dyn Storage>) -> Self {
		Self { storage }
	}

	/// List all boards with topic and post counts, ordered by id
	pub async fn list_boards(&self) -> Result<Vec<BoardOverview>, BoardServiceError> {
		let boards = self
			.storage
			.list_boards()
			.await
			.map_err(|e| BoardServiceError::Storage(e.to_string()))?;

		let mut overviews = Vec::with_capacity(boards.len());
		for board in boards {
			overviews.push(self.overview(board).await?);
		}
		Ok(overviews)
	}

	/// Get a single board with its counts
	pub async fn get_board(&self, board_id: u64) -> Result<BoardOverview, BoardServiceError> {
		let board = self
			.storage
			.get_board(board_id)
			.await
			.map_err(|e| BoardServiceError::Storage(e.to_string()))?
			.ok_or(BoardServiceError::NotFound(board_id))?;

		self.overview(board).await
	}

	async fn overview(&self, board: Board) -> Result<BoardOverview, BoardServiceError> {
		let topics = self
			.storage
			.list_topics_by_board(board.id)
			.await
			.map_err(|e| BoardServiceError::Storage(e.to_string()))?;

		let mut post_count = 0;
		for topic in &topics {
			post_count += self
				.storage
				.count_posts_by_topic(topic.id)
				.await
				.map_err(|e| BoardServiceError::Storage(e.to_string()))?;
		}

		Ok(BoardOverview {
			topic_count: topics.len(),
			post_count,
			board,
		})
	}
}
