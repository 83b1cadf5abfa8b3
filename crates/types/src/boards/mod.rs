//! Core Board domain model

use chrono::{DateTime, Utc};

pub mod response;

pub use response::{BoardResponse, BoardsResponse};

/// A named forum category containing topics.
///
/// Boards are created at startup (settings or builder); there is no public
/// endpoint for creating them.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
	/// Storage-assigned identifier (0 until persisted)
	pub id: u64,

	/// Display name, unique per forum
	pub name: String,

	/// Short description shown in board listings
	pub description: String,

	/// When the board was created
	pub created_at: DateTime<Utc>,
}

impl Board {
	/// Create a new board pending storage assignment of its id
	pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
		Self {
			id: 0,
			name: name.into(),
			description: description.into(),
			created_at: Utc::now(),
		}
	}
}
