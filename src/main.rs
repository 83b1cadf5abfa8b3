//! Forum Server
//!
//! Main entry point for the forum server

use forum_server::ForumBuilder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	// Start the complete server with all defaults and setup handled automatically
	ForumBuilder::new().start_server().await
}
