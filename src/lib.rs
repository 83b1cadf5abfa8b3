//! Forum Server Library
//!
//! A web discussion forum API: boards hold topics, topics hold posts, and
//! accounts tie posts to people. Listings are paginated and topic views are
//! counted once per browser session.

// Core domain types - the most commonly used types
pub use forum_types::{
	chrono,
	// External dependencies for convenience
	serde_json,
	// Primary domain entities
	Board,
	Post,
	Topic,
	User,
	// Requests and responses
	AccountResponse,
	BoardResponse,
	BoardsResponse,
	LoginRequest,
	NewTopicRequest,
	PostRequest,
	PostResponse,
	ReplyResponse,
	SettingsRequest,
	SignupRequest,
	TopicPostsResponse,
	TopicResponse,
	TopicsPageResponse,
	// Error types
	PostValidationError,
	TopicValidationError,
	UserValidationError,
};

// Service layer
pub use forum_service::{
	AccountService, AccountServiceError, BoardService, BoardServiceError, PostService,
	PostServiceError, TopicService, TopicServiceError,
};

// Storage layer
pub use forum_storage::{
	traits::{
		BoardStorage, PostStorage, SessionStore, StorageError, StorageResult, TopicStorage,
		UserStorage,
	},
	MemorySessionStore, MemoryStore, Storage,
};

// Storage traits module for advanced usage
pub mod traits {
	pub use forum_storage::traits::*;
}

// API layer
pub use forum_api::{attach_session, create_router, AppState, SessionId};

// Config
pub use forum_config::{load_config, log_service_info, log_startup_complete, Settings};

// Module aliases for embedding the forum in a larger application
pub mod models {
	pub use forum_types::*;
}

pub mod storage {
	pub use forum_storage::*;
}

pub mod config {
	pub use forum_config::*;
}

pub mod api {
	pub use forum_api::*;
	pub mod routes {
		pub use forum_api::{create_router, AppState};
	}
}

pub mod service {
	pub use forum_service::*;
}

use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

/// Builder pattern for configuring the forum server
pub struct ForumBuilder<S = MemoryStore, K = MemorySessionStore>
where
	S: Storage + 'static,
	K: SessionStore + 'static,
{
	settings: Option<Settings>,
	storage: S,
	sessions: K,
	boards: Vec<Board>,
}

impl<S> ForumBuilder<S, MemorySessionStore>
where
	S: Storage + Clone + 'static,
{
	/// Create a new forum builder with the provided storage
	pub fn with_storage(storage: S) -> Self {
		Self {
			settings: None,
			storage,
			sessions: MemorySessionStore::new(),
			boards: Vec::new(),
		}
	}
}

// Default constructor using MemoryStore for convenience
impl Default for ForumBuilder<MemoryStore, MemorySessionStore> {
	fn default() -> Self {
		Self::new()
	}
}

impl ForumBuilder<MemoryStore, MemorySessionStore> {
	/// Create a new forum builder with default memory storage
	pub fn new() -> Self {
		Self::with_storage(MemoryStore::new())
	}
}

impl<S, K> ForumBuilder<S, K>
where
	S: Storage + Clone + 'static,
	K: SessionStore + Clone + 'static,
{
	/// Set custom session store
	pub fn with_session_store<NewK>(self, sessions: NewK) -> ForumBuilder<S, NewK>
	where
		NewK: SessionStore + Clone + 'static,
	{
		ForumBuilder {
			settings: self.settings,
			storage: self.storage,
			sessions,
			boards: self.boards,
		}
	}

	/// Add a board to seed into storage at startup
	pub fn with_board(mut self, board: Board) -> Self {
		self.boards.push(board);
		self
	}

	/// Set custom settings
	pub fn with_settings(mut self, settings: Settings) -> Self {
		self.settings = Some(settings);
		self
	}

	/// Get the current settings
	pub fn settings(&self) -> Option<&Settings> {
		self.settings.as_ref()
	}

	/// Seed boards defined in Settings into storage so the listing endpoints
	/// have content on first start.
	async fn seed_boards_from_settings(&self, settings: &Settings) -> Result<(), String> {
		let mut errors = Vec::new();

		for board_config in &settings.boards {
			let board = Board::new(
				board_config.name.as_str(),
				board_config.description.as_str(),
			);
			if let Err(storage_error) = self.storage.create_board(board).await {
				errors.push(format!(
					"Failed to create board '{}': {}",
					board_config.name, storage_error
				));
			}
		}

		if !errors.is_empty() {
			return Err(format!(
				"Configuration errors found:\n{}",
				errors.join("\n")
			));
		}

		Ok(())
	}

	/// Seed boards collected via with_board() into storage
	async fn seed_collected_boards(&self) -> Result<(), String> {
		let mut errors = Vec::new();

		for board in &self.boards {
			if let Err(storage_error) = self.storage.create_board(board.clone()).await {
				errors.push(format!(
					"Failed to create board '{}': {}",
					board.name, storage_error
				));
			}
		}

		if !errors.is_empty() {
			return Err(format!("Board creation errors:\n{}", errors.join("\n")));
		}

		Ok(())
	}

	/// Initialize tracing with configuration-based settings
	fn init_tracing_from_settings(
		&self,
		settings: &Settings,
	) -> Result<(), Box<dyn std::error::Error>> {
		use forum_config::settings::LogFormat;

		// Create env filter using config level or environment variable
		let log_level = &settings.logging.level;
		let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
			.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

		// Initialize tracing with the configuration
		match settings.logging.format {
			LogFormat::Json => {
				let subscriber = tracing_subscriber::fmt().json().with_env_filter(env_filter);

				if settings.logging.structured {
					subscriber.with_target(true).with_thread_ids(true).init();
				} else {
					subscriber.init();
				}
			},
			LogFormat::Pretty => {
				let subscriber = tracing_subscriber::fmt()
					.pretty()
					.with_env_filter(env_filter);

				if settings.logging.structured {
					subscriber.with_target(true).with_thread_ids(true).init();
				} else {
					subscriber.init();
				}
			},
			LogFormat::Compact => {
				let subscriber = tracing_subscriber::fmt()
					.compact()
					.with_env_filter(env_filter);

				if settings.logging.structured {
					subscriber.with_target(true).with_thread_ids(true).init();
				} else {
					subscriber.init();
				}
			},
		}

		info!(
			"Logging configuration applied: level={}, format={:?}, structured={}",
			settings.logging.level, settings.logging.format, settings.logging.structured
		);

		Ok(())
	}

	/// Start the forum and return the configured router with state
	pub async fn start(self) -> Result<(axum::Router, AppState), Box<dyn std::error::Error>> {
		let settings = self.settings.clone().unwrap_or_default();

		// Seed boards from settings and with_board() calls - fail on any errors
		self.seed_boards_from_settings(&settings).await?;
		self.seed_collected_boards().await?;

		let board_count = self
			.storage
			.board_count()
			.await
			.map_err(|e| format!("Failed to count boards: {}", e))?;
		info!("Successfully initialized with {} board(s)", board_count);

		// Create application state
		let storage_arc: Arc<dyn Storage> = Arc::new(self.storage.clone());
		let sessions_arc: Arc<dyn SessionStore> = Arc::new(self.sessions.clone());
		let app_state = AppState {
			board_service: Arc::new(BoardService::new(Arc::clone(&storage_arc))),
			topic_service: Arc::new(TopicService::new(
				Arc::clone(&storage_arc),
				Arc::clone(&sessions_arc),
			)),
			post_service: Arc::new(PostService::new(Arc::clone(&storage_arc))),
			account_service: Arc::new(AccountService::new(
				Arc::clone(&storage_arc),
				Arc::clone(&sessions_arc),
			)),
			storage: storage_arc,
			page_size: settings.forum.page_size,
			session_cookie: settings.forum.session_cookie.clone(),
		};

		// Create router with the session middleware and state
		let router = create_router()
			.layer(axum::middleware::from_fn_with_state(
				app_state.clone(),
				attach_session,
			))
			.with_state(app_state.clone());

		Ok((router, app_state))
	}

	/// Start the complete server with all defaults and setup
	/// This method handles everything needed to run the server, including:
	/// - Loading .env file
	/// - Loading configuration with defaults
	/// - Initializing tracing
	/// - Seeding configured boards
	/// - Binding and serving the application
	pub async fn start_server(mut self) -> Result<(), Box<dyn std::error::Error>> {
		// Load .env file if it exists
		dotenvy::dotenv().ok();

		// Use provided settings or load from config with defaults
		let using_provided_settings = self.settings.is_some();
		let settings = if using_provided_settings {
			self.settings.take().ok_or("settings disappeared")?
		} else {
			load_config().unwrap_or_default()
		};

		// Initialize tracing with configuration-based settings
		self.init_tracing_from_settings(&settings)?;

		// Log comprehensive service startup information
		log_service_info();

		info!(
			"Using configuration: loaded from {}",
			if using_provided_settings {
				"provided settings"
			} else {
				"config file or defaults"
			}
		);
		info!("Configuration loaded successfully");

		info!("🔧 Configuring forum server");
		// Log configured boards
		info!(
			"Configured boards: {}",
			settings.boards.len() + self.boards.len()
		);
		for board in &settings.boards {
			info!("  - {}: {}", board.name, board.description);
		}

		// Parse bind address
		let bind_addr = settings.bind_address();
		let addr: SocketAddr = bind_addr
			.parse()
			.map_err(|e| format!("Invalid bind address '{}': {}", bind_addr, e))?;

		// Ensure we have proper configuration in the builder
		if self.settings.is_none() {
			self.settings = Some(settings.clone());
		}

		// Create the router using the builder pattern
		let (app, _) = self.start().await?;

		// Start the server
		let listener = tokio::net::TcpListener::bind(addr).await?;

		// Log startup completion with comprehensive information
		log_startup_complete(&bind_addr);
		info!("API endpoints available:");
		info!("  GET    /health");
		info!("  GET    /ready");
		info!("  GET    /api/v1/boards");
		info!("  GET    /api/v1/boards/{{id}}");
		info!("  GET    /api/v1/boards/{{id}}/topics");
		info!("  POST   /api/v1/boards/{{id}}/topics");
		info!("  GET    /api/v1/boards/{{id}}/topics/{{topic_id}}");
		info!("  POST   /api/v1/boards/{{id}}/topics/{{topic_id}}/posts");
		info!("  PUT    /api/v1/boards/{{id}}/topics/{{topic_id}}/posts/{{post_id}}");
		info!("  POST   /api/v1/accounts");
		info!("  GET    /api/v1/accounts/me");
		info!("  PUT    /api/v1/accounts/me");
		info!("  POST   /api/v1/sessions");
		info!("  DELETE /api/v1/sessions");
		if cfg!(feature = "openapi") {
			info!("  GET    /swagger-ui");
			info!("  GET    /api-docs/openapi.json");
		}

		// Apply global rate limiting based on settings at the make_service level
		let rate_cfg = &settings.environment.rate_limiting;
		if rate_cfg.enabled {
			use std::time::Duration;
			use tower::limit::RateLimitLayer;
			use tower::ServiceBuilder;
			let make_svc = ServiceBuilder::new()
				.layer(RateLimitLayer::new(
					rate_cfg.requests_per_minute as u64,
					Duration::from_secs(60),
				))
				.service(app.into_make_service());
			axum::serve(listener, make_svc).await?;
		} else {
			axum::serve(listener, app).await?;
		}

		Ok(())
	}
}
