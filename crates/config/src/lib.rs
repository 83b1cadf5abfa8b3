//! Forum Configuration
//!
//! Configuration management and startup utilities for the forum server.

pub mod loader;
pub mod settings;
pub mod startup_logger;

pub use loader::load_config;
pub use settings::{
	BoardConfig, EnvironmentProfile, EnvironmentSettings, ForumSettings, LogFormat,
	LoggingSettings, RateLimitSettings, ServerSettings, Settings,
};
pub use startup_logger::{log_service_info, log_service_shutdown, log_startup_complete};
