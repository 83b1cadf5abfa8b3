//! Configuration settings structures

use forum_types::constants::limits::{DEFAULT_PAGE_SIZE, DEFAULT_RATE_LIMIT_REQUESTS_PER_MINUTE};
use serde::{Deserialize, Serialize};

/// Main application settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
	pub server: ServerSettings,
	pub forum: ForumSettings,
	/// Boards seeded into storage at startup
	pub boards: Vec<BoardConfig>,
	pub environment: EnvironmentSettings,
	pub logging: LoggingSettings,
}

/// Server configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerSettings {
	pub host: String,
	pub port: u16,
}

/// Forum behavior configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ForumSettings {
	/// Items per page in topic and post listings
	pub page_size: usize,
	/// Name of the browser session cookie
	pub session_cookie: String,
}

/// A board seeded from configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BoardConfig {
	pub name: String,
	pub description: String,
}

/// Environment-specific settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct EnvironmentSettings {
	pub profile: EnvironmentProfile,
	pub debug: bool,
	pub rate_limiting: RateLimitSettings,
}

/// Environment profiles
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum EnvironmentProfile {
	Development,
	Staging,
	Production,
}

/// Rate limiting configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RateLimitSettings {
	pub enabled: bool,
	pub requests_per_minute: u32,
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoggingSettings {
	pub level: String,
	pub format: LogFormat,
	pub structured: bool,
}

/// Log format options
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	Json,
	Pretty,
	Compact,
}

impl Settings {
	/// Bind address in `host:port` form
	pub fn bind_address(&self) -> String {
		format!("{}:{}", self.server.host, self.server.port)
	}
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			server: ServerSettings {
				host: "127.0.0.1".to_string(),
				port: 8080,
			},
			forum: ForumSettings::default(),
			boards: Vec::new(),
			environment: EnvironmentSettings {
				profile: EnvironmentProfile::Development,
				debug: false,
				rate_limiting: RateLimitSettings {
					enabled: false,
					requests_per_minute: DEFAULT_RATE_LIMIT_REQUESTS_PER_MINUTE,
				},
			},
			logging: LoggingSettings {
				level: "info".to_string(),
				format: LogFormat::Compact,
				structured: false,
			},
		}
	}
}

impl Default for ForumSettings {
	fn default() -> Self {
		Self {
			page_size: DEFAULT_PAGE_SIZE,
			session_cookie: "forum_session".to_string(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_settings() {
		let settings = Settings::default();

		assert_eq!(settings.bind_address(), "127.0.0.1:8080");
		assert_eq!(settings.forum.page_size, 20);
		assert_eq!(settings.forum.session_cookie, "forum_session");
		assert!(settings.boards.is_empty());
		assert!(!settings.environment.rate_limiting.enabled);
	}

	#[test]
	fn test_settings_roundtrip() {
		let settings = Settings::default();
		let serialized = serde_json::to_string(&settings).unwrap();
		let deserialized: Settings = serde_json::from_str(&serialized).unwrap();

		assert_eq!(deserialized.forum.page_size, settings.forum.page_size);
		assert_eq!(deserialized.server.port, settings.server.port);
	}
}
