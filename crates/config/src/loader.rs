//! Configuration loading utilities

use crate::Settings;
use config::{Config, ConfigError, Environment, File};

/// Load configuration from the forum config file and environment.
///
/// Reads `config/forum.{toml,json,yaml}` when present, then applies
/// `FORUM_`-prefixed environment overrides (e.g. `FORUM_SERVER__PORT=8081`).
pub fn load_config() -> Result<Settings, ConfigError> {
	let s = Config::builder()
		.add_source(File::with_name("config/forum").required(false))
		.add_source(Environment::with_prefix("FORUM").separator("__"))
		.build()?;

	s.try_deserialize()
}
