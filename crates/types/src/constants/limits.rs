//! Global limits and defaults for configuration and runtime

/// Maximum length of a topic subject
pub const MAX_SUBJECT_LEN: usize = 255;

/// Maximum length of a post message
pub const MAX_MESSAGE_LEN: usize = 4_000;

/// Maximum length of a username
pub const MAX_USERNAME_LEN: usize = 150;

/// Minimum length of an account password
pub const MIN_PASSWORD_LEN: usize = 8;

/// Default number of items per listing page
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Default rate limit: requests per minute
pub const DEFAULT_RATE_LIMIT_REQUESTS_PER_MINUTE: u32 = 1000;
