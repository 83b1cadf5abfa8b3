//! Browser session middleware
//!
//! Every request gets a session id: either the one carried by the session
//! cookie, or a fresh UUID which is handed back via `Set-Cookie`. Handlers
//! read the id from request extensions.

use axum::{
	extract::{Request, State},
	http::{header, HeaderValue},
	middleware::Next,
	response::Response,
};
use uuid::Uuid;

use crate::state::AppState;

/// The request's session id, inserted by [`attach_session`]
#[derive(Debug, Clone)]
pub struct SessionId(pub String);

/// Middleware that resolves or issues the session cookie
pub async fn attach_session(
	State(state): State<AppState>,
	mut request: Request,
	next: Next,
) -> Response {
	let existing = request
		.headers()
		.get(header::COOKIE)
		.and_then(|value| value.to_str().ok())
		.and_then(|raw| cookie_value(raw, &state.session_cookie));

	let (session_id, issued) = match existing {
		Some(id) => (id, false),
		None => (Uuid::new_v4().to_string(), true),
	};

	request
		.extensions_mut()
		.insert(SessionId(session_id.clone()));

	let mut response = next.run(request).await;

	if issued {
		let cookie = format!(
			"{}={}; Path=/; HttpOnly; SameSite=Lax",
			state.session_cookie, session_id
		);
		if let Ok(value) = HeaderValue::from_str(&cookie) {
			response.headers_mut().append(header::SET_COOKIE, value);
		}
	}

	response
}

/// Pull a single cookie's value out of a raw `Cookie` header
fn cookie_value(raw: &str, name: &str) -> Option<String> {
	raw.split(';')
		.filter_map(|pair| pair.trim().split_once('='))
		.find(|(key, _)| *key == name)
		.map(|(_, value)| value.to_string())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_cookie_value_finds_named_cookie() {
		let raw = "theme=dark; forum_session=abc-123; lang=en";
		assert_eq!(
			cookie_value(raw, "forum_session"),
			Some("abc-123".to_string())
		);
	}

	#[test]
	fn test_cookie_value_ignores_other_cookies() {
		assert_eq!(cookie_value("theme=dark", "forum_session"), None);
		assert_eq!(cookie_value("", "forum_session"), None);
	}

	#[test]
	fn test_cookie_value_does_not_match_prefixes() {
		let raw = "forum_session_old=zzz";
		assert_eq!(cookie_value(raw, "forum_session"), None);
	}
}
