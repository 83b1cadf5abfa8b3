//! Forum API
//!
//! Axum-based API with routes and middleware for the forum server.

pub mod handlers;
pub mod pagination;
pub mod router;
pub mod security;
pub mod session;
pub mod state;

pub use pagination::{paginate, total_pages, Page, PageQuery};
pub use router::create_router;
pub use session::{attach_session, SessionId};
pub use state::AppState;

#[cfg(feature = "openapi")]
pub mod openapi;
