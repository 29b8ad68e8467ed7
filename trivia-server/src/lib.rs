//! trivia-server: JSON-over-HTTP trivia catalog
//!
//! Serves categories, paginated questions, search, category filters,
//! question create/delete and randomized quiz rounds over a relational
//! store.

pub mod db;
pub mod http;

pub use db::{CategoryStore, DbError, MemoryStore, PgStore, QuestionStore};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig};
