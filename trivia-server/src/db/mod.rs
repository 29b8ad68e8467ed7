//! Database layer - connection pool, schema and store accessors
//!
//! # Design Principles
//!
//! - Connection pool, one pooled connection per call, returned on every path
//! - Store accessors are traits so handlers run against Postgres or memory
//! - Rely on DB constraints for writes - no check-then-insert
//! - Explicit ordering by id on every list

pub mod memory;
pub mod pool;
pub mod repos;
pub mod schema;
pub mod seed;

pub use memory::MemoryStore;
pub use pool::create_pool;
pub use repos::{CategoryStore, DbError, PgStore, QuestionStore};
