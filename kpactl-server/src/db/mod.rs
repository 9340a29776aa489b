//! Database layer - connection pool, schema and repositories
//!
//! # Design Principles
//!
//! - Connection pool shared through app state - no global connection
//! - Foreign keys enforced on every connection, deletes cascade in SQL
//! - Rely on DB constraints, map violations - no check-then-insert
//! - Nested reads are assembled from one query per level - no N+1

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::{create_memory_pool, create_pool, create_pool_with_options, DEFAULT_MAX_CONNECTIONS};
pub use repos::*;
