//! Database layer - connection pool, schema, seed rows and repositories
//!
//! # Design Principles
//!
//! - One statement per operation; the pool guard returns the connection
//!   on every exit path
//! - Singletons are fixed-key rows (`id = 1`) written with UPDATE only
//! - Timestamps come from `CURRENT_TIMESTAMP`, never from callers

pub mod migrations;
pub mod pool;
pub mod repos;
pub mod seed;

pub use pool::{create_memory_pool, create_pool, create_pool_with_options, ensure_sqlite_dir};
pub use repos::*;
pub use sqlx::SqlitePool;
