//! Database layer - connection pool and repositories
//!
//! # Design Principles
//!
//! - One explicitly constructed pool, borrowed by each repository per call
//! - One parameterized statement per operation, no multi-statement transactions
//! - "Not found" comes from the affected-row count or an empty result set,
//!   never from a separate existence query
//! - Rely on DB constraints for uniqueness and references, no check-then-insert

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::{create_pool, create_pool_with_options, DEFAULT_MAX_CONNECTIONS};
pub use repos::*;
pub use schema::bootstrap;
