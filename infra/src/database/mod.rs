//! Database module - PostgreSQL implementations using SQLx
//!
//! This module provides the database access layer:
//! - Connection pool management
//! - Repository implementations
//! - Embedded schema migrations

pub mod connection;
pub mod postgres;


// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use postgres::{PgAuditLogRepository, PgContactRepository};
