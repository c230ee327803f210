//! # Infrastructure Layer
//!
//! Concrete storage for the contact book service:
//! - **Database**: PostgreSQL repositories and connection pool using SQLx
//! - **Storage**: selection between PostgreSQL and the in-memory store from
//!   `database.url`
//!
//! The in-memory repositories themselves live in the core crate so that
//! domain tests can use them without pulling in SQLx.

// Re-export core types for convenience
pub use contact_core::errors::*;

/// Database module - PostgreSQL implementations using SQLx
pub mod database;

/// Storage backend selection and health
pub mod storage;

pub use database::{DatabasePool, PgAuditLogRepository, PgContactRepository, PoolStatistics};
pub use storage::StorageBackend;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Load a `.env` file from the working directory if one exists
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "Loaded environment file"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!(error = %e, "Failed to read environment file"),
    }
}
