//! PostgreSQL repository implementations

mod audit_repository_impl;
mod contact_repository_impl;

pub use audit_repository_impl::PgAuditLogRepository;
pub use contact_repository_impl::PgContactRepository;

use contact_core::errors::DomainError;

/// Map a SQLx failure into the domain error returned to services
fn query_error(action: &str, e: sqlx::Error) -> DomainError {
    tracing::error!(error = %e, "Failed to {}", action);
    DomainError::Internal {
        message: format!("Failed to {}: {}", action, e),
    }
}

fn column_error(column: &str, e: sqlx::Error) -> DomainError {
    DomainError::Internal {
        message: format!("Failed to get {}: {}", column, e),
    }
}
