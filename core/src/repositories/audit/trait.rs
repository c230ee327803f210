//! Audit log repository trait defining the interface for audit log persistence.

use async_trait::async_trait;

use crate::domain::entities::{AuditLog, OperationType};
use crate::errors::DomainError;

/// Repository trait for AuditLog entity persistence operations
///
/// Entries are append-only. Every finder returns entries newest first by
/// operation time, ties broken by the higher id.
#[async_trait]
pub trait AuditLogRepository: Send + Sync {
    /// Append an entry
    ///
    /// # Returns
    /// * The stored entry carrying its assigned id
    async fn save(&self, audit_log: &AuditLog) -> Result<AuditLog, DomainError>;

    async fn find_all(&self) -> Result<Vec<AuditLog>, DomainError>;

    /// Entries recorded for one contact, including deleted contacts
    async fn find_by_contact_id(&self, contact_id: i64) -> Result<Vec<AuditLog>, DomainError>;

    async fn find_by_operation_type(
        &self,
        operation_type: OperationType,
    ) -> Result<Vec<AuditLog>, DomainError>;

    async fn count(&self) -> Result<u64, DomainError>;

    /// Remove every entry. Used to reset state between test scenarios.
    async fn delete_all(&self) -> Result<(), DomainError>;
}
