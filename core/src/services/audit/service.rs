//! Read side of the audit trail.

use std::sync::Arc;

use crate::domain::entities::{AuditLog, OperationType};
use crate::errors::DomainResult;
use crate::repositories::AuditLogRepository;

/// Service for querying audit logs. Every query returns newest first.
pub struct AuditLogService<R>
where
    R: AuditLogRepository,
{
    repository: Arc<R>,
}

impl<R> AuditLogService<R>
where
    R: AuditLogRepository,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn get_all_audit_logs(&self) -> DomainResult<Vec<AuditLog>> {
        tracing::debug!("Fetching all audit logs");
        self.repository.find_all().await
    }

    pub async fn get_audit_logs_by_contact_id(&self, contact_id: i64) -> DomainResult<Vec<AuditLog>> {
        tracing::debug!(contact_id, "Fetching audit logs for contact");
        self.repository.find_by_contact_id(contact_id).await
    }

    pub async fn get_audit_logs_by_operation_type(
        &self,
        operation_type: OperationType,
    ) -> DomainResult<Vec<AuditLog>> {
        tracing::debug!(%operation_type, "Fetching audit logs by operation");
        self.repository.find_by_operation_type(operation_type).await
    }

    /// Total number of entries, reported by the health endpoint
    pub async fn count(&self) -> DomainResult<u64> {
        self.repository.count().await
    }
}
