//! In-memory implementation of AuditLogRepository.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use tokio::sync::RwLock;

use crate::domain::entities::audit::newest_first;
use crate::domain::entities::{AuditLog, OperationType};
use crate::errors::DomainError;

use super::AuditLogRepository;

/// Audit log store kept in process memory
pub struct InMemoryAuditLogRepository {
    logs: RwLock<Vec<AuditLog>>,
    next_id: AtomicI64,
    should_fail: AtomicBool,
}

impl InMemoryAuditLogRepository {
    pub fn new() -> Self {
        Self {
            logs: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
            should_fail: AtomicBool::new(false),
        }
    }

    /// Set whether operations should fail
    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    /// All stored entries in insertion order
    pub async fn get_all_logs(&self) -> Vec<AuditLog> {
        self.logs.read().await.clone()
    }

    fn check_failure(&self) -> Result<(), DomainError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::internal("Audit log store unavailable"));
        }
        Ok(())
    }

    async fn find_matching<F>(&self, predicate: F) -> Result<Vec<AuditLog>, DomainError>
    where
        F: Fn(&AuditLog) -> bool + Send,
    {
        self.check_failure()?;
        let mut result: Vec<AuditLog> = self
            .logs
            .read()
            .await
            .iter()
            .filter(|log| predicate(log))
            .cloned()
            .collect();
        result.sort_by(newest_first);
        Ok(result)
    }
}

impl Default for InMemoryAuditLogRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuditLogRepository for InMemoryAuditLogRepository {
    async fn save(&self, audit_log: &AuditLog) -> Result<AuditLog, DomainError> {
        self.check_failure()?;
        let stored = audit_log.with_id(self.next_id.fetch_add(1, Ordering::SeqCst));
        self.logs.write().await.push(stored.clone());
        Ok(stored)
    }

    async fn find_all(&self) -> Result<Vec<AuditLog>, DomainError> {
        self.find_matching(|_| true).await
    }

    async fn find_by_contact_id(&self, contact_id: i64) -> Result<Vec<AuditLog>, DomainError> {
        self.find_matching(|log| log.contact_id() == contact_id).await
    }

    async fn find_by_operation_type(
        &self,
        operation_type: OperationType,
    ) -> Result<Vec<AuditLog>, DomainError> {
        self.find_matching(|log| log.operation_type() == operation_type)
            .await
    }

    async fn count(&self) -> Result<u64, DomainError> {
        self.check_failure()?;
        Ok(self.logs.read().await.len() as u64)
    }

    async fn delete_all(&self) -> Result<(), DomainError> {
        self.check_failure()?;
        self.logs.write().await.clear();
        Ok(())
    }
}
