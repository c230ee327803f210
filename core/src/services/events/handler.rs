//! Audit event handlers.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::task;

use crate::domain::value_objects::AuditContext;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::AuditLogRepository;

/// Receives the audit context of every published event
///
/// Handlers run in ascending [`order`](AuditEventHandler::order). Additional
/// sinks (a message queue, an external audit system) plug in by
/// implementing this trait and registering with the publisher.
#[async_trait]
pub trait AuditEventHandler: Send + Sync {
    /// Name used in logs
    fn name(&self) -> &str;

    async fn handle(&self, context: &AuditContext) -> DomainResult<()>;

    /// Lower values run first
    fn order(&self) -> i32 {
        0
    }

    /// Whether this handler wants events for `entity_type`
    fn supports(&self, _entity_type: &str) -> bool {
        true
    }
}

/// Persists every audit context through an [`AuditLogRepository`]
pub struct DatabaseAuditEventHandler<R>
where
    R: AuditLogRepository,
{
    repository: Arc<R>,
    async_writes: bool,
}

impl<R> DatabaseAuditEventHandler<R>
where
    R: AuditLogRepository + 'static,
{
    pub fn new(repository: Arc<R>, async_writes: bool) -> Self {
        Self {
            repository,
            async_writes,
        }
    }
}

#[async_trait]
impl<R> AuditEventHandler for DatabaseAuditEventHandler<R>
where
    R: AuditLogRepository + 'static,
{
    fn name(&self) -> &str {
        "database"
    }

    /// Writes synchronously unless async writes are enabled, in which case
    /// the write happens in a background task and failures are only logged.
    async fn handle(&self, context: &AuditContext) -> DomainResult<()> {
        let entity_type = context.entity_type.clone();
        let entity_id = context.entity_id;
        let operation = context.operation_type;
        let audit_log = context.clone().into_audit_log();

        if self.async_writes {
            let repository = Arc::clone(&self.repository);

            task::spawn(async move {
                if let Err(e) = repository.save(&audit_log).await {
                    tracing::error!(
                        error = %e,
                        %operation,
                        entity_type = %entity_type,
                        entity_id,
                        "Failed to persist audit log"
                    );
                }
            });

            return Ok(());
        }

        match self.repository.save(&audit_log).await {
            Ok(saved) => {
                tracing::info!(
                    audit_log_id = ?saved.id(),
                    %operation,
                    entity_type = %entity_type,
                    entity_id,
                    "Audit log persisted"
                );
                Ok(())
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    %operation,
                    entity_type = %entity_type,
                    entity_id,
                    "Failed to persist audit log"
                );
                Err(DomainError::Audit {
                    message: format!("{} {} {}", operation, entity_type, entity_id),
                })
            }
        }
    }

    fn order(&self) -> i32 {
        i32::MAX
    }
}
