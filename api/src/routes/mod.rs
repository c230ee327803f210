//! Route handlers and the state they share

pub mod audit_logs;
pub mod contacts;
pub mod health;

use std::sync::Arc;

use contact_core::repositories::{AuditLogRepository, ContactRepository};
use contact_core::services::{
    AuditDispatchConfig, AuditEventHandler, AuditLogService, AuditingEventPublisher,
    ContactService, DatabaseAuditEventHandler,
};
use contact_infra::StorageBackend;
use contact_shared::AuditConfig;

/// Application state that holds shared services
pub struct AppState<C, A>
where
    C: ContactRepository,
    A: AuditLogRepository,
{
    pub contact_service: Arc<ContactService<C>>,
    pub audit_log_service: Arc<AuditLogService<A>>,
    pub storage: StorageBackend,
}

impl<C, A> AppState<C, A>
where
    C: ContactRepository + 'static,
    A: AuditLogRepository + 'static,
{
    /// Wire the services over the given repositories
    ///
    /// Contact changes are audited by a database handler writing into
    /// `audit_logs`, dispatched according to `audit`.
    pub fn new(
        contacts: Arc<C>,
        audit_logs: Arc<A>,
        audit: &AuditConfig,
        storage: StorageBackend,
    ) -> Self {
        let dispatch = AuditDispatchConfig::from(audit);
        let handlers: Vec<Arc<dyn AuditEventHandler>> = vec![Arc::new(
            DatabaseAuditEventHandler::new(Arc::clone(&audit_logs), dispatch.async_writes),
        )];
        let publisher = Arc::new(AuditingEventPublisher::new(handlers, &dispatch));

        tracing::info!(
            handlers = ?publisher.handler_names(),
            continue_on_failure = dispatch.continue_on_failure,
            async_writes = dispatch.async_writes,
            "Audit dispatch configured"
        );

        Self {
            contact_service: Arc::new(ContactService::new(contacts, publisher)),
            audit_log_service: Arc::new(AuditLogService::new(audit_logs)),
            storage,
        }
    }
}
