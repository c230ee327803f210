//! Event publisher that records the audit trail.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::events::ContactEvent;
use crate::errors::DomainResult;

use super::{AuditDispatchConfig, AuditEventHandler};

/// Outbound port for domain events
#[async_trait]
pub trait DomainEventPublisher: Send + Sync {
    async fn publish(&self, event: &ContactEvent) -> DomainResult<()>;
}

/// Publisher that dispatches each event's audit context to its handlers
pub struct AuditingEventPublisher {
    handlers: Vec<Arc<dyn AuditEventHandler>>,
    continue_on_failure: bool,
}

impl AuditingEventPublisher {
    /// Handlers are kept sorted by order; equal orders keep registration order.
    pub fn new(mut handlers: Vec<Arc<dyn AuditEventHandler>>, config: &AuditDispatchConfig) -> Self {
        handlers.sort_by_key(|handler| handler.order());
        Self {
            handlers,
            continue_on_failure: config.continue_on_failure,
        }
    }

    /// Names of the registered handlers in dispatch order
    pub fn handler_names(&self) -> Vec<&str> {
        self.handlers.iter().map(|handler| handler.name()).collect()
    }
}

#[async_trait]
impl DomainEventPublisher for AuditingEventPublisher {
    async fn publish(&self, event: &ContactEvent) -> DomainResult<()> {
        tracing::debug!(
            event_type = event.event_type(),
            event_id = %event.metadata().event_id,
            contact_id = %event.contact_id(),
            "Publishing domain event"
        );

        let context = event.to_audit_context();

        for handler in &self.handlers {
            if !handler.supports(&context.entity_type) {
                continue;
            }

            if let Err(e) = handler.handle(&context).await {
                if !self.continue_on_failure {
                    return Err(e);
                }
                tracing::warn!(
                    handler = handler.name(),
                    error = %e,
                    event_type = event.event_type(),
                    "Audit handler failed, continuing"
                );
            }
        }

        Ok(())
    }
}
