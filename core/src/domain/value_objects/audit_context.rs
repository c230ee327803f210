//! Audit context value object handed to audit handlers.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::{AuditLog, OperationType};
use crate::errors::{DomainError, DomainResult};

/// An entity whose changes are recorded in the audit trail
pub trait Auditable {
    /// Serializable view of the audited fields
    type Snapshot: Serialize;

    /// Entity type name handlers can filter on
    fn entity_type(&self) -> &'static str;

    /// Storage id, `None` before persistence
    fn entity_id(&self) -> Option<i64>;

    fn audit_snapshot(&self) -> Self::Snapshot;
}

/// Serialize a snapshot for storage. Failures are logged and yield `None`
/// so that a bad snapshot never blocks the operation being audited.
pub fn to_audit_json<T: Serialize>(snapshot: &T) -> Option<String> {
    match serde_json::to_string(snapshot) {
        Ok(json) => Some(json),
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize audit snapshot");
            None
        }
    }
}

/// Everything an audit handler needs to know about one operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditContext {
    pub entity_type: String,
    pub entity_id: i64,
    pub operation_type: OperationType,
    pub before_data: Option<String>,
    pub after_data: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl AuditContext {
    pub fn for_create(entity_type: impl Into<String>, entity_id: i64, after_data: Option<String>) -> Self {
        Self {
            entity_type: entity_type.into(),
            entity_id,
            operation_type: OperationType::Create,
            before_data: None,
            after_data,
            timestamp: Utc::now(),
        }
    }

    pub fn for_update(
        entity_type: impl Into<String>,
        entity_id: i64,
        before_data: Option<String>,
        after_data: Option<String>,
    ) -> Self {
        Self {
            entity_type: entity_type.into(),
            entity_id,
            operation_type: OperationType::Update,
            before_data,
            after_data,
            timestamp: Utc::now(),
        }
    }

    pub fn for_delete(entity_type: impl Into<String>, entity_id: i64, before_data: Option<String>) -> Self {
        Self {
            entity_type: entity_type.into(),
            entity_id,
            operation_type: OperationType::Delete,
            before_data,
            after_data: None,
            timestamp: Utc::now(),
        }
    }

    pub fn builder() -> AuditContextBuilder {
        AuditContextBuilder::default()
    }

    /// Audit log entry for this context, stamped with the context time
    pub fn into_audit_log(self) -> AuditLog {
        AuditLog::create_at(
            self.entity_id,
            self.operation_type,
            self.before_data,
            self.after_data,
            self.timestamp,
        )
    }
}

/// Builder for contexts the `for_*` constructors don't cover, e.g. reads
#[derive(Debug, Default)]
pub struct AuditContextBuilder {
    entity_type: Option<String>,
    entity_id: Option<i64>,
    operation_type: Option<OperationType>,
    before_data: Option<String>,
    after_data: Option<String>,
    timestamp: Option<DateTime<Utc>>,
}

impl AuditContextBuilder {
    pub fn entity_type(mut self, entity_type: impl Into<String>) -> Self {
        self.entity_type = Some(entity_type.into());
        self
    }

    pub fn entity_id(mut self, entity_id: i64) -> Self {
        self.entity_id = Some(entity_id);
        self
    }

    pub fn operation_type(mut self, operation_type: OperationType) -> Self {
        self.operation_type = Some(operation_type);
        self
    }

    pub fn before_data(mut self, before_data: impl Into<String>) -> Self {
        self.before_data = Some(before_data.into());
        self
    }

    pub fn after_data(mut self, after_data: impl Into<String>) -> Self {
        self.after_data = Some(after_data.into());
        self
    }

    pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Fails when the entity type, id or operation is missing
    pub fn build(self) -> DomainResult<AuditContext> {
        let missing = |what: &str| DomainError::internal(format!("audit context is missing {}", what));
        Ok(AuditContext {
            entity_type: self.entity_type.ok_or_else(|| missing("entity_type"))?,
            entity_id: self.entity_id.ok_or_else(|| missing("entity_id"))?,
            operation_type: self.operation_type.ok_or_else(|| missing("operation_type"))?,
            before_data: self.before_data,
            after_data: self.after_data,
            timestamp: self.timestamp.unwrap_or_else(Utc::now),
        })
    }
}
