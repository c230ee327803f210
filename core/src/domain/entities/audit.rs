//! Audit log entity recording every change made to a contact.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::ValidationError;

/// Kind of operation an audit entry records
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationType {
    Create,
    Read,
    Update,
    Delete,
}

impl OperationType {
    pub const ALL: [OperationType; 4] = [
        OperationType::Create,
        OperationType::Read,
        OperationType::Update,
        OperationType::Delete,
    ];

    /// Convert to string representation for storage and the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationType::Create => "CREATE",
            OperationType::Read => "READ",
            OperationType::Update => "UPDATE",
            OperationType::Delete => "DELETE",
        }
    }
}

impl FromStr for OperationType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OperationType::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownOperationType {
                value: s.to_string(),
            })
    }
}

impl std::fmt::Display for OperationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable record of one operation on a contact
///
/// `before_data` and `after_data` hold JSON snapshots of the contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditLog {
    id: Option<i64>,
    contact_id: i64,
    operation_time: DateTime<Utc>,
    operation_type: OperationType,
    before_data: Option<String>,
    after_data: Option<String>,
}

impl AuditLog {
    /// New entry stamped with the current time
    pub fn create(
        contact_id: i64,
        operation_type: OperationType,
        before_data: Option<String>,
        after_data: Option<String>,
    ) -> Self {
        Self::create_at(contact_id, operation_type, before_data, after_data, Utc::now())
    }

    /// New entry for an operation that happened at `operation_time`
    pub fn create_at(
        contact_id: i64,
        operation_type: OperationType,
        before_data: Option<String>,
        after_data: Option<String>,
        operation_time: DateTime<Utc>,
    ) -> Self {
        Self {
            id: None,
            contact_id,
            operation_time,
            operation_type,
            before_data,
            after_data,
        }
    }

    /// Rebuild an entry from storage
    pub fn reconstitute(
        id: i64,
        contact_id: i64,
        operation_time: DateTime<Utc>,
        operation_type: OperationType,
        before_data: Option<String>,
        after_data: Option<String>,
    ) -> Self {
        Self {
            id: Some(id),
            contact_id,
            operation_time,
            operation_type,
            before_data,
            after_data,
        }
    }

    /// Copy carrying the id assigned by storage
    pub fn with_id(&self, id: i64) -> Self {
        Self {
            id: Some(id),
            ..self.clone()
        }
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn contact_id(&self) -> i64 {
        self.contact_id
    }

    pub fn operation_time(&self) -> DateTime<Utc> {
        self.operation_time
    }

    pub fn operation_type(&self) -> OperationType {
        self.operation_type
    }

    pub fn before_data(&self) -> Option<&str> {
        self.before_data.as_deref()
    }

    pub fn after_data(&self) -> Option<&str> {
        self.after_data.as_deref()
    }
}

/// Newest first, ties broken by the higher id
pub fn newest_first(a: &AuditLog, b: &AuditLog) -> std::cmp::Ordering {
    b.operation_time
        .cmp(&a.operation_time)
        .then_with(|| b.id.cmp(&a.id))
}
