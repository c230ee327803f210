use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use contact_core::domain::entities::{AuditLog, OperationType};

/// One audit trail entry
///
/// `beforeData` and `afterData` are JSON documents encoded as strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLogResponse {
    pub id: i64,
    pub contact_id: i64,
    pub operation_time: DateTime<Utc>,
    pub operation_type: OperationType,
    pub before_data: Option<String>,
    pub after_data: Option<String>,
}

impl From<&AuditLog> for AuditLogResponse {
    fn from(log: &AuditLog) -> Self {
        Self {
            id: log.id().unwrap_or_default(),
            contact_id: log.contact_id(),
            operation_time: log.operation_time(),
            operation_type: log.operation_type(),
            before_data: log.before_data().map(str::to_string),
            after_data: log.after_data().map(str::to_string),
        }
    }
}
