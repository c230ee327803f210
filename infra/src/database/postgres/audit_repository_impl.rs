//! PostgreSQL implementation of the AuditLogRepository trait.
//!
//! Entries are stored in the append-only `audit_logs` table. Snapshots are
//! kept as JSON text exactly as produced by the domain.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};

use contact_core::domain::entities::{AuditLog, OperationType};
use contact_core::errors::DomainError;
use contact_core::repositories::AuditLogRepository;

use super::{column_error, query_error};

const SELECT_COLUMNS: &str =
    "SELECT id, contact_id, operation_time, operation_type, before_data, after_data FROM audit_logs";

const NEWEST_FIRST: &str = "ORDER BY operation_time DESC, id DESC";

/// PostgreSQL implementation of AuditLogRepository
pub struct PgAuditLogRepository {
    pool: PgPool,
}

impl PgAuditLogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Convert database row to AuditLog entity
    fn row_to_audit_log(row: &sqlx::postgres::PgRow) -> Result<AuditLog, DomainError> {
        let operation_type: String = row
            .try_get("operation_type")
            .map_err(|e| column_error("operation_type", e))?;

        let operation_type = operation_type
            .parse::<OperationType>()
            .map_err(|_| DomainError::Internal {
                message: format!("Unknown operation type: {}", operation_type),
            })?;

        Ok(AuditLog::reconstitute(
            row.try_get("id").map_err(|e| column_error("id", e))?,
            row.try_get("contact_id")
                .map_err(|e| column_error("contact_id", e))?,
            row.try_get::<DateTime<Utc>, _>("operation_time")
                .map_err(|e| column_error("operation_time", e))?,
            operation_type,
            row.try_get("before_data")
                .map_err(|e| column_error("before_data", e))?,
            row.try_get("after_data")
                .map_err(|e| column_error("after_data", e))?,
        ))
    }

    async fn fetch(
        &self,
        query: &str,
        bind: Option<QueryParam<'_>>,
        action: &str,
    ) -> Result<Vec<AuditLog>, DomainError> {
        let mut q = sqlx::query(query);
        match bind {
            Some(QueryParam::ContactId(id)) => q = q.bind(id),
            Some(QueryParam::Operation(op)) => q = q.bind(op),
            None => {}
        }

        let rows = q
            .fetch_all(&self.pool)
            .await
            .map_err(|e| query_error(action, e))?;

        rows.iter()
            .map(Self::row_to_audit_log)
            .collect::<Result<Vec<_>, _>>()
    }
}

enum QueryParam<'a> {
    ContactId(i64),
    Operation(&'a str),
}

#[async_trait]
impl AuditLogRepository for PgAuditLogRepository {
    async fn save(&self, audit_log: &AuditLog) -> Result<AuditLog, DomainError> {
        let row = sqlx::query(
            r#"
            INSERT INTO audit_logs (
                contact_id, operation_time, operation_type, before_data, after_data
            ) VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(audit_log.contact_id())
        .bind(audit_log.operation_time())
        .bind(audit_log.operation_type().as_str())
        .bind(audit_log.before_data())
        .bind(audit_log.after_data())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| query_error("create audit log", e))?;

        let id: i64 = row.try_get("id").map_err(|e| column_error("id", e))?;
        Ok(audit_log.with_id(id))
    }

    async fn find_all(&self) -> Result<Vec<AuditLog>, DomainError> {
        let query = format!("{} {}", SELECT_COLUMNS, NEWEST_FIRST);
        self.fetch(&query, None, "list audit logs").await
    }

    async fn find_by_contact_id(&self, contact_id: i64) -> Result<Vec<AuditLog>, DomainError> {
        let query = format!("{} WHERE contact_id = $1 {}", SELECT_COLUMNS, NEWEST_FIRST);
        self.fetch(
            &query,
            Some(QueryParam::ContactId(contact_id)),
            "find audit logs by contact",
        )
        .await
    }

    async fn find_by_operation_type(
        &self,
        operation_type: OperationType,
    ) -> Result<Vec<AuditLog>, DomainError> {
        let query = format!("{} WHERE operation_type = $1 {}", SELECT_COLUMNS, NEWEST_FIRST);
        self.fetch(
            &query,
            Some(QueryParam::Operation(operation_type.as_str())),
            "find audit logs by operation type",
        )
        .await
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let row = sqlx::query("SELECT COUNT(*) FROM audit_logs")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| query_error("count audit logs", e))?;

        let count: i64 = row.try_get(0).map_err(|e| column_error("count", e))?;
        Ok(count.max(0) as u64)
    }

    async fn delete_all(&self) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM audit_logs")
            .execute(&self.pool)
            .await
            .map_err(|e| query_error("delete audit logs", e))?;

        Ok(())
    }
}
