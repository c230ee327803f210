//! PostgreSQL implementation of the ContactRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};

use contact_core::domain::entities::{Contact, ContactId};
use contact_core::errors::DomainError;
use contact_core::repositories::ContactRepository;

use super::{column_error, query_error};

const COLUMNS: &str = "id, name, phone, address, created_at, updated_at";

/// PostgreSQL implementation of ContactRepository, backed by the `contacts` table
pub struct PgContactRepository {
    pool: PgPool,
}

impl PgContactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Contact entity
    fn row_to_contact(row: &sqlx::postgres::PgRow) -> Result<Contact, DomainError> {
        let id: i64 = row.try_get("id").map_err(|e| column_error("id", e))?;
        let id = ContactId::new(id).map_err(|e| DomainError::Internal {
            message: format!("Invalid stored contact id: {}", e),
        })?;

        Ok(Contact::reconstitute(
            id,
            row.try_get("name").map_err(|e| column_error("name", e))?,
            row.try_get("phone").map_err(|e| column_error("phone", e))?,
            row.try_get("address").map_err(|e| column_error("address", e))?,
            row.try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| column_error("created_at", e))?,
            row.try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| column_error("updated_at", e))?,
        ))
    }
}

#[async_trait]
impl ContactRepository for PgContactRepository {
    async fn save(&self, contact: &Contact) -> Result<Contact, DomainError> {
        let row = match contact.id() {
            None => {
                let query = format!(
                    "INSERT INTO contacts (name, phone, address, created_at, updated_at) \
                     VALUES ($1, $2, $3, $4, $5) RETURNING {}",
                    COLUMNS
                );
                sqlx::query(&query)
                    .bind(contact.name())
                    .bind(contact.phone())
                    .bind(contact.address())
                    .bind(contact.created_at())
                    .bind(contact.updated_at())
                    .fetch_one(&self.pool)
                    .await
                    .map_err(|e| query_error("insert contact", e))?
            }
            Some(id) => {
                let query = format!(
                    "INSERT INTO contacts (id, name, phone, address, created_at, updated_at) \
                     VALUES ($1, $2, $3, $4, $5, $6) \
                     ON CONFLICT (id) DO UPDATE SET \
                         name = EXCLUDED.name, \
                         phone = EXCLUDED.phone, \
                         address = EXCLUDED.address, \
                         updated_at = EXCLUDED.updated_at \
                     RETURNING {}",
                    COLUMNS
                );
                sqlx::query(&query)
                    .bind(id.value())
                    .bind(contact.name())
                    .bind(contact.phone())
                    .bind(contact.address())
                    .bind(contact.created_at())
                    .bind(contact.updated_at())
                    .fetch_one(&self.pool)
                    .await
                    .map_err(|e| query_error("save contact", e))?
            }
        };

        Self::row_to_contact(&row)
    }

    async fn find_by_id(&self, id: ContactId) -> Result<Option<Contact>, DomainError> {
        let query = format!("SELECT {} FROM contacts WHERE id = $1", COLUMNS);

        let row = sqlx::query(&query)
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| query_error("find contact", e))?;

        row.as_ref().map(Self::row_to_contact).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Contact>, DomainError> {
        let query = format!("SELECT {} FROM contacts ORDER BY id ASC", COLUMNS);

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| query_error("list contacts", e))?;

        rows.iter()
            .map(Self::row_to_contact)
            .collect::<Result<Vec<_>, _>>()
    }

    async fn delete_by_id(&self, id: ContactId) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(|e| query_error("delete contact", e))?;

        Ok(())
    }

    async fn exists_by_id(&self, id: ContactId) -> Result<bool, DomainError> {
        let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM contacts WHERE id = $1)")
            .bind(id.value())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| query_error("check contact", e))?;

        row.try_get::<bool, _>(0).map_err(|e| column_error("exists", e))
    }
}
