//! Contact repository trait defining the interface for contact persistence.

use async_trait::async_trait;

use crate::domain::entities::{Contact, ContactId};
use crate::errors::DomainError;

/// Repository trait for Contact entity persistence operations
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Persist a contact
    ///
    /// A contact without an id is inserted and receives a new one. A contact
    /// that already carries an id is upserted under that id, which is how a
    /// deleted contact is restored.
    ///
    /// # Returns
    /// * The stored contact, always carrying its id
    async fn save(&self, contact: &Contact) -> Result<Contact, DomainError>;

    /// Find a contact by id
    async fn find_by_id(&self, id: ContactId) -> Result<Option<Contact>, DomainError>;

    /// All contacts ordered by id ascending
    async fn find_all(&self) -> Result<Vec<Contact>, DomainError>;

    /// Delete a contact. Deleting a missing id is not an error.
    async fn delete_by_id(&self, id: ContactId) -> Result<(), DomainError>;

    async fn exists_by_id(&self, id: ContactId) -> Result<bool, DomainError>;
}
