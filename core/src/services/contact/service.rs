//! Contact service implementing the contact use cases.
//!
//! Every change publishes a domain event after it is stored. If publishing
//! fails the change is undone before the error is returned, so a contact
//! change and its audit entry are recorded together or not at all.

use std::sync::Arc;

use crate::domain::entities::{Contact, ContactId};
use crate::domain::events::ContactEvent;
use crate::domain::value_objects::Auditable;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::ContactRepository;
use crate::services::events::DomainEventPublisher;

use super::{CreateContactCommand, UpdateContactCommand};

/// Service for contact operations
pub struct ContactService<R>
where
    R: ContactRepository,
{
    repository: Arc<R>,
    publisher: Arc<dyn DomainEventPublisher>,
}

impl<R> ContactService<R>
where
    R: ContactRepository,
{
    pub fn new(repository: Arc<R>, publisher: Arc<dyn DomainEventPublisher>) -> Self {
        Self {
            repository,
            publisher,
        }
    }

    pub async fn create_contact(&self, command: CreateContactCommand) -> DomainResult<Contact> {
        tracing::debug!(name = %command.name, "Creating contact");

        let contact = Contact::create(&command.name, &command.phone, command.address.as_deref())?;
        let saved = self.repository.save(&contact).await?;
        let id = stored_id(&saved)?;

        let event = ContactEvent::created(id, saved.audit_snapshot());
        if let Err(e) = self.publisher.publish(&event).await {
            self.compensate("create", id, self.repository.delete_by_id(id).await);
            return Err(e);
        }

        tracing::info!(contact_id = %id, "Contact created");
        Ok(saved)
    }

    pub async fn get_contact_by_id(&self, id: ContactId) -> DomainResult<Contact> {
        tracing::debug!(contact_id = %id, "Fetching contact");
        self.find_existing(id).await
    }

    pub async fn get_all_contacts(&self) -> DomainResult<Vec<Contact>> {
        tracing::debug!("Fetching all contacts");
        self.repository.find_all().await
    }

    pub async fn update_contact(&self, command: UpdateContactCommand) -> DomainResult<Contact> {
        tracing::debug!(contact_id = %command.id, "Updating contact");

        let existing = self.find_existing(command.id).await?;
        let before = existing.audit_snapshot();

        let mut contact = existing.clone();
        contact.update_info(&command.name, &command.phone, command.address.as_deref())?;
        let updated = self.repository.save(&contact).await?;

        let event = ContactEvent::updated(command.id, updated.audit_snapshot(), before);
        if let Err(e) = self.publisher.publish(&event).await {
            let restored = self.repository.save(&existing).await.map(|_| ());
            self.compensate("update", command.id, restored);
            return Err(e);
        }

        tracing::info!(contact_id = %command.id, "Contact updated");
        Ok(updated)
    }

    pub async fn delete_contact(&self, id: ContactId) -> DomainResult<()> {
        tracing::debug!(contact_id = %id, "Deleting contact");

        let existing = self.find_existing(id).await?;
        let snapshot = existing.audit_snapshot();

        self.repository.delete_by_id(id).await?;

        let event = ContactEvent::deleted(id, snapshot);
        if let Err(e) = self.publisher.publish(&event).await {
            let restored = self.repository.save(&existing).await.map(|_| ());
            self.compensate("delete", id, restored);
            return Err(e);
        }

        tracing::info!(contact_id = %id, "Contact deleted");
        Ok(())
    }

    async fn find_existing(&self, id: ContactId) -> DomainResult<Contact> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(DomainError::ContactNotFound { id: id.value() })
    }

    fn compensate(&self, operation: &str, id: ContactId, outcome: DomainResult<()>) {
        match outcome {
            Ok(()) => tracing::warn!(
                operation,
                contact_id = %id,
                "Audit recording failed, contact change rolled back"
            ),
            Err(e) => tracing::error!(
                operation,
                contact_id = %id,
                error = %e,
                "Audit recording failed and the contact change could not be rolled back"
            ),
        }
    }
}

fn stored_id(contact: &Contact) -> DomainResult<ContactId> {
    contact
        .id()
        .ok_or_else(|| DomainError::internal("repository returned a contact without an id"))
}
