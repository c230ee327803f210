//! In-memory implementation of ContactRepository.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use tokio::sync::RwLock;

use crate::domain::entities::{Contact, ContactId};
use crate::errors::DomainError;

use super::ContactRepository;

/// Contact store kept in process memory
///
/// Ids are handed out from a counter starting at 1, like a database
/// sequence. Failures can be injected with [`set_should_fail`].
///
/// [`set_should_fail`]: InMemoryContactRepository::set_should_fail
pub struct InMemoryContactRepository {
    contacts: RwLock<BTreeMap<i64, Contact>>,
    next_id: AtomicI64,
    should_fail: AtomicBool,
}

impl InMemoryContactRepository {
    pub fn new() -> Self {
        Self {
            contacts: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
            should_fail: AtomicBool::new(false),
        }
    }

    /// Set whether operations should fail
    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    /// Number of stored contacts
    pub async fn len(&self) -> usize {
        self.contacts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.contacts.read().await.is_empty()
    }

    fn check_failure(&self) -> Result<(), DomainError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::internal("Contact store unavailable"));
        }
        Ok(())
    }
}

impl Default for InMemoryContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn save(&self, contact: &Contact) -> Result<Contact, DomainError> {
        self.check_failure()?;

        let stored = match contact.id() {
            Some(id) => {
                // Keep the sequence ahead of explicitly supplied ids
                self.next_id.fetch_max(id.value() + 1, Ordering::SeqCst);
                contact.clone()
            }
            None => {
                let id = ContactId::new(self.next_id.fetch_add(1, Ordering::SeqCst))?;
                contact.with_id(id)
            }
        };

        let key = stored.id().map(|id| id.value()).unwrap_or_default();
        self.contacts.write().await.insert(key, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: ContactId) -> Result<Option<Contact>, DomainError> {
        self.check_failure()?;
        Ok(self.contacts.read().await.get(&id.value()).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Contact>, DomainError> {
        self.check_failure()?;
        Ok(self.contacts.read().await.values().cloned().collect())
    }

    async fn delete_by_id(&self, id: ContactId) -> Result<(), DomainError> {
        self.check_failure()?;
        self.contacts.write().await.remove(&id.value());
        Ok(())
    }

    async fn exists_by_id(&self, id: ContactId) -> Result<bool, DomainError> {
        self.check_failure()?;
        Ok(self.contacts.read().await.contains_key(&id.value()))
    }
}
