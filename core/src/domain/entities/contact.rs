//! Contact aggregate root.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Auditable;
use crate::errors::{ContactField, ValidationError};

/// Maximum name length in characters
pub const NAME_MAX_LENGTH: usize = 50;
/// Maximum phone length in characters
pub const PHONE_MAX_LENGTH: usize = 20;
/// Maximum address length in characters
pub const ADDRESS_MAX_LENGTH: usize = 200;

/// Identifier of a persisted contact, always positive
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct ContactId(i64);

impl ContactId {
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if value <= 0 {
            return Err(ValidationError::NonPositiveId { value });
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for ContactId {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ContactId> for i64 {
    fn from(id: ContactId) -> Self {
        id.0
    }
}

impl std::fmt::Display for ContactId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Contact as recorded in audit entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSnapshot {
    pub id: Option<i64>,
    pub name: String,
    pub phone: String,
    /// Empty when the contact has no address
    pub address: String,
}

/// A person in the contact book
///
/// Fields are only reachable through [`Contact::create`],
/// [`Contact::update_info`] and [`Contact::reconstitute`], so a contact built
/// from user input always satisfies the length rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    id: Option<ContactId>,
    name: String,
    phone: String,
    address: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Contact {
    /// Create a new, not yet persisted contact. Inputs are trimmed.
    pub fn create(name: &str, phone: &str, address: Option<&str>) -> Result<Self, ValidationError> {
        validate(name, phone, address)?;
        let now = Utc::now();
        Ok(Self {
            id: None,
            name: name.trim().to_string(),
            phone: phone.trim().to_string(),
            address: address.map(|a| a.trim().to_string()),
            created_at: now,
            updated_at: now,
        })
    }

    /// Rebuild a contact from storage without validation
    pub fn reconstitute(
        id: ContactId,
        name: String,
        phone: String,
        address: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Some(id),
            name,
            phone,
            address,
            created_at,
            updated_at,
        }
    }

    /// Replace the contact details. On error the contact is left untouched.
    pub fn update_info(
        &mut self,
        name: &str,
        phone: &str,
        address: Option<&str>,
    ) -> Result<(), ValidationError> {
        validate(name, phone, address)?;
        self.name = name.trim().to_string();
        self.phone = phone.trim().to_string();
        self.address = address.map(|a| a.trim().to_string());
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Copy of this contact carrying the id assigned by storage
    pub fn with_id(&self, id: ContactId) -> Self {
        Self {
            id: Some(id),
            ..self.clone()
        }
    }

    pub fn id(&self) -> Option<ContactId> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl Auditable for Contact {
    type Snapshot = ContactSnapshot;

    fn entity_type(&self) -> &'static str {
        "Contact"
    }

    fn entity_id(&self) -> Option<i64> {
        self.id.map(|id| id.value())
    }

    fn audit_snapshot(&self) -> ContactSnapshot {
        ContactSnapshot {
            id: self.entity_id(),
            name: self.name.clone(),
            phone: self.phone.clone(),
            address: self.address.clone().unwrap_or_default(),
        }
    }
}

fn validate(name: &str, phone: &str, address: Option<&str>) -> Result<(), ValidationError> {
    check_required(ContactField::Name, name, NAME_MAX_LENGTH)?;
    check_required(ContactField::Phone, phone, PHONE_MAX_LENGTH)?;
    if let Some(address) = address {
        check_length(ContactField::Address, address, ADDRESS_MAX_LENGTH)?;
    }
    Ok(())
}

fn check_required(field: ContactField, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required { field });
    }
    check_length(field, value, max)
}

// Length is counted in characters, not bytes
fn check_length(field: ContactField, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.trim().chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(())
}
