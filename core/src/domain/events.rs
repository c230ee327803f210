//! Domain events raised by contact changes.
//!
//! Services publish these after a change is stored; the audit trail is
//! built entirely from them.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::{ContactId, ContactSnapshot, OperationType};
use crate::domain::value_objects::{to_audit_json, AuditContext};

/// Entity type recorded for contact events
pub const CONTACT_ENTITY_TYPE: &str = "Contact";

/// Identity and time shared by every event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventMetadata {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
}

impl EventMetadata {
    pub fn new() -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
        }
    }
}

impl Default for EventMetadata {
    fn default() -> Self {
        Self::new()
    }
}

/// Something that happened to a contact
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactEvent {
    Created {
        metadata: EventMetadata,
        contact_id: ContactId,
        snapshot: ContactSnapshot,
    },
    Updated {
        metadata: EventMetadata,
        contact_id: ContactId,
        snapshot: ContactSnapshot,
        before_snapshot: ContactSnapshot,
    },
    Deleted {
        metadata: EventMetadata,
        contact_id: ContactId,
        snapshot: ContactSnapshot,
    },
}

impl ContactEvent {
    pub fn created(contact_id: ContactId, snapshot: ContactSnapshot) -> Self {
        ContactEvent::Created {
            metadata: EventMetadata::new(),
            contact_id,
            snapshot,
        }
    }

    pub fn updated(
        contact_id: ContactId,
        snapshot: ContactSnapshot,
        before_snapshot: ContactSnapshot,
    ) -> Self {
        ContactEvent::Updated {
            metadata: EventMetadata::new(),
            contact_id,
            snapshot,
            before_snapshot,
        }
    }

    pub fn deleted(contact_id: ContactId, snapshot: ContactSnapshot) -> Self {
        ContactEvent::Deleted {
            metadata: EventMetadata::new(),
            contact_id,
            snapshot,
        }
    }

    pub fn metadata(&self) -> &EventMetadata {
        match self {
            ContactEvent::Created { metadata, .. }
            | ContactEvent::Updated { metadata, .. }
            | ContactEvent::Deleted { metadata, .. } => metadata,
        }
    }

    pub fn contact_id(&self) -> ContactId {
        match self {
            ContactEvent::Created { contact_id, .. }
            | ContactEvent::Updated { contact_id, .. }
            | ContactEvent::Deleted { contact_id, .. } => *contact_id,
        }
    }

    /// Event name used in logs
    pub fn event_type(&self) -> &'static str {
        match self {
            ContactEvent::Created { .. } => "ContactCreatedEvent",
            ContactEvent::Updated { .. } => "ContactUpdatedEvent",
            ContactEvent::Deleted { .. } => "ContactDeletedEvent",
        }
    }

    pub fn operation_type(&self) -> OperationType {
        match self {
            ContactEvent::Created { .. } => OperationType::Create,
            ContactEvent::Updated { .. } => OperationType::Update,
            ContactEvent::Deleted { .. } => OperationType::Delete,
        }
    }

    /// Audit context describing this event, timed at the event
    pub fn to_audit_context(&self) -> AuditContext {
        let id = self.contact_id().value();
        let mut context = match self {
            ContactEvent::Created { snapshot, .. } => {
                AuditContext::for_create(CONTACT_ENTITY_TYPE, id, to_audit_json(snapshot))
            }
            ContactEvent::Updated {
                snapshot,
                before_snapshot,
                ..
            } => AuditContext::for_update(
                CONTACT_ENTITY_TYPE,
                id,
                to_audit_json(before_snapshot),
                to_audit_json(snapshot),
            ),
            ContactEvent::Deleted { snapshot, .. } => {
                AuditContext::for_delete(CONTACT_ENTITY_TYPE, id, to_audit_json(snapshot))
            }
        };
        context.timestamp = self.metadata().occurred_at;
        context
    }
}
