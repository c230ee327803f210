//! # Contact Book Core
//!
//! Domain layer of the contact book service. It holds the contact and audit
//! log entities, the domain events raised by contact changes, the services
//! implementing each use case and the repository ports the infrastructure
//! layer implements.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{AuditLog, Contact, ContactId, ContactSnapshot, OperationType};
pub use domain::events::{ContactEvent, EventMetadata};
pub use domain::value_objects::{AuditContext, Auditable};
pub use errors::{DomainError, DomainResult, ValidationError};
pub use repositories::{
    AuditLogRepository, ContactRepository, InMemoryAuditLogRepository, InMemoryContactRepository,
};
pub use services::{
    AuditDispatchConfig, AuditEventHandler, AuditLogService, AuditingEventPublisher,
    ContactService, CreateContactCommand, DatabaseAuditEventHandler, DomainEventPublisher,
    UpdateContactCommand,
};
