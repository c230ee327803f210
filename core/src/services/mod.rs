//! Business services containing domain logic and use cases.

pub mod audit;
pub mod contact;
pub mod events;

// Re-export commonly used types
pub use audit::AuditLogService;
pub use contact::{ContactService, CreateContactCommand, UpdateContactCommand};
pub use events::{
    AuditDispatchConfig, AuditEventHandler, AuditingEventPublisher, DatabaseAuditEventHandler,
    DomainEventPublisher,
};
