//! Domain entities representing core business objects.

pub mod audit;
pub mod contact;

// Re-export commonly used types
pub use audit::{AuditLog, OperationType};
pub use contact::{
    Contact, ContactId, ContactSnapshot, ADDRESS_MAX_LENGTH, NAME_MAX_LENGTH, PHONE_MAX_LENGTH,
};
