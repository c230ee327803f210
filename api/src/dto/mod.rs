//! Request and response bodies. JSON field names are camelCase.

pub mod audit;
pub mod contact;

pub use audit::AuditLogResponse;
pub use contact::{ContactResponse, CreateContactRequest, UpdateContactRequest};
