//! Repository ports and the in-memory adapters used by tests and the
//! embedded storage mode.

pub mod audit;
pub mod contact;

pub use audit::{AuditLogRepository, InMemoryAuditLogRepository};
pub use contact::{ContactRepository, InMemoryContactRepository};
