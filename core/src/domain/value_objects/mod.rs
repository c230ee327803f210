//! Value objects representing immutable domain concepts.

pub mod audit_context;

// Re-export commonly used types
pub use audit_context::{to_audit_json, AuditContext, AuditContextBuilder, Auditable};
