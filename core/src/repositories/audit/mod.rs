//! Audit log repository module.

mod r#trait;
pub use r#trait::AuditLogRepository;

mod memory;
pub use memory::InMemoryAuditLogRepository;

#[cfg(test)]
mod tests;
