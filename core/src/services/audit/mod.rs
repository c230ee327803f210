//! Audit log query service.

mod service;

pub use service::AuditLogService;
