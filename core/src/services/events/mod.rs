//! Domain event publishing and audit dispatch.
//!
//! Services hand every [`ContactEvent`](crate::domain::ContactEvent) to a
//! [`DomainEventPublisher`]. The auditing publisher turns it into an
//! [`AuditContext`](crate::domain::AuditContext) and runs it through the
//! registered [`AuditEventHandler`]s.

mod config;
mod handler;
mod publisher;

pub use config::AuditDispatchConfig;
pub use handler::{AuditEventHandler, DatabaseAuditEventHandler};
pub use publisher::{AuditingEventPublisher, DomainEventPublisher};

#[cfg(test)]
mod tests;
