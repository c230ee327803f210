//! Shared utilities and common types for the contact book server
//!
//! This crate provides functionality used across all server modules:
//! - Layered configuration (`AppConfig`)
//! - The HTTP error body returned by every endpoint
//! - Language and health-check types

pub mod config;
pub mod errors;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuditConfig, CorsConfig, DatabaseConfig, Environment, LogFormat, LoggingConfig,
    ServerConfig, StorageKind,
};
pub use errors::{ConfigError, ErrorResponse, FieldError};
pub use types::{HealthResponse, HealthStatus, Language, ServiceHealth};
