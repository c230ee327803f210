//! Shared setup for the API integration tests

#![allow(dead_code)]

use actix_web::web;
use serde_json::{json, Value};
use std::sync::Arc;

use contact_api::AppState;
use contact_core::repositories::{InMemoryAuditLogRepository, InMemoryContactRepository};
use contact_infra::StorageBackend;
use contact_shared::AppConfig;

pub type MemoryState = AppState<InMemoryContactRepository, InMemoryAuditLogRepository>;

/// In-memory application with handles on its repositories
pub struct TestContext {
    pub config: AppConfig,
    pub contacts: Arc<InMemoryContactRepository>,
    pub audit_logs: Arc<InMemoryAuditLogRepository>,
    pub state: web::Data<MemoryState>,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_config(AppConfig::for_tests())
    }

    pub fn with_config(config: AppConfig) -> Self {
        let contacts = Arc::new(InMemoryContactRepository::new());
        let audit_logs = Arc::new(InMemoryAuditLogRepository::new());
        let state = web::Data::new(AppState::new(
            Arc::clone(&contacts),
            Arc::clone(&audit_logs),
            &config.audit,
            StorageBackend::Memory,
        ));

        Self {
            config,
            contacts,
            audit_logs,
            state,
        }
    }
}

pub fn contact_body(name: &str, phone: &str, address: Option<&str>) -> Value {
    json!({ "name": name, "phone": phone, "address": address })
}

/// Parse a stored JSON snapshot from an audit entry field
pub fn snapshot(value: &Value) -> Value {
    serde_json::from_str(value.as_str().expect("snapshot is a string")).expect("snapshot is JSON")
}
