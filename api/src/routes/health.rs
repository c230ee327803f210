use actix_web::{web, HttpResponse};
use std::collections::HashMap;
use std::time::Instant;

use contact_core::repositories::{AuditLogRepository, ContactRepository};
use contact_shared::{HealthResponse, HealthStatus, ServiceHealth};

use crate::routes::AppState;

pub const SERVICE_NAME: &str = "contact-book";

/// Liveness plus storage and audit trail checks. 503 when unhealthy.
pub async fn health_check<C, A>(state: web::Data<AppState<C, A>>) -> HttpResponse
where
    C: ContactRepository + 'static,
    A: AuditLogRepository + 'static,
{
    let mut checks = HashMap::new();
    checks.insert("storage".to_string(), state.storage.health().await);

    let start = Instant::now();
    let audit = match state.audit_log_service.count().await {
        Ok(count) => ServiceHealth {
            message: Some(format!("{} entries", count)),
            ..ServiceHealth::healthy(start.elapsed().as_millis() as u64)
        },
        Err(e) => ServiceHealth::unhealthy(e.to_string()),
    };
    checks.insert("audit".to_string(), audit);

    let response = HealthResponse::from_checks(SERVICE_NAME, env!("CARGO_PKG_VERSION"), checks);
    if response.status == HealthStatus::Unhealthy {
        tracing::warn!(services = ?response.services, "Health check failed");
        HttpResponse::ServiceUnavailable().json(response)
    } else {
        HttpResponse::Ok().json(response)
    }
}
