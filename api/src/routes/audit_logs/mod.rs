//! Read-only audit trail endpoints under `/api/audit-logs`.
//!
//! Every listing is ordered newest first.

use actix_web::{web, HttpRequest, HttpResponse};
use std::str::FromStr;

use contact_core::domain::entities::{AuditLog, OperationType};
use contact_core::errors::DomainResult;
use contact_core::repositories::{AuditLogRepository, ContactRepository};

use crate::dto::AuditLogResponse;
use crate::handlers::handle_domain_error;
use crate::routes::AppState;

fn respond(req: &HttpRequest, result: DomainResult<Vec<AuditLog>>) -> HttpResponse {
    match result {
        Ok(logs) => HttpResponse::Ok().json(
            logs.iter()
                .map(AuditLogResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(e) => handle_domain_error(req, e),
    }
}

/// The whole audit trail
pub async fn get_all_audit_logs<C, A>(
    req: HttpRequest,
    state: web::Data<AppState<C, A>>,
) -> HttpResponse
where
    C: ContactRepository + 'static,
    A: AuditLogRepository + 'static,
{
    respond(&req, state.audit_log_service.get_all_audit_logs().await)
}

/// History of one contact, including after it was deleted
pub async fn get_audit_logs_by_contact<C, A>(
    req: HttpRequest,
    state: web::Data<AppState<C, A>>,
    path: web::Path<i64>,
) -> HttpResponse
where
    C: ContactRepository + 'static,
    A: AuditLogRepository + 'static,
{
    let contact_id = path.into_inner();
    respond(
        &req,
        state
            .audit_log_service
            .get_audit_logs_by_contact_id(contact_id)
            .await,
    )
}

/// Entries of one operation type: `CREATE`, `READ`, `UPDATE` or `DELETE`
pub async fn get_audit_logs_by_operation<C, A>(
    req: HttpRequest,
    state: web::Data<AppState<C, A>>,
    path: web::Path<String>,
) -> HttpResponse
where
    C: ContactRepository + 'static,
    A: AuditLogRepository + 'static,
{
    let operation_type = match OperationType::from_str(&path.into_inner()) {
        Ok(operation_type) => operation_type,
        Err(e) => return handle_domain_error(&req, e.into()),
    };

    respond(
        &req,
        state
            .audit_log_service
            .get_audit_logs_by_operation_type(operation_type)
            .await,
    )
}
