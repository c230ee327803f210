use actix_web::{web, HttpRequest, HttpResponse};

use contact_core::repositories::{AuditLogRepository, ContactRepository};

use super::contact_id;
use crate::handlers::handle_domain_error;
use crate::routes::AppState;

/// Delete a contact. Its audit history is kept.
pub async fn delete_contact<C, A>(
    req: HttpRequest,
    state: web::Data<AppState<C, A>>,
    path: web::Path<i64>,
) -> HttpResponse
where
    C: ContactRepository + 'static,
    A: AuditLogRepository + 'static,
{
    let id = match contact_id(&req, path.into_inner()) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.contact_service.delete_contact(id).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => handle_domain_error(&req, e),
    }
}
