use actix_web::{web, HttpRequest, HttpResponse};

use contact_core::repositories::{AuditLogRepository, ContactRepository};

use super::contact_id;
use crate::dto::ContactResponse;
use crate::handlers::handle_domain_error;
use crate::routes::AppState;

/// List every contact, ordered by id
pub async fn get_all_contacts<C, A>(
    req: HttpRequest,
    state: web::Data<AppState<C, A>>,
) -> HttpResponse
where
    C: ContactRepository + 'static,
    A: AuditLogRepository + 'static,
{
    match state.contact_service.get_all_contacts().await {
        Ok(contacts) => HttpResponse::Ok().json(
            contacts
                .iter()
                .map(ContactResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(e) => handle_domain_error(&req, e),
    }
}

/// Fetch one contact
pub async fn get_contact<C, A>(
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

    match state.contact_service.get_contact_by_id(id).await {
        Ok(contact) => HttpResponse::Ok().json(ContactResponse::from(&contact)),
        Err(e) => handle_domain_error(&req, e),
    }
}
