use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use contact_core::repositories::{AuditLogRepository, ContactRepository};
use contact_core::services::UpdateContactCommand;

use super::contact_id;
use crate::dto::{ContactResponse, UpdateContactRequest};
use crate::handlers::{handle_domain_error, validation_response};
use crate::routes::AppState;

/// Replace a contact's details
///
/// The audit entry carries the contact before and after the change.
pub async fn update_contact<C, A>(
    req: HttpRequest,
    state: web::Data<AppState<C, A>>,
    path: web::Path<i64>,
    body: web::Json<UpdateContactRequest>,
) -> HttpResponse
where
    C: ContactRepository + 'static,
    A: AuditLogRepository + 'static,
{
    let id = match contact_id(&req, path.into_inner()) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let request = body.into_inner();
    if let Err(errors) = request.validate() {
        return validation_response(&req, &errors, &UpdateContactRequest::FIELDS);
    }

    let command = UpdateContactCommand {
        id,
        name: request.name,
        phone: request.phone,
        address: request.address,
    };

    match state.contact_service.update_contact(command).await {
        Ok(contact) => HttpResponse::Ok().json(ContactResponse::from(&contact)),
        Err(e) => handle_domain_error(&req, e),
    }
}
