use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use contact_core::repositories::{AuditLogRepository, ContactRepository};
use contact_core::services::CreateContactCommand;

use crate::dto::{ContactResponse, CreateContactRequest};
use crate::handlers::{handle_domain_error, validation_response};
use crate::routes::AppState;

/// Create a contact
///
/// Records a `CREATE` entry in the audit trail.
pub async fn create_contact<C, A>(
    req: HttpRequest,
    state: web::Data<AppState<C, A>>,
    body: web::Json<CreateContactRequest>,
) -> HttpResponse
where
    C: ContactRepository + 'static,
    A: AuditLogRepository + 'static,
{
    let request = body.into_inner();
    if let Err(errors) = request.validate() {
        return validation_response(&req, &errors, &CreateContactRequest::FIELDS);
    }

    let command = CreateContactCommand {
        name: request.name,
        phone: request.phone,
        address: request.address,
    };

    match state.contact_service.create_contact(command).await {
        Ok(contact) => HttpResponse::Created().json(ContactResponse::from(&contact)),
        Err(e) => handle_domain_error(&req, e),
    }
}
