//! Contact endpoints under `/api/contacts`

pub mod create;
pub mod delete;
pub mod query;
pub mod update;

pub use create::create_contact;
pub use delete::delete_contact;
pub use query::{get_all_contacts, get_contact};
pub use update::update_contact;

use actix_web::{HttpRequest, HttpResponse};

use contact_core::domain::entities::ContactId;

use crate::handlers::handle_domain_error;

/// Parse a path id, rejecting zero and negatives with a 400
pub(crate) fn contact_id(req: &HttpRequest, raw: i64) -> Result<ContactId, HttpResponse> {
    ContactId::new(raw).map_err(|e| handle_domain_error(req, e.into()))
}
