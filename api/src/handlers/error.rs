//! Every failure leaves the service as an [`ErrorResponse`] body.
//!
//! Messages are localized from the request's `Accept-Language`. Internal
//! failures are logged with the request id and never leak details to the
//! client.

use actix_web::{
    error::{InternalError, JsonPayloadError, PathError},
    http::StatusCode,
    HttpRequest, HttpResponse,
};
use validator::ValidationErrors;

use contact_core::errors::{localize, DomainError, ValidationError};
use contact_shared::errors::reasons;
use contact_shared::{ErrorResponse, FieldError, Language};

use crate::i18n::{self, keys};
use crate::middleware::RequestContextExt;

fn respond(status: StatusCode, body: ErrorResponse) -> HttpResponse {
    HttpResponse::build(status).json(body)
}

fn error_body(req: &HttpRequest, status: StatusCode, reason: &str, message: String) -> ErrorResponse {
    ErrorResponse::new(status.as_u16(), reason, message, req.path())
}

/// 400 with field level details for a rejected request body
///
/// `field_order` fixes the order of the reported fields; the top level
/// message is the first field's message.
pub fn validation_response(
    req: &HttpRequest,
    errors: &ValidationErrors,
    field_order: &[&str],
) -> HttpResponse {
    let lang = req.language();
    let field_errors = collect_field_errors(errors, field_order, lang);

    tracing::warn!(
        request_id = ?req.request_id(),
        fields = ?field_errors.iter().map(|e| e.field.as_str()).collect::<Vec<_>>(),
        "Request validation failed"
    );

    let message = field_errors
        .first()
        .map(|e| e.message.clone())
        .unwrap_or_else(|| i18n::message(keys::VALIDATION_FAILED, lang));

    let body = error_body(req, StatusCode::BAD_REQUEST, reasons::BAD_REQUEST, message)
        .with_validation_errors(field_errors);
    respond(StatusCode::BAD_REQUEST, body)
}

fn collect_field_errors(
    errors: &ValidationErrors,
    field_order: &[&str],
    lang: Language,
) -> Vec<FieldError> {
    let rank = |field: &str| {
        field_order
            .iter()
            .position(|f| *f == field)
            .unwrap_or(field_order.len())
    };

    let mut fields: Vec<_> = errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, errs)| Some((field.to_string(), errs.first()?.message.clone())))
        .collect();
    fields.sort_by(|(a, _), (b, _)| rank(a).cmp(&rank(b)).then_with(|| a.cmp(b)));

    fields
        .into_iter()
        .map(|(field, message)| {
            let message = match message {
                Some(message) => localize(&message, lang).to_string(),
                None => i18n::message(keys::VALIDATION_FAILED, lang),
            };
            FieldError::new(field, message)
        })
        .collect()
}

/// Map a domain failure to its HTTP status and body
pub fn handle_domain_error(req: &HttpRequest, error: DomainError) -> HttpResponse {
    let lang = req.language();

    match error {
        DomainError::Validation(err) => bad_request(req, &err, lang),
        DomainError::ContactNotFound { .. } => {
            tracing::debug!(request_id = ?req.request_id(), error = %error, "Contact not found");
            let body = error_body(
                req,
                StatusCode::NOT_FOUND,
                reasons::NOT_FOUND,
                error.localized(lang),
            );
            respond(StatusCode::NOT_FOUND, body)
        }
        DomainError::Audit { .. } | DomainError::Internal { .. } => {
            tracing::error!(
                request_id = ?req.request_id(),
                path = %req.path(),
                error = %error,
                "Request failed"
            );
            let body = error_body(
                req,
                StatusCode::INTERNAL_SERVER_ERROR,
                reasons::INTERNAL_SERVER_ERROR,
                i18n::message(keys::INTERNAL_ERROR, lang),
            );
            respond(StatusCode::INTERNAL_SERVER_ERROR, body)
        }
    }
}

fn bad_request(req: &HttpRequest, err: &ValidationError, lang: Language) -> HttpResponse {
    let message = err.message(lang);
    tracing::warn!(request_id = ?req.request_id(), error = %err, "Validation failed");

    let mut body = error_body(req, StatusCode::BAD_REQUEST, reasons::BAD_REQUEST, message.clone());
    if let Some(field) = err.field() {
        body = body.with_validation_errors(vec![FieldError::new(field, message)]);
    }
    respond(StatusCode::BAD_REQUEST, body)
}

/// Error handler for bodies that are not valid JSON for the target type
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::warn!(request_id = ?req.request_id(), error = %err, "Malformed request body");

    let status = match err {
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            StatusCode::PAYLOAD_TOO_LARGE
        }
        _ => StatusCode::BAD_REQUEST,
    };
    let reason = status.canonical_reason().unwrap_or(reasons::BAD_REQUEST);
    let body = error_body(
        req,
        status,
        reason,
        i18n::message(keys::MALFORMED_BODY, req.language()),
    );
    InternalError::from_response(err, HttpResponse::build(status).json(body)).into()
}

/// Error handler for path segments that do not parse, e.g. `/api/contacts/abc`
pub fn path_error_handler(err: PathError, req: &HttpRequest) -> actix_web::Error {
    tracing::warn!(request_id = ?req.request_id(), error = %err, "Invalid path parameter");

    let body = error_body(
        req,
        StatusCode::BAD_REQUEST,
        reasons::BAD_REQUEST,
        i18n::message(keys::INVALID_PATH, req.language()),
    );
    InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
}

/// Fallback for unknown routes
pub async fn not_found(req: HttpRequest) -> HttpResponse {
    let body = error_body(
        &req,
        StatusCode::NOT_FOUND,
        reasons::NOT_FOUND,
        i18n::message(keys::NOT_FOUND, req.language()),
    );
    respond(StatusCode::NOT_FOUND, body)
}
