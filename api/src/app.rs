//! Application factory
//!
//! Builds the actix-web `App` with its middleware, routes and error
//! handlers. Both the binary and the integration tests go through
//! [`create_app`].

use actix_web::{middleware::Logger, web, App, HttpResponse};
use serde_json::Value;

use contact_core::repositories::{AuditLogRepository, ContactRepository};
use contact_shared::AppConfig;

use crate::handlers::{json_error_handler, not_found, path_error_handler};
use crate::middleware::{cors::create_cors, request_context::RequestContext};
use crate::openapi::api_document;
use crate::routes::audit_logs::{
    get_all_audit_logs, get_audit_logs_by_contact, get_audit_logs_by_operation,
};
use crate::routes::contacts::{
    create_contact, delete_contact, get_all_contacts, get_contact, update_contact,
};
use crate::routes::health::health_check;
use crate::routes::AppState;

/// Path of the OpenAPI document
pub const API_DOCS_PATH: &str = "/api-docs/openapi.json";

/// Create and configure the application with all dependencies
pub fn create_app<C, A>(
    app_state: web::Data<AppState<C, A>>,
    config: &AppConfig,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    C: ContactRepository + 'static,
    A: AuditLogRepository + 'static,
{
    let cors = create_cors(&config.cors, config.environment);
    let api_doc = web::Data::new(api_document(&config.server.public_url()));

    let json_config = web::JsonConfig::default()
        .limit(config.server.max_payload_size)
        .error_handler(json_error_handler);
    let path_config = web::PathConfig::default().error_handler(path_error_handler);

    App::new()
        .app_data(app_state)
        .app_data(api_doc)
        .app_data(json_config)
        .app_data(path_config)
        // Registration order is the reverse of execution order: the request
        // context runs first so that every log line carries the request id.
        .wrap(Logger::default())
        .wrap(cors)
        .wrap(RequestContext)
        .route("/health", web::get().to(health_check::<C, A>))
        .route(API_DOCS_PATH, web::get().to(openapi_json))
        .service(
            web::scope("/api")
                .service(
                    web::scope("/contacts")
                        .route("", web::post().to(create_contact::<C, A>))
                        .route("", web::get().to(get_all_contacts::<C, A>))
                        .route("/{id}", web::get().to(get_contact::<C, A>))
                        .route("/{id}", web::put().to(update_contact::<C, A>))
                        .route("/{id}", web::delete().to(delete_contact::<C, A>)),
                )
                .service(
                    web::scope("/audit-logs")
                        .route("", web::get().to(get_all_audit_logs::<C, A>))
                        .route(
                            "/contact/{contact_id}",
                            web::get().to(get_audit_logs_by_contact::<C, A>),
                        )
                        .route(
                            "/operation/{operation_type}",
                            web::get().to(get_audit_logs_by_operation::<C, A>),
                        ),
                ),
        )
        .default_service(web::route().to(not_found))
}

async fn openapi_json(doc: web::Data<Value>) -> HttpResponse {
    HttpResponse::Ok().json(doc.get_ref())
}
