use actix_web::{web, HttpServer};
use anyhow::Context;
use std::sync::Arc;

use contact_api::{config::init_tracing, create_app, AppState};
use contact_core::repositories::{
    AuditLogRepository, ContactRepository, InMemoryAuditLogRepository, InMemoryContactRepository,
};
use contact_infra::{load_dotenv, PgAuditLogRepository, PgContactRepository, StorageBackend};
use contact_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();

    let config = AppConfig::load().context("Failed to load configuration")?;
    init_tracing(&config.logging);

    tracing::info!(
        environment = %config.environment,
        database = %config.database.redacted_url(),
        "Starting contact book service"
    );

    let storage = StorageBackend::connect(&config.database)
        .await
        .context("Failed to open storage")?;

    match storage.clone() {
        StorageBackend::Memory => {
            run(
                config,
                storage,
                Arc::new(InMemoryContactRepository::new()),
                Arc::new(InMemoryAuditLogRepository::new()),
            )
            .await
        }
        StorageBackend::Postgres(pool) => {
            let contacts = Arc::new(PgContactRepository::new(pool.get_pool().clone()));
            let audit_logs = Arc::new(PgAuditLogRepository::new(pool.get_pool().clone()));
            run(config, storage, contacts, audit_logs).await
        }
    }
}

async fn run<C, A>(
    config: AppConfig,
    storage: StorageBackend,
    contacts: Arc<C>,
    audit_logs: Arc<A>,
) -> anyhow::Result<()>
where
    C: ContactRepository + 'static,
    A: AuditLogRepository + 'static,
{
    let state = web::Data::new(AppState::new(
        contacts,
        audit_logs,
        &config.audit,
        storage.clone(),
    ));

    let bind_address = config.server.bind_address();
    tracing::info!(
        address = %bind_address,
        storage = storage.name(),
        docs = %format!("{}/api-docs/openapi.json", config.server.public_url()),
        "Server listening"
    );

    let server_config = config.clone();
    let mut server = HttpServer::new(move || create_app(state.clone(), &server_config))
        .keep_alive(std::time::Duration::from_secs(config.server.keep_alive));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    let result = server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await;

    storage.close().await;
    tracing::info!("Server stopped");
    result.context("Server terminated with an error")
}
