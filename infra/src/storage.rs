//! Storage backend selection.

use std::time::Instant;

use contact_shared::{DatabaseConfig, ServiceHealth, StorageKind};

use crate::database::DatabasePool;
use crate::InfrastructureError;

/// The store the service runs against
#[derive(Clone)]
pub enum StorageBackend {
    /// Embedded in-memory store; data lives as long as the process
    Memory,
    Postgres(DatabasePool),
}

impl StorageBackend {
    /// Open the store named by `config.url`, applying migrations to
    /// PostgreSQL when enabled
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, InfrastructureError> {
        match config.storage_kind() {
            StorageKind::Memory => {
                tracing::info!("Using embedded in-memory storage");
                Ok(StorageBackend::Memory)
            }
            StorageKind::Postgres => {
                let pool = DatabasePool::new(config.clone()).await?;
                if config.run_migrations {
                    pool.run_migrations().await?;
                }
                Ok(StorageBackend::Postgres(pool))
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            StorageBackend::Memory => "memory",
            StorageBackend::Postgres(_) => "postgres",
        }
    }

    /// Probe the store for the health endpoint
    pub async fn health(&self) -> ServiceHealth {
        match self {
            StorageBackend::Memory => ServiceHealth::healthy(0),
            StorageBackend::Postgres(pool) => {
                let started = Instant::now();
                match pool.health_check().await {
                    Ok(true) => ServiceHealth::healthy(started.elapsed().as_millis() as u64),
                    Ok(false) => ServiceHealth::unhealthy("Unexpected health check result"),
                    Err(e) => ServiceHealth::unhealthy(e.to_string()),
                }
            }
        }
    }

    /// Release connections on shutdown
    pub async fn close(&self) {
        if let StorageBackend::Postgres(pool) = self {
            pool.close().await;
        }
    }
}
