use contact_shared::AuditConfig;

/// Configuration for audit dispatch
#[derive(Debug, Clone, Default)]
pub struct AuditDispatchConfig {
    /// Log and swallow handler failures instead of failing the operation
    pub continue_on_failure: bool,
    /// Persist audit entries on a background task
    pub async_writes: bool,
}

impl From<&AuditConfig> for AuditDispatchConfig {
    fn from(config: &AuditConfig) -> Self {
        Self {
            continue_on_failure: config.continue_on_failure,
            async_writes: config.async_writes,
        }
    }
}
