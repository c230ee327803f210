//! Audit trail configuration

use serde::{Deserialize, Serialize};

/// Controls how audit entries are written alongside contact changes
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuditConfig {
    /// Log and ignore audit handler failures instead of failing the request.
    /// When false a failed audit write undoes the contact change.
    #[serde(default)]
    pub continue_on_failure: bool,

    /// Write audit entries on a background task
    #[serde(default)]
    pub async_writes: bool,
}

impl AuditConfig {
    /// Strict, synchronous auditing
    pub fn strict() -> Self {
        Self::default()
    }
}
