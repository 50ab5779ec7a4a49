//! Configuration model for the supported CloudNativePG kinds

mod backup;
mod metadata;
mod scheduled_backup;

pub use backup::*;
pub use metadata::*;
pub use scheduled_backup::*;

use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::projector::{project, ManifestKind};

/// User-supplied configuration for one manifest instance
#[derive(Clone, Debug, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResourceConfig<S> {
    /// Object metadata
    pub metadata: Metadata,

    /// Kind-specific specification
    pub spec: S,
}

/// A kind-tagged configuration document, for callers that route on the
/// manifest kind (e.g. the CLI reading user-supplied YAML)
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "kind")]
pub enum ConfigDocument {
    Backup(ResourceConfig<BackupSpec>),
    ScheduledBackup(ResourceConfig<ScheduledBackupSpec>),
}

impl ConfigDocument {
    /// The kind this document declares
    pub fn kind(&self) -> &'static str {
        match self {
            ConfigDocument::Backup(_) => BackupSpec::KIND,
            ConfigDocument::ScheduledBackup(_) => ScheduledBackupSpec::KIND,
        }
    }

    /// Render the document into manifest YAML
    pub fn project(&self) -> Result<String> {
        match self {
            ConfigDocument::Backup(config) => project(config),
            ConfigDocument::ScheduledBackup(config) => project(config),
        }
    }
}

/// Generate JSON Schemas for all supported configuration kinds
pub fn generate_schemas() -> Vec<String> {
    vec![
        serde_json::to_string_pretty(&schema_for!(ResourceConfig<BackupSpec>)).unwrap(),
        serde_json::to_string_pretty(&schema_for!(ResourceConfig<ScheduledBackupSpec>)).unwrap(),
    ]
}
