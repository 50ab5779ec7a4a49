//! Backup resource configuration (postgresql.cnpg.io/v1)

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::projector::ManifestKind;
use crate::validation::{check_dns1123_label, check_enum, Violations};

/// Allowed backup methods
pub const BACKUP_METHODS: &[&str] = &["barmanObjectStore", "volumeSnapshot", "plugin"];

/// Allowed backup target instances
pub const BACKUP_TARGETS: &[&str] = &["primary", "prefer-standby"];

/// Backup resource specification
#[derive(Clone, Debug, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BackupSpec {
    /// Cluster the backup is taken from
    pub cluster: ClusterRef,

    /// Backup method (barmanObjectStore, volumeSnapshot, plugin)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    /// Whether online/hot backups are allowed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub online: Option<bool>,

    /// Online backup behavior
    #[serde(skip_serializing_if = "Option::is_none")]
    pub online_configuration: Option<OnlineConfiguration>,

    /// Plugin-backed backup configuration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugin_configuration: Option<PluginConfiguration>,

    /// Instance the backup is taken on (primary, prefer-standby)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

/// Reference to a cluster by name
#[derive(Clone, Debug, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClusterRef {
    /// Cluster name (RFC-1123 label)
    pub name: String,
}

/// Online backup behavior
#[derive(Clone, Debug, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OnlineConfiguration {
    /// Request an immediate checkpoint when the backup starts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub immediate_checkpoint: Option<bool>,

    /// Wait for the WAL archive before completing the backup
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_for_archive: Option<bool>,
}

/// Plugin-backed backup configuration
#[derive(Clone, Debug, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PluginConfiguration {
    /// Plugin name
    pub name: String,

    /// Plugin parameters, passed through without shape validation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<BTreeMap<String, String>>,
}

impl PluginConfiguration {
    /// Validate the block, appending violations under `path`
    pub(crate) fn validate_at(&self, path: &str, violations: &mut Violations) {
        if self.name.is_empty() {
            violations.push(format!("{}.name", path), "must not be empty");
        }
    }
}

impl ManifestKind for BackupSpec {
    const API_VERSION: &'static str = "postgresql.cnpg.io/v1";
    const KIND: &'static str = "Backup";

    fn validate(&self, violations: &mut Violations) {
        check_dns1123_label("spec.cluster.name", &self.cluster.name, violations);

        if let Some(method) = &self.method {
            check_enum("spec.method", method, BACKUP_METHODS, violations);
        }

        if let Some(target) = &self.target {
            check_enum("spec.target", target, BACKUP_TARGETS, violations);
        }

        if let Some(plugin) = &self.plugin_configuration {
            plugin.validate_at("spec.pluginConfiguration", violations);
        }
    }
}
