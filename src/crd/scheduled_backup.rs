//! ScheduledBackup resource configuration (postgresql.cnpg.io/v1)

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{ClusterRef, OnlineConfiguration, PluginConfiguration, BACKUP_METHODS, BACKUP_TARGETS};
use crate::projector::ManifestKind;
use crate::validation::{check_cron_schedule, check_dns1123_label, check_enum, Violations};

/// Allowed ownerReference targets for backups created from a schedule
pub const BACKUP_OWNER_REFERENCES: &[&str] = &["none", "self", "cluster"];

/// ScheduledBackup resource specification
#[derive(Clone, Debug, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledBackupSpec {
    /// Cluster the backups are taken from
    pub cluster: ClusterRef,

    /// Cron schedule in the extended format with a leading seconds field
    pub schedule: String,

    /// ownerReference to set on created Backup objects (none, self, cluster)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_owner_reference: Option<String>,

    /// Run the first backup immediately after the schedule is created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub immediate: Option<bool>,

    /// Suspend the schedule (useful for maintenance)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suspend: Option<bool>,

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

impl ManifestKind for ScheduledBackupSpec {
    const API_VERSION: &'static str = "postgresql.cnpg.io/v1";
    const KIND: &'static str = "ScheduledBackup";

    fn validate(&self, violations: &mut Violations) {
        check_dns1123_label("spec.cluster.name", &self.cluster.name, violations);
        check_cron_schedule("spec.schedule", &self.schedule, violations);

        if let Some(owner) = &self.backup_owner_reference {
            check_enum(
                "spec.backupOwnerReference",
                owner,
                BACKUP_OWNER_REFERENCES,
                violations,
            );
        }

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
