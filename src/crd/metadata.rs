//! Object metadata configuration shared by every kind

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::validation::{check_annotations, check_dns1123_label, check_labels, Violations};

/// Object metadata accepted for every manifest kind
#[derive(Clone, Debug, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// Object name (RFC-1123 label)
    pub name: String,

    /// Namespace the object belongs to (RFC-1123 label)
    pub namespace: String,

    /// Labels attached to the object
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<BTreeMap<String, String>>,

    /// Annotations attached to the object
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<BTreeMap<String, String>>,
}

impl Metadata {
    /// Validate against Kubernetes metadata syntax rules
    pub fn validate(&self, violations: &mut Violations) {
        check_dns1123_label("metadata.name", &self.name, violations);
        check_dns1123_label("metadata.namespace", &self.namespace, violations);

        if let Some(labels) = &self.labels {
            check_labels("metadata.labels", labels, violations);
        }

        if let Some(annotations) = &self.annotations {
            check_annotations("metadata.annotations", annotations, violations);
        }
    }
}
