//! Generic manifest projection
//!
//! One projection routine serves every kind: validate the configuration,
//! stamp the kind's fixed identity fields, serialize to YAML. The per-kind
//! field rules live on the kind's spec type through [`ManifestKind`].

use serde::Serialize;
use tracing::debug;

use crate::crd::{Metadata, ResourceConfig};
use crate::error::Result;
use crate::validation::Violations;

/// Per-kind descriptor: fixed identity fields plus the kind's field rules.
///
/// `API_VERSION` and `KIND` are associated constants, so they can never be
/// overridden by configuration.
pub trait ManifestKind: Serialize {
    /// Fixed `apiVersion` value, e.g. `postgresql.cnpg.io/v1`
    const API_VERSION: &'static str;

    /// Fixed `kind` value, e.g. `Backup`
    const KIND: &'static str;

    /// Append kind-specific violations; must not short-circuit
    fn validate(&self, violations: &mut Violations);
}

/// Rendered manifest record. Field order here is the key order of the
/// output document.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Manifest<'a, S> {
    api_version: &'static str,
    kind: &'static str,
    metadata: &'a Metadata,
    spec: &'a S,
}

/// Project a configuration into manifest YAML.
///
/// Collects every metadata and spec violation before failing; no YAML is
/// ever produced for an invalid configuration. The output carries exactly
/// the fields the caller set plus the two fixed identity fields; absent
/// optional fields are omitted at every nesting level.
pub fn project<S: ManifestKind>(config: &ResourceConfig<S>) -> Result<String> {
    let mut violations = Violations::new();
    config.metadata.validate(&mut violations);
    config.spec.validate(&mut violations);
    violations.into_result()?;

    debug!(kind = S::KIND, name = %config.metadata.name, "rendering manifest");

    let manifest = Manifest {
        api_version: S::API_VERSION,
        kind: S::KIND,
        metadata: &config.metadata,
        spec: &config.spec,
    };

    Ok(serde_yaml::to_string(&manifest)?)
}
