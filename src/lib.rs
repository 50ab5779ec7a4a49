//! CNPG Manifest Generator
//!
//! Renders CloudNativePG backup resources (`Backup`, `ScheduledBackup`) as
//! YAML manifests from validated configuration. Projection is pure and
//! stateless: no cluster communication, no persistence, one document per
//! call. Applying the rendered manifests is left to external tooling.

pub mod crd;
pub mod error;
pub mod projector;
pub mod validation;

pub use error::{Error, Result, Violation};
pub use projector::{project, ManifestKind};
