//! Kubernetes syntax validation
//!
//! Implements the name, label, and annotation rules that the Kubernetes API
//! server applies to object metadata, plus enum-membership and cron-schedule
//! checks used by the per-kind spec validators. All checks append to a
//! [`Violations`] accumulator so a caller sees every problem in one pass.

use std::collections::BTreeMap;
use std::str::FromStr;

use cron::Schedule;

use crate::error::{Error, Result, Violation};

/// Maximum length of an RFC-1123 label (object names, namespaces)
const DNS1123_LABEL_MAX: usize = 63;

/// Maximum length of a DNS subdomain (label key prefixes)
const DNS1123_SUBDOMAIN_MAX: usize = 253;

/// Maximum length of a label value or the name segment of a label key
const QUALIFIED_NAME_MAX: usize = 63;

/// Maximum combined byte size of all annotation keys and values
const ANNOTATIONS_MAX_BYTES: usize = 256 * 1024;

/// Accumulator for validation violations.
///
/// Checks never short-circuit: every violated constraint is recorded so the
/// caller can correct all of them at once.
#[derive(Debug, Default)]
pub struct Violations(Vec<Violation>);

impl Violations {
    pub fn new() -> Self {
        Violations(Vec::new())
    }

    /// Record a violation for the given attribute path
    pub fn push(&mut self, path: impl Into<String>, reason: impl Into<String>) {
        self.0.push(Violation::new(path, reason));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Convert into `Err(Error::Validation)` if anything was recorded
    pub fn into_result(self) -> Result<()> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(Error::validation(self.0))
        }
    }
}

/// Check that a value is a valid RFC-1123 label: at most 63 characters,
/// lowercase alphanumeric or '-', starting and ending alphanumeric.
pub fn check_dns1123_label(path: &str, value: &str, violations: &mut Violations) {
    if value.is_empty() {
        violations.push(path, "must not be empty");
        return;
    }
    if !is_dns1123_label(value) {
        violations.push(
            path,
            format!(
                "'{}' is not a valid RFC-1123 label: at most {} lowercase \
                 alphanumeric characters or '-', starting and ending with an \
                 alphanumeric character",
                value, DNS1123_LABEL_MAX
            ),
        );
    }
}

/// Check that a value belongs to a fixed set of allowed values
pub fn check_enum(path: &str, value: &str, allowed: &[&str], violations: &mut Violations) {
    if !allowed.contains(&value) {
        violations.push(
            path,
            format!("invalid value '{}': must be one of: {}", value, allowed.join(", ")),
        );
    }
}

/// Check label keys and values against Kubernetes label syntax
pub fn check_labels(path: &str, labels: &BTreeMap<String, String>, violations: &mut Violations) {
    for (key, value) in labels {
        if let Err(reason) = qualified_name_error(key) {
            violations.push(format!("{}[\"{}\"]", path, key), reason);
        }
        if let Err(reason) = label_value_error(value) {
            violations.push(format!("{}[\"{}\"]", path, key), reason);
        }
    }
}

/// Check annotation keys against Kubernetes annotation syntax and enforce
/// the aggregate size cap. Annotation values themselves are unrestricted.
pub fn check_annotations(
    path: &str,
    annotations: &BTreeMap<String, String>,
    violations: &mut Violations,
) {
    let mut total = 0usize;
    for (key, value) in annotations {
        if let Err(reason) = qualified_name_error(key) {
            violations.push(format!("{}[\"{}\"]", path, key), reason);
        }
        total += key.len() + value.len();
    }
    if total > ANNOTATIONS_MAX_BYTES {
        violations.push(
            path,
            format!(
                "total size of annotation keys and values is {} bytes, must not exceed {}",
                total, ANNOTATIONS_MAX_BYTES
            ),
        );
    }
}

/// Check a cron schedule expression (seconds-field extended syntax)
pub fn check_cron_schedule(path: &str, schedule: &str, violations: &mut Violations) {
    if schedule.is_empty() {
        violations.push(path, "must not be empty");
        return;
    }
    if let Err(e) = Schedule::from_str(schedule) {
        violations.push(path, format!("invalid cron schedule '{}': {}", schedule, e));
    }
}

/// True if the value is a valid RFC-1123 label
pub fn is_dns1123_label(value: &str) -> bool {
    !value.is_empty()
        && value.len() <= DNS1123_LABEL_MAX
        && value.starts_with(|c: char| c.is_ascii_lowercase() || c.is_ascii_digit())
        && value.ends_with(|c: char| c.is_ascii_lowercase() || c.is_ascii_digit())
        && value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// True if the value is a valid DNS subdomain (dot-separated RFC-1123 labels)
fn is_dns1123_subdomain(value: &str) -> bool {
    !value.is_empty()
        && value.len() <= DNS1123_SUBDOMAIN_MAX
        && value.split('.').all(is_dns1123_label)
}

/// Validate a label or annotation key: an optional DNS-subdomain prefix
/// followed by '/', then a name segment of at most 63 characters that starts
/// and ends alphanumeric with '-', '_', '.' allowed inside.
fn qualified_name_error(key: &str) -> std::result::Result<(), String> {
    let (prefix, name) = match key.split_once('/') {
        Some((p, n)) => (Some(p), n),
        None => (None, key),
    };
    if let Some(prefix) = prefix {
        if !is_dns1123_subdomain(prefix) {
            return Err(format!(
                "key prefix '{}' is not a valid DNS subdomain",
                prefix
            ));
        }
    }
    if name.contains('/') {
        return Err("key must contain at most one '/'".to_string());
    }
    if name.is_empty() {
        return Err("key name segment must not be empty".to_string());
    }
    if !is_name_segment(name) {
        return Err(format!(
            "key name segment '{}' must be at most {} characters, start and end \
             with an alphanumeric character, and contain only alphanumerics, \
             '-', '_' or '.'",
            name, QUALIFIED_NAME_MAX
        ));
    }
    Ok(())
}

/// Validate a label value: empty is allowed, otherwise the same character
/// rules as a key name segment.
fn label_value_error(value: &str) -> std::result::Result<(), String> {
    if value.is_empty() || is_name_segment(value) {
        Ok(())
    } else {
        Err(format!(
            "label value '{}' must be at most {} characters, start and end with \
             an alphanumeric character, and contain only alphanumerics, '-', \
             '_' or '.'",
            value, QUALIFIED_NAME_MAX
        ))
    }
}

fn is_name_segment(value: &str) -> bool {
    !value.is_empty()
        && value.len() <= QUALIFIED_NAME_MAX
        && value.starts_with(|c: char| c.is_ascii_alphanumeric())
        && value.ends_with(|c: char| c.is_ascii_alphanumeric())
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
}
