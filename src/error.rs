//! Error types for the manifest projector

use std::fmt;

use thiserror::Error;

/// Result type alias using the projector's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// A single validation violation, tied to the attribute that caused it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Violation {
    /// Dotted attribute path, e.g. `spec.cluster.name`
    pub path: String,
    /// Human-readable reason
    pub reason: String,
}

impl Violation {
    pub fn new(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Violation {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.reason)
    }
}

/// Projector error types
#[derive(Error, Debug)]
pub enum Error {
    /// One or more configuration attributes failed validation.
    /// Every violation found is reported; none are dropped.
    #[error("validation failed: {}", format_violations(.0))]
    Validation(Vec<Violation>),

    /// YAML serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_yaml::Error),
}

impl Error {
    /// Create a validation error from collected violations
    pub fn validation(violations: Vec<Violation>) -> Self {
        Error::Validation(violations)
    }

    /// The violations behind a validation error, if any
    pub fn violations(&self) -> Option<&[Violation]> {
        match self {
            Error::Validation(v) => Some(v),
            Error::Serialization(_) => None,
        }
    }
}

fn format_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(Violation::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
