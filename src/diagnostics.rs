//! Structured diagnostics for release metadata and signature checks.
//!
//! Each diagnostic carries a stable code, a severity, and the field it
//! refers to. The `Display` form of an error is the human-readable message
//! the host prints, one per line.

use std::fmt;

use serde::Serialize;

/// Severity of a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// A rule violation that causes the check to fail.
    Error,
    /// A check that could not run for environmental reasons.
    Warning,
    /// A check that was skipped on purpose.
    Info,
}

/// A structured diagnostic message from validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Severity level.
    pub severity: Severity,
    /// Stable code (e.g., `"M001"`, `"G002"`).
    pub code: &'static str,
    /// Human-readable message.
    pub message: String,
    /// Field that caused the diagnostic (e.g., `"groupId"`, `"scm.url"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<&'static str>,
    /// Suggested fix (actionable text).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl Diagnostic {
    /// Create a new diagnostic with the given severity, code, and message.
    #[must_use]
    pub fn new(severity: Severity, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity,
            code,
            message: message.into(),
            field: None,
            suggestion: None,
        }
    }

    /// Shorthand for an error-level diagnostic.
    #[must_use]
    pub fn error(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, code, message)
    }

    /// Set the field that caused this diagnostic.
    #[must_use]
    pub fn with_field(mut self, field: &'static str) -> Self {
        self.field = Some(field);
        self
    }

    /// Set a suggested fix for this diagnostic.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    #[must_use]
    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }

    #[must_use]
    pub fn is_info(&self) -> bool {
        self.severity == Severity::Info
    }
}

/// Errors print bare; warnings and info carry a prefix.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.severity {
            Severity::Error => write!(f, "{}", self.message),
            Severity::Warning => write!(f, "warning: {}", self.message),
            Severity::Info => write!(f, "info: {}", self.message),
        }
    }
}

/// Returns `true` if any diagnostic is an error.
#[must_use]
pub fn has_errors(diags: &[Diagnostic]) -> bool {
    diags.iter().any(Diagnostic::is_error)
}

/// Messages of the error-level diagnostics, in order.
///
/// An empty result means the check passed.
#[must_use]
pub fn error_messages(diags: &[Diagnostic]) -> Vec<String> {
    diags
        .iter()
        .filter(|d| d.is_error())
        .map(|d| d.message.clone())
        .collect()
}

// ── Code constants ──────────────────────────────────────────────────────

// Coordinates (M001–M003)

/// `groupId` missing, blank, or not reverse-domain.
pub const M001: &str = "M001";
/// `artifactId` missing or blank.
pub const M002: &str = "M002";
/// `version` missing, blank, or a snapshot.
pub const M003: &str = "M003";

// Project information (M004–M006)

/// `name` missing or blank.
pub const M004: &str = "M004";
/// `description` missing or blank.
pub const M005: &str = "M005";
/// `url` missing or blank.
pub const M006: &str = "M006";

// Licenses and developers (M007–M011)

/// License entry without a license type.
pub const M007: &str = "M007";
/// Developer without a name.
pub const M008: &str = "M008";
/// Developer without an email.
pub const M009: &str = "M009";
/// Developer without an organization.
pub const M010: &str = "M010";
/// Developer without an organization URL.
pub const M011: &str = "M011";

// SCM (M012–M014)

/// SCM block without a read-only connection.
pub const M012: &str = "M012";
/// SCM block without a read/write connection.
pub const M013: &str = "M013";
/// SCM block without a web URL.
pub const M014: &str = "M014";

// Signatures (G001–G006)

/// Signing required but no signing configuration available.
pub const G001: &str = "G001";
/// Signature file not found for an artifact.
pub const G002: &str = "G002";
/// Signature file is empty.
pub const G003: &str = "G003";
/// Signature file lacks armored block markers.
pub const G004: &str = "G004";
/// Signature checks skipped (publishing or signing not active).
pub const G005: &str = "G005";
/// Descriptor file not found among candidate paths.
pub const G006: &str = "G006";
/// Signature file could not be read.
pub const G007: &str = "G007";
