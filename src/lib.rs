pub mod config;
pub mod diagnostics;
pub mod errors;
pub mod merge;
pub mod models;
pub mod pom;
pub mod signature;
pub mod validator;

// Re-export key types at crate root for convenience.
pub use config::{load_chain, load_defaults, parse_defaults, ConfigFormat};
pub use diagnostics::{error_messages, has_errors, Diagnostic, Severity};
pub use errors::{OrgDefaultsError, Result};
pub use merge::{merge, merge_chain};
pub use models::{
    Developer, IssueManagement, License, MailingList, Organization, OrganizationDefaults, Scm,
};
pub use pom::to_pom_xml;
pub use signature::{default_descriptor_candidates, Artifact, ArtifactSet, SigningSetup};
pub use validator::{validate, validate_metadata};

/// Validate and convert the outcome into a `Result`.
///
/// `Ok` carries the non-error diagnostics (skipped-check notes); `Err`
/// carries every error message at once.
pub fn check(
    pom: &OrganizationDefaults,
    artifacts: &ArtifactSet,
    signing: SigningSetup,
) -> Result<Vec<Diagnostic>> {
    let diags = validate(pom, artifacts, signing);
    let errors = error_messages(&diags);
    if errors.is_empty() {
        Ok(diags)
    } else {
        Err(OrgDefaultsError::Validation { errors })
    }
}
