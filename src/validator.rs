use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::diagnostics::{
    Diagnostic, M001, M002, M003, M004, M005, M006, M007, M008, M009, M010, M011, M012, M013,
    M014,
};
use crate::models::{Developer, OrganizationDefaults, Scm};
use crate::signature::{validate_signatures, ArtifactSet, SigningSetup};

/// Reverse-domain group id: lowercase segments, at least two components.
static GROUP_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z]+(\.[a-z][a-z0-9]*)+$").expect("groupId regex must compile")
});

/// Suffix marking a pre-release version that must not be published.
const SNAPSHOT_SUFFIX: &str = "-SNAPSHOT";

/// Returns `true` if the value is absent, empty, or whitespace only.
fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|s| s.trim().is_empty())
}

/// Returns `true` if `group_id` is a valid reverse-domain group id.
#[must_use]
pub fn is_valid_group_id(group_id: &str) -> bool {
    GROUP_ID_RE.is_match(group_id)
}

/// Returns `true` if `version` may be published as a release.
#[must_use]
pub fn is_release_version(version: &str) -> bool {
    !version.trim().is_empty() && !version.ends_with(SNAPSHOT_SUFFIX)
}

fn validate_coordinates(pom: &OrganizationDefaults) -> Vec<Diagnostic> {
    let mut diags = Vec::new();

    if !pom.group_id.as_deref().is_some_and(is_valid_group_id) {
        diags.push(
            Diagnostic::error(
                M001,
                "Invalid groupId: Must be in reverse domain name format or not be null or blank.",
            )
            .with_field("groupId")
            .with_suggestion("Use a reverse domain name, e.g. 'io.github.example'"),
        );
    }

    if is_blank(pom.artifact_id.as_deref()) {
        diags.push(
            Diagnostic::error(M002, "Invalid artifactId: Must be a unique component name.")
                .with_field("artifactId"),
        );
    }

    if !pom.version.as_deref().is_some_and(is_release_version) {
        let mut d = Diagnostic::error(
            M003,
            "Invalid version: The version must not be null, blank, or end with '-SNAPSHOT'.",
        )
        .with_field("version");
        if let Some(release) = pom
            .version
            .as_deref()
            .and_then(|v| v.strip_suffix(SNAPSHOT_SUFFIX))
        {
            d = d.with_suggestion(format!("Release as: '{release}'"));
        }
        diags.push(d);
    }

    diags
}

fn validate_project_info(pom: &OrganizationDefaults) -> Vec<Diagnostic> {
    let checks: [(Option<&str>, &'static str, &'static str, &'static str); 3] = [
        (
            pom.name.as_deref(),
            M004,
            "name",
            "Invalid name: Project name is required.",
        ),
        (
            pom.description.as_deref(),
            M005,
            "description",
            "Invalid description: Project description is required.",
        ),
        (
            pom.url.as_deref(),
            M006,
            "url",
            "Invalid url: Project URL is required.",
        ),
    ];

    checks
        .into_iter()
        .filter(|(value, ..)| is_blank(*value))
        .map(|(_, code, field, message)| Diagnostic::error(code, message).with_field(field))
        .collect()
}

fn validate_licenses(pom: &OrganizationDefaults) -> Vec<Diagnostic> {
    pom.licenses
        .iter()
        .enumerate()
        .filter(|(_, l)| is_blank(l.license_type.as_deref()))
        .map(|(i, _)| {
            Diagnostic::error(M007, "Invalid license: License name is required.")
                .with_field("licenses")
                .with_suggestion(format!("Set licenseType on license #{}", i + 1))
        })
        .collect()
}

/// Human-readable handle for a developer entry in suggestions.
fn developer_label(index: usize, dev: &Developer) -> String {
    match dev.id.as_deref().or(dev.name.as_deref()) {
        Some(id) if !id.trim().is_empty() => format!("developer #{} '{id}'", index + 1),
        _ => format!("developer #{}", index + 1),
    }
}

fn validate_developer(index: usize, dev: &Developer) -> Vec<Diagnostic> {
    let checks: [(Option<&str>, &'static str, &'static str, &'static str); 4] = [
        (
            dev.name.as_deref(),
            M008,
            "name",
            "Invalid developer: Developer name is required.",
        ),
        (
            dev.email.as_deref(),
            M009,
            "email",
            "Invalid developer: Developer email is required.",
        ),
        (
            dev.organization.as_deref(),
            M010,
            "organization",
            "Invalid developer: Organization is required.",
        ),
        (
            dev.organization_url.as_deref(),
            M011,
            "organizationUrl",
            "Invalid developer: Organization URL is required.",
        ),
    ];

    let label = developer_label(index, dev);
    checks
        .into_iter()
        .filter(|(value, ..)| is_blank(*value))
        .map(|(_, code, field, message)| {
            Diagnostic::error(code, message)
                .with_field("developers")
                .with_suggestion(format!("Set {field} for {label}"))
        })
        .collect()
}

fn validate_scm(scm: &Scm) -> Vec<Diagnostic> {
    let mut diags = Vec::new();
    if is_blank(scm.connection.as_deref()) {
        diags.push(
            Diagnostic::error(M012, "Invalid SCM: Read-only connection is required.")
                .with_field("scm.connection"),
        );
    }
    if is_blank(scm.developer_connection.as_deref()) {
        diags.push(
            Diagnostic::error(M013, "Invalid SCM: Read/write connection is required.")
                .with_field("scm.developerConnection"),
        );
    }
    if is_blank(scm.url.as_deref()) {
        diags.push(
            Diagnostic::error(M014, "Invalid SCM: Web interface URL is required.")
                .with_field("scm.url"),
        );
    }
    diags
}

/// Check merged metadata against Maven Central's publishing requirements.
///
/// Every rule runs; nothing short-circuits. An empty license or developer
/// list, or an absent `scm` block, is not an error: only entries that are
/// present must be complete.
///
/// Returns a list of diagnostics (empty = valid).
#[must_use]
pub fn validate_metadata(pom: &OrganizationDefaults) -> Vec<Diagnostic> {
    let mut diags = validate_coordinates(pom);
    diags.extend(validate_project_info(pom));
    diags.extend(validate_licenses(pom));
    for (i, dev) in pom.developers.iter().enumerate() {
        diags.extend(validate_developer(i, dev));
    }
    if let Some(scm) = &pom.scm {
        diags.extend(validate_scm(scm));
    }
    debug!(count = diags.len(), "metadata validation finished");
    diags
}

/// Validate merged metadata and the staged release artifacts.
///
/// Metadata diagnostics come first, followed by signature diagnostics.
/// Skipped signature checks show up as `Info`/`Warning` diagnostics; the
/// check passes when no `Error` is present.
#[must_use]
pub fn validate(
    pom: &OrganizationDefaults,
    artifacts: &ArtifactSet,
    signing: SigningSetup,
) -> Vec<Diagnostic> {
    let mut diags = validate_metadata(pom);
    diags.extend(validate_signatures(artifacts, signing));
    diags
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{error_messages, has_errors};
    use crate::models::License;

    fn passing_developer() -> Developer {
        Developer::builder()
            .id("dev1")
            .name("Developer1")
            .email("dev1@example.com")
            .timezone("UTC")
            .organization("YongGoose")
            .organization_url("https://yonggoose.github.io")
            .build()
    }

    fn passing_pom() -> OrganizationDefaults {
        OrganizationDefaults::builder()
            .group_id("io.github.yonggoose")
            .artifact_id("organization-defaults")
            .version("1.0.0")
            .name("Test Organization")
            .description("Organization defaults plugin test")
            .url("https://example.org")
            .license(License::new("MIT"))
            .developer(passing_developer())
            .scm(Scm::new(
                "scm:git:git@github.com:YongGoose/organization-defaults.git",
                "scm:git:git@github.com:YongGoose/organization-defaults.git",
                "https://github.com/YongGoose/organization-defaults",
            ))
            .build()
    }

    fn codes(diags: &[Diagnostic]) -> Vec<&'static str> {
        diags.iter().map(|d| d.code).collect()
    }

    #[test]
    fn complete_pom_passes() {
        let diags = validate_metadata(&passing_pom());
        assert!(diags.is_empty(), "expected no diagnostics, got: {diags:?}");
    }

    #[test]
    fn end_to_end_pass_with_signing_not_required() {
        let signing = SigningSetup {
            publishing_configured: true,
            signing_configured: true,
            signing_required: false,
        };
        let diags = validate(&passing_pom(), &ArtifactSet::default(), signing);
        assert!(error_messages(&diags).is_empty(), "got: {diags:?}");
    }

    #[test]
    fn end_to_end_fail_reports_exact_errors() {
        let mut pom = passing_pom();
        pom.name = None;
        pom.description = None;
        pom.url = None;
        pom.scm = None;
        pom.developers = vec![Developer::builder()
            .id("dev1")
            .name("Developer1")
            .email("dev1@example.com")
            .timezone("UTC")
            .build()];
        let diags = validate_metadata(&pom);
        assert_eq!(codes(&diags), vec![M004, M005, M006, M010, M011]);
        assert_eq!(
            error_messages(&diags),
            vec![
                "Invalid name: Project name is required.",
                "Invalid description: Project description is required.",
                "Invalid url: Project URL is required.",
                "Invalid developer: Organization is required.",
                "Invalid developer: Organization URL is required.",
            ]
        );
    }

    #[test]
    fn group_id_accepts_reverse_domain() {
        assert!(is_valid_group_id("io.github.example"));
        assert!(is_valid_group_id("com.example2"));
    }

    #[test]
    fn group_id_rejects_invalid_values() {
        for bad in ["Example", "", "a", "invalidGroup", "io.2github", "io..github", " io.github"] {
            let mut pom = passing_pom();
            pom.group_id = Some(bad.to_string());
            let diags = validate_metadata(&pom);
            assert_eq!(codes(&diags), vec![M001], "groupId {bad:?}");
        }
        let mut pom = passing_pom();
        pom.group_id = None;
        assert_eq!(codes(&validate_metadata(&pom)), vec![M001]);
    }

    #[test]
    fn snapshot_version_rejected_with_suggestion() {
        let mut pom = passing_pom();
        pom.version = Some("1.0.0-SNAPSHOT".to_string());
        let diags = validate_metadata(&pom);
        assert_eq!(codes(&diags), vec![M003]);
        assert!(diags[0].message.contains("Invalid version"));
        assert_eq!(diags[0].suggestion.as_deref(), Some("Release as: '1.0.0'"));
    }

    #[test]
    fn snapshot_suffix_is_case_sensitive() {
        assert!(is_release_version("1.0.0-snapshot"));
        assert!(!is_release_version("1.0.0-SNAPSHOT"));
        assert!(!is_release_version("  "));
    }

    #[test]
    fn missing_and_blank_version_rejected() {
        let mut pom = passing_pom();
        pom.version = None;
        assert_eq!(codes(&validate_metadata(&pom)), vec![M003]);
        pom.version = Some(" ".to_string());
        assert_eq!(codes(&validate_metadata(&pom)), vec![M003]);
    }

    #[test]
    fn blank_artifact_id_rejected() {
        let mut pom = passing_pom();
        pom.artifact_id = Some("\t".to_string());
        assert_eq!(codes(&validate_metadata(&pom)), vec![M002]);
    }

    #[test]
    fn whitespace_name_is_blank() {
        let mut pom = passing_pom();
        pom.name = Some("   ".to_string());
        assert_eq!(codes(&validate_metadata(&pom)), vec![M004]);
    }

    #[test]
    fn each_blank_license_reported() {
        let mut pom = passing_pom();
        pom.licenses = vec![License::default(), License::new("MIT"), License::new("")];
        let diags = validate_metadata(&pom);
        assert_eq!(codes(&diags), vec![M007, M007]);
        assert_eq!(diags[1].suggestion.as_deref(), Some("Set licenseType on license #3"));
    }

    #[test]
    fn empty_lists_are_not_errors() {
        let mut pom = passing_pom();
        pom.licenses.clear();
        pom.developers.clear();
        assert!(validate_metadata(&pom).is_empty());
    }

    #[test]
    fn each_missing_developer_field_reported() {
        let mut pom = passing_pom();
        pom.developers = vec![Developer::default(), passing_developer(), Developer::default()];
        let diags = validate_metadata(&pom);
        assert_eq!(
            codes(&diags),
            vec![M008, M009, M010, M011, M008, M009, M010, M011]
        );
        assert_eq!(
            diags[4].suggestion.as_deref(),
            Some("Set name for developer #3")
        );
    }

    #[test]
    fn developer_label_prefers_id() {
        let dev = Developer::builder().id("dev9").name("Nine").build();
        assert_eq!(developer_label(0, &dev), "developer #1 'dev9'");
    }

    #[test]
    fn present_scm_must_be_complete() {
        let mut pom = passing_pom();
        pom.scm = Some(Scm::default());
        assert_eq!(codes(&validate_metadata(&pom)), vec![M012, M013, M014]);
    }

    #[test]
    fn absent_scm_is_not_an_error() {
        let mut pom = passing_pom();
        pom.scm = None;
        assert!(validate_metadata(&pom).is_empty());
    }

    #[test]
    fn empty_record_collects_every_required_field() {
        let diags = validate_metadata(&OrganizationDefaults::default());
        assert_eq!(codes(&diags), vec![M001, M002, M003, M004, M005, M006]);
        assert!(has_errors(&diags));
    }

    #[test]
    fn validation_is_deterministic() {
        let pom = OrganizationDefaults::default();
        assert_eq!(validate_metadata(&pom), validate_metadata(&pom));
    }
}
