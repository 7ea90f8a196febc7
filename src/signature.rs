//! Structural checks for detached armored signatures next to staged artifacts.
//!
//! Only the presence and shape of each `.asc` file is checked. The
//! signature itself is never verified cryptographically.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::diagnostics::{Diagnostic, Severity, G001, G002, G003, G004, G005, G006, G007};

/// Default suffix of a detached armored signature.
pub const SIGNATURE_SUFFIX: &str = ".asc";

/// Marker opening an armored signature block.
pub const BEGIN_MARKER: &str = "BEGIN PGP SIGNATURE";

/// Marker closing an armored signature block.
pub const END_MARKER: &str = "END PGP SIGNATURE";

/// Publication directories probed for the generated POM, relative to the project.
const DESCRIPTOR_DIRS: &[&str] = &["maven", "mavenJava", "release"];

/// File name of the generated POM inside a publication directory.
const DESCRIPTOR_FILE: &str = "pom-default.xml";

/// A file about to be published and the suffix of its signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    pub signature_suffix: String,
}

impl Artifact {
    /// An artifact signed with the default `.asc` suffix.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            signature_suffix: SIGNATURE_SUFFIX.to_string(),
        }
    }

    /// Override the expected signature suffix.
    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.signature_suffix = suffix.into();
        self
    }

    /// Display name used in messages.
    fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// Path of the primary companion: the file name plus the suffix.
    #[must_use]
    pub fn signature_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(&self.signature_suffix);
        PathBuf::from(name)
    }
}

/// Everything a release is about to publish.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtifactSet {
    /// Artifacts to check, in reporting order.
    pub artifacts: Vec<Artifact>,
    /// Candidate locations of the generated descriptor; the first existing one is checked.
    pub descriptor_candidates: Vec<PathBuf>,
}

impl ArtifactSet {
    #[must_use]
    pub fn with_artifact(mut self, artifact: Artifact) -> Self {
        self.artifacts.push(artifact);
        self
    }

    #[must_use]
    pub fn with_descriptor_candidates(mut self, candidates: Vec<PathBuf>) -> Self {
        self.descriptor_candidates = candidates;
        self
    }

    /// The first descriptor candidate that exists as a file.
    #[must_use]
    pub fn descriptor(&self) -> Option<&Path> {
        self.descriptor_candidates
            .iter()
            .map(PathBuf::as_path)
            .find(|p| p.is_file())
    }
}

/// Conventional locations of the generated POM under `project_dir`.
#[must_use]
pub fn default_descriptor_candidates(project_dir: &Path) -> Vec<PathBuf> {
    DESCRIPTOR_DIRS
        .iter()
        .map(|dir| {
            project_dir
                .join("build")
                .join("publications")
                .join(dir)
                .join(DESCRIPTOR_FILE)
        })
        .collect()
}

/// What the host knows about its publishing and signing configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SigningSetup {
    /// A publishing target (repository) is configured.
    pub publishing_configured: bool,
    /// Signing credentials/configuration are available.
    pub signing_configured: bool,
    /// Signatures are mandatory for this release.
    pub signing_required: bool,
}

/// Outcome of inspecting one artifact's signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignatureStatus {
    /// A non-empty file with both armor markers.
    Valid(PathBuf),
    /// No companion signature file.
    Missing,
    /// The companion exists but has zero length.
    Empty(PathBuf),
    /// The companion lacks the begin or end marker.
    InvalidFormat(PathBuf),
    /// The companion could not be read.
    Unreadable(PathBuf, String),
}

/// Locate the signature companion of `artifact`.
///
/// Prefers `<file name><suffix>`; otherwise takes the first file (sorted by
/// name) in the same directory named `<file stem>.<...>.asc`. A candidate
/// that is the companion of another existing file (`library-1.0.0.pom.asc`
/// next to `library-1.0.0.pom`) belongs to that file and is skipped.
#[must_use]
pub fn find_signature(artifact: &Artifact) -> Option<PathBuf> {
    let primary = artifact.signature_path();
    if primary.is_file() {
        return Some(primary);
    }

    let stem = artifact.path.file_stem()?.to_str()?;
    let dir = match artifact.path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let entries = fs::read_dir(dir).ok()?;

    let mut candidates: Vec<PathBuf> = entries
        .flatten()
        .map(|e| e.path())
        .filter(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| is_stem_companion(n, stem))
        })
        .filter(|p| p.is_file() && !signs_other_file(p, &artifact.path))
        .collect();
    candidates.sort();
    candidates.into_iter().next()
}

/// `name` is `<stem>.asc` or `<stem>.<more>.asc`.
fn is_stem_companion(name: &str, stem: &str) -> bool {
    name.strip_prefix(stem)
        .is_some_and(|rest| rest.starts_with('.') && rest.ends_with(SIGNATURE_SUFFIX))
}

/// `sig` is `<file>.asc` for an existing `<file>` other than `artifact`.
fn signs_other_file(sig: &Path, artifact: &Path) -> bool {
    let signed = sig.with_extension("");
    signed.file_name() != artifact.file_name() && signed.is_file()
}

/// Returns `true` if `content` holds both armored signature markers.
#[must_use]
pub fn is_armored_signature(content: &str) -> bool {
    content.contains(BEGIN_MARKER) && content.contains(END_MARKER)
}

/// Inspect the signature companion of `artifact`.
#[must_use]
pub fn inspect_signature(artifact: &Artifact) -> SignatureStatus {
    match find_signature(artifact) {
        Some(sig) => {
            let contents = fs::read(&sig);
            classify_signature(sig, contents)
        }
        None => SignatureStatus::Missing,
    }
}

/// Classify a located signature from the result of reading it.
#[must_use]
pub fn classify_signature(sig: PathBuf, contents: io::Result<Vec<u8>>) -> SignatureStatus {
    let bytes = match contents {
        Ok(b) => b,
        Err(e) => return SignatureStatus::Unreadable(sig, e.to_string()),
    };
    if bytes.is_empty() {
        return SignatureStatus::Empty(sig);
    }
    if is_armored_signature(&String::from_utf8_lossy(&bytes)) {
        SignatureStatus::Valid(sig)
    } else {
        SignatureStatus::InvalidFormat(sig)
    }
}

/// Diagnostic for one artifact, or `None` when its signature looks sound.
#[must_use]
pub fn check_artifact(artifact: &Artifact) -> Option<Diagnostic> {
    signature_diagnostic(artifact, inspect_signature(artifact))
}

/// Diagnostic for an already inspected signature, or `None` when it is valid.
#[must_use]
pub fn signature_diagnostic(artifact: &Artifact, status: SignatureStatus) -> Option<Diagnostic> {
    let name = artifact.display_name();
    debug!(artifact = %name, ?status, "inspected signature");
    match status {
        SignatureStatus::Valid(_) => None,
        SignatureStatus::Missing => Some(
            Diagnostic::error(G002, format!("Signature not found for artifact: {name}"))
                .with_field("signature")
                .with_suggestion(format!(
                    "Sign the artifact to produce {}",
                    artifact.signature_path().display()
                )),
        ),
        SignatureStatus::Empty(sig) => Some(
            Diagnostic::error(
                G003,
                format!("Signature file is empty for artifact {name}: {}", sig.display()),
            )
            .with_field("signature"),
        ),
        SignatureStatus::InvalidFormat(sig) => Some(
            Diagnostic::error(
                G004,
                format!(
                    "Invalid signature format for artifact {name}: {} is not an armored PGP signature",
                    sig.display()
                ),
            )
            .with_field("signature")
            .with_suggestion(format!(
                "Expected '-----{BEGIN_MARKER}-----' and '-----{END_MARKER}-----' markers"
            )),
        ),
        SignatureStatus::Unreadable(sig, reason) => Some(
            Diagnostic::error(
                G007,
                format!("Cannot read signature for artifact {name}: {}: {reason}", sig.display()),
            )
            .with_field("signature"),
        ),
    }
}

/// Run the signature-presence rules over `artifacts`.
///
/// Skips (with an `Info` diagnostic) when no publishing target is configured
/// or signing is not required. Signing that is required but not configured
/// is an error. A missing descriptor is a `Warning`.
#[must_use]
pub fn validate_signatures(artifacts: &ArtifactSet, signing: SigningSetup) -> Vec<Diagnostic> {
    if !signing.publishing_configured {
        info!("no publishing target configured; skipping signature checks");
        return vec![Diagnostic::new(
            Severity::Info,
            G005,
            "Signature checks skipped: no publishing target is configured.",
        )];
    }
    if signing.signing_required && !signing.signing_configured {
        return vec![Diagnostic::error(
            G001,
            "Cannot verify signatures: signing is required but no signing configuration was found.",
        )
        .with_field("signing")];
    }
    if !signing.signing_required {
        info!("signing not required; skipping signature checks");
        return vec![Diagnostic::new(
            Severity::Info,
            G005,
            "Signature checks skipped: signing is not required.",
        )];
    }

    let mut diags: Vec<Diagnostic> = artifacts
        .artifacts
        .iter()
        .filter_map(check_artifact)
        .collect();

    match artifacts.descriptor() {
        Some(descriptor) => diags.extend(check_artifact(&Artifact::new(descriptor))),
        None => {
            debug!(
                candidates = artifacts.descriptor_candidates.len(),
                "descriptor file not found; skipping its signature check"
            );
            diags.push(
                Diagnostic::new(
                    Severity::Warning,
                    G006,
                    "Descriptor file not found in any candidate path; its signature was not checked.",
                )
                .with_field("descriptor"),
            );
        }
    }

    diags
}
