//! Loading defaults records from configuration files.
//!
//! Three formats are accepted, chosen by file extension:
//! - YAML (`.yml`, `.yaml`, and anything unrecognized);
//! - JSON (`.json`);
//! - Java-style properties (`.properties`) with `pom.`-prefixed keys.

use std::path::Path;

use tracing::{debug, warn};

use crate::errors::{OrgDefaultsError, Result};
use crate::models::{Developer, IssueManagement, License, Organization, OrganizationDefaults, Scm};

/// Prefix shared by all recognized properties keys.
const PROPERTIES_PREFIX: &str = "pom.";

/// File format of a defaults file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
    Properties,
}

impl ConfigFormat {
    /// Infer the format from a path's extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::Json,
            Some("properties") => Self::Properties,
            _ => Self::Yaml,
        }
    }
}

/// Parse a defaults record from `content` in the given format.
pub fn parse_defaults(content: &str, format: ConfigFormat) -> Result<OrganizationDefaults> {
    if content.trim().is_empty() {
        return Ok(OrganizationDefaults::default());
    }
    match format {
        ConfigFormat::Yaml => Ok(serde_yaml_ng::from_str(content)?),
        ConfigFormat::Json => Ok(serde_json::from_str(content)?),
        ConfigFormat::Properties => parse_properties(content),
    }
}

/// Read and parse a defaults file.
pub fn load_defaults(path: &Path) -> Result<OrganizationDefaults> {
    let content = std::fs::read_to_string(path)?;
    let format = ConfigFormat::from_path(path);
    debug!(path = %path.display(), ?format, "loading defaults");
    parse_defaults(&content, format).map_err(|e| match e {
        OrgDefaultsError::Parse { message } => OrgDefaultsError::Parse {
            message: format!("{}: {message}", path.display()),
        },
        other => other,
    })
}

/// Load each file in order, for use with [`crate::merge_chain`].
pub fn load_chain(paths: &[impl AsRef<Path>]) -> Result<Vec<OrganizationDefaults>> {
    paths.iter().map(|p| load_defaults(p.as_ref())).collect()
}

/// Split a comma-separated list, dropping empty items.
fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join continuation lines and drop blanks and comments.
///
/// Yields each logical line with the 1-based number of its first physical line.
fn logical_lines(content: &str) -> Vec<(usize, String)> {
    let mut lines = Vec::new();
    let mut pending: Option<(usize, String)> = None;

    for (idx, raw) in content.lines().enumerate() {
        let (start, mut line) = match pending.take() {
            Some((start, mut acc)) => {
                acc.push_str(raw.trim_start());
                (start, acc)
            }
            None => {
                let line = raw.trim_start();
                if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                    continue;
                }
                (idx + 1, line.to_string())
            }
        };
        let trailing = line.chars().rev().take_while(|&c| c == '\\').count();
        if trailing % 2 == 1 {
            line.pop();
            pending = Some((start, line));
        } else {
            lines.push((start, line.trim_end().to_string()));
        }
    }
    if let Some((start, line)) = pending {
        lines.push((start, line.trim_end().to_string()));
    }
    lines
}

/// Byte offset of the first unescaped `=` or `:`.
fn find_separator(line: &str) -> Option<usize> {
    let mut escaped = false;
    for (i, c) in line.char_indices() {
        match c {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            '=' | ':' => return Some(i),
            _ => {}
        }
    }
    None
}

/// Resolve properties escapes: `\t`, `\n`, `\r`, `\f`, `\uXXXX`, and `\x` for any other `x`.
fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{0c}'),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                match u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32) {
                    Some(decoded) if hex.len() == 4 => out.push(decoded),
                    _ => {
                        out.push('u');
                        out.push_str(&hex);
                    }
                }
            }
            Some(other) => out.push(other),
            None => {}
        }
    }
    out
}

/// Parse `pom.*` properties into a record.
///
/// Scalars map one-to-one (`pom.groupId`, `pom.scm.url`, ...).
/// `pom.licenses` (or `pom.license`) and `pom.developers` take
/// comma-separated license types and developer names. Keys without the
/// `pom.` prefix are ignored. Escapes (`\:`, `\=`, `\uXXXX`, ...) and
/// backslash line continuations follow the Java properties format.
pub fn parse_properties(content: &str) -> Result<OrganizationDefaults> {
    let mut d = OrganizationDefaults::default();

    for (lineno, line) in logical_lines(content) {
        let Some(sep) = find_separator(&line) else {
            return Err(OrgDefaultsError::Parse {
                message: format!("line {lineno}: expected 'key=value', got '{line}'"),
            });
        };
        let key = unescape(line[..sep].trim());
        let value = unescape(line[sep + 1..].trim());

        let Some(key) = key.strip_prefix(PROPERTIES_PREFIX) else {
            continue;
        };

        match key {
            "groupId" => d.group_id = Some(value),
            "artifactId" => d.artifact_id = Some(value),
            "version" => d.version = Some(value),
            "name" => d.name = Some(value),
            "description" => d.description = Some(value),
            "url" => d.url = Some(value),
            "inceptionYear" => d.inception_year = Some(value),
            "license" | "licenses" => {
                d.licenses = split_list(&value).into_iter().map(License::new).collect();
            }
            "developers" => {
                d.developers = split_list(&value)
                    .into_iter()
                    .map(|name| Developer::builder().name(name).build())
                    .collect();
            }
            "organization.name" => {
                d.organization.get_or_insert_with(Organization::default).name = Some(value);
            }
            "organization.url" => {
                d.organization.get_or_insert_with(Organization::default).url = Some(value);
            }
            "issueManagement.system" => {
                d.issue_management
                    .get_or_insert_with(IssueManagement::default)
                    .system = Some(value);
            }
            "issueManagement.url" => {
                d.issue_management
                    .get_or_insert_with(IssueManagement::default)
                    .url = Some(value);
            }
            "scm.connection" => {
                d.scm.get_or_insert_with(Scm::default).connection = Some(value);
            }
            "scm.developerConnection" => {
                d.scm.get_or_insert_with(Scm::default).developer_connection = Some(value);
            }
            "scm.url" => {
                d.scm.get_or_insert_with(Scm::default).url = Some(value);
            }
            other => warn!(key = %other, line = lineno, "ignoring unknown pom property"),
        }
    }

    Ok(d)
}
