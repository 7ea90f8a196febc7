//! Rendering merged defaults as a Maven POM descriptor.

use std::fmt::Write;

use crate::models::{Developer, MailingList, OrganizationDefaults};

const POM_HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xsi:schemaLocation="http://maven.apache.org/POM/4.0.0 https://maven.apache.org/xsd/maven-4.0.0.xsd">
  <modelVersion>4.0.0</modelVersion>
"#;

/// Escape XML special characters: `& < > "`.
#[must_use]
pub fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Writes `<tag>value</tag>` at `depth` when `value` is set.
fn leaf(out: &mut String, depth: usize, tag: &str, value: Option<&str>) {
    if let Some(v) = value {
        let _ = writeln!(
            out,
            "{:indent$}<{tag}>{}</{tag}>",
            "",
            xml_escape(v),
            indent = depth * 2
        );
    }
}

fn open(out: &mut String, depth: usize, tag: &str) {
    let _ = writeln!(out, "{:indent$}<{tag}>", "", indent = depth * 2);
}

fn close(out: &mut String, depth: usize, tag: &str) {
    let _ = writeln!(out, "{:indent$}</{tag}>", "", indent = depth * 2);
}

fn developer(out: &mut String, dev: &Developer) {
    open(out, 2, "developer");
    leaf(out, 3, "id", dev.id.as_deref());
    leaf(out, 3, "name", dev.name.as_deref());
    leaf(out, 3, "email", dev.email.as_deref());
    leaf(out, 3, "url", dev.url.as_deref());
    leaf(out, 3, "organization", dev.organization.as_deref());
    leaf(out, 3, "organizationUrl", dev.organization_url.as_deref());
    leaf(out, 3, "timezone", dev.timezone.as_deref());
    close(out, 2, "developer");
}

fn mailing_list(out: &mut String, list: &MailingList) {
    open(out, 2, "mailingList");
    leaf(out, 3, "name", list.name.as_deref());
    leaf(out, 3, "subscribe", list.subscribe.as_deref());
    leaf(out, 3, "unsubscribe", list.unsubscribe.as_deref());
    leaf(out, 3, "post", list.post.as_deref());
    leaf(out, 3, "archive", list.archive.as_deref());
    close(out, 2, "mailingList");
}

/// Render `pom` as a POM `<project>` document.
///
/// Absent fields and empty lists are omitted. Element order follows the
/// Maven POM reference.
#[must_use]
pub fn to_pom_xml(pom: &OrganizationDefaults) -> String {
    let mut out = String::from(POM_HEADER);

    leaf(&mut out, 1, "groupId", pom.group_id.as_deref());
    leaf(&mut out, 1, "artifactId", pom.artifact_id.as_deref());
    leaf(&mut out, 1, "version", pom.version.as_deref());
    leaf(&mut out, 1, "name", pom.name.as_deref());
    leaf(&mut out, 1, "description", pom.description.as_deref());
    leaf(&mut out, 1, "url", pom.url.as_deref());
    leaf(&mut out, 1, "inceptionYear", pom.inception_year.as_deref());

    if let Some(org) = &pom.organization {
        open(&mut out, 1, "organization");
        leaf(&mut out, 2, "name", org.name.as_deref());
        leaf(&mut out, 2, "url", org.url.as_deref());
        close(&mut out, 1, "organization");
    }

    if !pom.licenses.is_empty() {
        open(&mut out, 1, "licenses");
        for license in &pom.licenses {
            open(&mut out, 2, "license");
            leaf(&mut out, 3, "name", license.license_type.as_deref());
            close(&mut out, 2, "license");
        }
        close(&mut out, 1, "licenses");
    }

    if !pom.developers.is_empty() {
        open(&mut out, 1, "developers");
        for dev in &pom.developers {
            developer(&mut out, dev);
        }
        close(&mut out, 1, "developers");
    }

    if !pom.mailing_lists.is_empty() {
        open(&mut out, 1, "mailingLists");
        for list in &pom.mailing_lists {
            mailing_list(&mut out, list);
        }
        close(&mut out, 1, "mailingLists");
    }

    if let Some(scm) = &pom.scm {
        open(&mut out, 1, "scm");
        leaf(&mut out, 2, "connection", scm.connection.as_deref());
        leaf(&mut out, 2, "developerConnection", scm.developer_connection.as_deref());
        leaf(&mut out, 2, "url", scm.url.as_deref());
        close(&mut out, 1, "scm");
    }

    if let Some(issues) = &pom.issue_management {
        open(&mut out, 1, "issueManagement");
        leaf(&mut out, 2, "system", issues.system.as_deref());
        leaf(&mut out, 2, "url", issues.url.as_deref());
        close(&mut out, 1, "issueManagement");
    }

    out.push_str("</project>\n");
    out
}
