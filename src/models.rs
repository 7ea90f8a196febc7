use serde::{Deserialize, Serialize};

/// Organization-wide (or project-specific) POM metadata.
///
/// Every field is optional. Whether a field is *required* is decided by the
/// validator, never by this type. Lists use empty as "not supplied".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrganizationDefaults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifact_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inception_year: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub licenses: Vec<License>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<Organization>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub developers: Vec<Developer>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_management: Option<IssueManagement>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub mailing_lists: Vec<MailingList>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub scm: Option<Scm>,
}

impl OrganizationDefaults {
    /// Start building a record field by field.
    #[must_use]
    pub fn builder() -> OrganizationDefaultsBuilder {
        OrganizationDefaultsBuilder::default()
    }
}

/// A nested record that can be present while carrying no data.
///
/// The merge engine treats such a record as "not supplied".
pub trait NestedRecord {
    /// Returns `true` if at least one sub-field is set.
    fn has_data(&self) -> bool;
}

/// License entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct License {
    /// License identifier or name (e.g. `"MIT"`, `"Apache-2.0"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_type: Option<String>,
}

impl License {
    #[must_use]
    pub fn new(license_type: impl Into<String>) -> Self {
        Self {
            license_type: Some(license_type.into()),
        }
    }
}

/// Organization owning the project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Organization {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Organization {
    #[must_use]
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            url: Some(url.into()),
        }
    }
}

impl NestedRecord for Organization {
    fn has_data(&self) -> bool {
        self.name.is_some() || self.url.is_some()
    }
}

/// Developer entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Developer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

impl Developer {
    #[must_use]
    pub fn builder() -> DeveloperBuilder {
        DeveloperBuilder::default()
    }
}

/// Issue tracker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IssueManagement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl IssueManagement {
    #[must_use]
    pub fn new(system: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            system: Some(system.into()),
            url: Some(url.into()),
        }
    }
}

impl NestedRecord for IssueManagement {
    fn has_data(&self) -> bool {
        self.system.is_some() || self.url.is_some()
    }
}

/// Mailing list entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MailingList {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscribe: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unsubscribe: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archive: Option<String>,
}

impl MailingList {
    #[must_use]
    pub fn builder() -> MailingListBuilder {
        MailingListBuilder::default()
    }
}

/// Source control coordinates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Scm {
    /// Read-only connection (e.g. `scm:git:https://...`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection: Option<String>,
    /// Read/write connection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub developer_connection: Option<String>,
    /// Web interface URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Scm {
    #[must_use]
    pub fn new(
        connection: impl Into<String>,
        developer_connection: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            connection: Some(connection.into()),
            developer_connection: Some(developer_connection.into()),
            url: Some(url.into()),
        }
    }
}

impl NestedRecord for Scm {
    fn has_data(&self) -> bool {
        self.connection.is_some() || self.developer_connection.is_some() || self.url.is_some()
    }
}

// ── Builders ────────────────────────────────────────────────────────────

/// Generates a consuming `fn field(self, value) -> Self` setter per field.
macro_rules! setters {
    ($($field:ident),* $(,)?) => {
        $(
            #[must_use]
            pub fn $field(mut self, value: impl Into<String>) -> Self {
                self.inner.$field = Some(value.into());
                self
            }
        )*
    };
}

/// Builder for [`Developer`].
#[derive(Debug, Default)]
pub struct DeveloperBuilder {
    inner: Developer,
}

impl DeveloperBuilder {
    setters!(id, name, email, url, organization, organization_url, timezone);

    #[must_use]
    pub fn build(self) -> Developer {
        self.inner
    }
}

/// Builder for [`MailingList`].
#[derive(Debug, Default)]
pub struct MailingListBuilder {
    inner: MailingList,
}

impl MailingListBuilder {
    setters!(name, subscribe, unsubscribe, post, archive);

    #[must_use]
    pub fn build(self) -> MailingList {
        self.inner
    }
}

/// Builder for [`OrganizationDefaults`].
///
/// List entries are kept in the order they are added.
#[derive(Debug, Default)]
pub struct OrganizationDefaultsBuilder {
    inner: OrganizationDefaults,
}

impl OrganizationDefaultsBuilder {
    setters!(
        group_id,
        artifact_id,
        version,
        name,
        description,
        url,
        inception_year
    );

    #[must_use]
    pub fn license(mut self, license: License) -> Self {
        self.inner.licenses.push(license);
        self
    }

    #[must_use]
    pub fn developer(mut self, developer: Developer) -> Self {
        self.inner.developers.push(developer);
        self
    }

    #[must_use]
    pub fn mailing_list(mut self, list: MailingList) -> Self {
        self.inner.mailing_lists.push(list);
        self
    }

    #[must_use]
    pub fn organization(mut self, organization: Organization) -> Self {
        self.inner.organization = Some(organization);
        self
    }

    #[must_use]
    pub fn issue_management(mut self, issue_management: IssueManagement) -> Self {
        self.inner.issue_management = Some(issue_management);
        self
    }

    #[must_use]
    pub fn scm(mut self, scm: Scm) -> Self {
        self.inner.scm = Some(scm);
        self
    }

    #[must_use]
    pub fn build(self) -> OrganizationDefaults {
        self.inner
    }
}
