//! Override merge of organization defaults with project metadata.
//!
//! The rule is "override wins when present" applied per field:
//! - scalars: `Some` in the override wins, including `Some("")`;
//! - lists: a non-empty override replaces the base list wholesale;
//! - nested records: the override wins only if it carries any data.

use tracing::debug;

use crate::models::{NestedRecord, OrganizationDefaults};

/// Merge `base` with an optional `override_`, producing a new record.
///
/// Neither input is modified. `merge(base, None)` is `base.clone()`.
#[must_use]
pub fn merge(
    base: &OrganizationDefaults,
    override_: Option<&OrganizationDefaults>,
) -> OrganizationDefaults {
    let Some(over) = override_ else {
        return base.clone();
    };

    OrganizationDefaults {
        group_id: scalar(&base.group_id, &over.group_id),
        artifact_id: scalar(&base.artifact_id, &over.artifact_id),
        version: scalar(&base.version, &over.version),
        name: scalar(&base.name, &over.name),
        description: scalar(&base.description, &over.description),
        url: scalar(&base.url, &over.url),
        inception_year: scalar(&base.inception_year, &over.inception_year),
        licenses: list(&base.licenses, &over.licenses),
        organization: nested(&base.organization, &over.organization),
        developers: list(&base.developers, &over.developers),
        issue_management: nested(&base.issue_management, &over.issue_management),
        mailing_lists: list(&base.mailing_lists, &over.mailing_lists),
        scm: nested(&base.scm, &over.scm),
    }
}

/// Fold [`merge`] left over a chain of records, e.g. org → project → module.
///
/// Returns `None` for an empty chain.
#[must_use]
pub fn merge_chain<'a, I>(chain: I) -> Option<OrganizationDefaults>
where
    I: IntoIterator<Item = &'a OrganizationDefaults>,
{
    let mut iter = chain.into_iter();
    let first = iter.next()?.clone();
    let merged = iter.fold(first, |acc, next| merge(&acc, Some(next)));
    debug!(
        group_id = merged.group_id.as_deref().unwrap_or("<none>"),
        "merged defaults chain"
    );
    Some(merged)
}

impl OrganizationDefaults {
    /// Method form of [`merge`]: `self` is the base.
    #[must_use]
    pub fn merge(&self, override_: Option<&Self>) -> Self {
        merge(self, override_)
    }
}

fn scalar(base: &Option<String>, over: &Option<String>) -> Option<String> {
    over.as_ref().or(base.as_ref()).cloned()
}

fn list<T: Clone>(base: &[T], over: &[T]) -> Vec<T> {
    if over.is_empty() {
        base.to_vec()
    } else {
        over.to_vec()
    }
}

fn nested<T: NestedRecord + Clone>(base: &Option<T>, over: &Option<T>) -> Option<T> {
    match over {
        Some(record) if record.has_data() => Some(record.clone()),
        _ => base.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Developer, IssueManagement, License, MailingList, Organization, Scm};

    fn org_base() -> OrganizationDefaults {
        OrganizationDefaults::builder()
            .group_id("io.github.yonggoose")
            .artifact_id("organization-defaults")
            .version("1.0.0")
            .name("Org")
            .description("Org description")
            .url("https://example.org")
            .inception_year("2024")
            .license(License::new("MIT"))
            .organization(Organization::new("YongGoose", "https://yonggoose.github.io"))
            .developer(Developer::builder().id("base-dev").build())
            .issue_management(IssueManagement::new("GitHub", "https://github.com/x/issues"))
            .mailing_list(MailingList::builder().name("base-list").build())
            .scm(Scm::new("c", "d", "u"))
            .build()
    }

    #[test]
    fn absent_override_is_identity() {
        let base = org_base();
        assert_eq!(merge(&base, None), base);
    }

    #[test]
    fn empty_override_is_identity() {
        let base = org_base();
        assert_eq!(merge(&base, Some(&OrganizationDefaults::default())), base);
    }

    #[test]
    fn scalar_override_wins() {
        let base = org_base();
        let over = OrganizationDefaults::builder()
            .name("Project")
            .version("2.0.0")
            .build();
        let merged = merge(&base, Some(&over));
        assert_eq!(merged.name.as_deref(), Some("Project"));
        assert_eq!(merged.version.as_deref(), Some("2.0.0"));
        assert_eq!(merged.description, base.description);
        assert_eq!(merged.group_id, base.group_id);
    }

    #[test]
    fn empty_string_override_counts_as_present() {
        let base = org_base();
        let over = OrganizationDefaults::builder().url("").build();
        let merged = merge(&base, Some(&over));
        assert_eq!(merged.url.as_deref(), Some(""));
    }

    #[test]
    fn both_absent_stays_absent() {
        let merged = merge(
            &OrganizationDefaults::default(),
            Some(&OrganizationDefaults::default()),
        );
        assert!(merged.name.is_none());
        assert!(merged.scm.is_none());
        assert!(merged.licenses.is_empty());
    }

    #[test]
    fn non_empty_list_replaces_not_appends() {
        let base = org_base();
        let over = OrganizationDefaults::builder()
            .license(License::new("Apache-2.0"))
            .developer(Developer::builder().id("p1").build())
            .developer(Developer::builder().id("p2").build())
            .mailing_list(MailingList::builder().name("project-list").build())
            .build();
        let merged = merge(&base, Some(&over));
        assert_eq!(merged.licenses, vec![License::new("Apache-2.0")]);
        assert_eq!(merged.developers, over.developers);
        assert_eq!(merged.mailing_lists, over.mailing_lists);
    }

    #[test]
    fn empty_list_falls_back_to_base() {
        let base = org_base();
        let over = OrganizationDefaults::builder().name("x").build();
        let merged = merge(&base, Some(&over));
        assert_eq!(merged.licenses, base.licenses);
        assert_eq!(merged.developers, base.developers);
        assert_eq!(merged.mailing_lists, base.mailing_lists);
    }

    #[test]
    fn all_none_nested_record_does_not_win() {
        let base = org_base();
        let over = OrganizationDefaults {
            scm: Some(Scm::default()),
            organization: Some(Organization::default()),
            issue_management: Some(IssueManagement::default()),
            ..OrganizationDefaults::default()
        };
        let merged = merge(&base, Some(&over));
        assert_eq!(merged.scm, Some(Scm::new("c", "d", "u")));
        assert_eq!(merged.organization, base.organization);
        assert_eq!(merged.issue_management, base.issue_management);
    }

    #[test]
    fn partial_nested_record_replaces_whole_record() {
        let base = org_base();
        let over = OrganizationDefaults {
            scm: Some(Scm {
                url: Some("https://github.com/x/project".to_string()),
                ..Scm::default()
            }),
            ..OrganizationDefaults::default()
        };
        let merged = merge(&base, Some(&over));
        let scm = merged.scm.unwrap();
        assert_eq!(scm.url.as_deref(), Some("https://github.com/x/project"));
        assert!(scm.connection.is_none());
        assert!(scm.developer_connection.is_none());
    }

    #[test]
    fn inputs_are_not_mutated() {
        let base = org_base();
        let over = OrganizationDefaults::builder().name("Project").build();
        let base_before = base.clone();
        let over_before = over.clone();
        let _ = merge(&base, Some(&over));
        assert_eq!(base, base_before);
        assert_eq!(over, over_before);
    }

    #[test]
    fn merge_is_deterministic() {
        let base = org_base();
        let over = OrganizationDefaults::builder().name("Project").build();
        assert_eq!(merge(&base, Some(&over)), merge(&base, Some(&over)));
    }

    #[test]
    fn method_form_matches_free_function() {
        let base = org_base();
        let over = OrganizationDefaults::builder().version("3.0.0").build();
        assert_eq!(base.merge(Some(&over)), merge(&base, Some(&over)));
    }

    #[test]
    fn chain_applies_three_levels() {
        let org = org_base();
        let project = OrganizationDefaults::builder()
            .artifact_id("project")
            .name("Project")
            .build();
        let module = OrganizationDefaults::builder()
            .artifact_id("project-core")
            .build();
        let merged = merge_chain([&org, &project, &module]).unwrap();
        assert_eq!(merged.artifact_id.as_deref(), Some("project-core"));
        assert_eq!(merged.name.as_deref(), Some("Project"));
        assert_eq!(merged.group_id.as_deref(), Some("io.github.yonggoose"));
        assert_eq!(merged, merge(&merge(&org, Some(&project)), Some(&module)));
    }

    #[test]
    fn chain_of_one_is_that_record() {
        let org = org_base();
        assert_eq!(merge_chain([&org]), Some(org));
    }

    #[test]
    fn empty_chain_is_none() {
        assert!(merge_chain(std::iter::empty()).is_none());
    }
}
