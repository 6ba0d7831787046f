//! Catalog validator.
//!
//! Runs after collection freezes the catalog and before partitioning.
//! Each check is independent and accumulates issues; validation never
//! aborts on the first problem, so one run surfaces the complete set.
//! A catalog with any error-severity issue must not reach emission.

use crate::config::MissingDefaultPolicy;
use crate::core::model::Catalog;
use crate::issue::{
    DuplicateVariantIssue, IdentifierCollisionIssue, Issue, MissingDefaultVariantIssue, Severity,
};

/// Validate the catalog; an empty result means it may proceed to
/// partitioning.
pub fn validate(catalog: &Catalog, missing_default: MissingDefaultPolicy) -> Vec<Issue> {
    let mut issues = Vec::new();

    for resource in catalog.iter() {
        // (a) Distinct base names collapsing onto one identifier.
        if resource.raw_bases.len() > 1 {
            issues.push(Issue::IdentifierCollision(IdentifierCollisionIssue {
                rtype: resource.rtype,
                id: resource.id.clone(),
                sources: resource
                    .raw_bases
                    .iter()
                    .map(|(base, path)| (base.clone(), path.clone()))
                    .collect(),
            }));
        }

        // (b) Missing default variant, unless the type is exempt.
        if resource.rtype.requires_default_variant() && !resource.has_default_variant() {
            issues.push(Issue::MissingDefaultVariant(MissingDefaultVariantIssue {
                rtype: resource.rtype,
                id: resource.id.clone(),
                example_path: resource
                    .items
                    .first()
                    .map(|item| item.path.clone())
                    .unwrap_or_default(),
                severity: match missing_default {
                    MissingDefaultPolicy::Warn => Severity::Warning,
                    MissingDefaultPolicy::Error => Severity::Error,
                },
            }));
        }

        // (c) Re-check qualifier slots. The collector already excludes
        // duplicates; items are sorted, so equal sets would be adjacent.
        for pair in resource.items.windows(2) {
            if pair[0].qualifiers == pair[1].qualifiers {
                issues.push(Issue::DuplicateVariant(DuplicateVariantIssue {
                    rtype: resource.rtype,
                    id: resource.id.clone(),
                    qualifiers: pair[0].qualifiers.clone(),
                    first_path: pair[0].path.clone(),
                    second_path: pair[1].path.clone(),
                }));
            }
        }
    }

    issues.sort();
    issues
}
