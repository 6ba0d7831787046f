//! Typed issues accumulated across a generation run.
//!
//! Nothing in the pipeline raises for an individual problem; every parse
//! and validation failure becomes an `Issue`, and a run surfaces the
//! complete set at once. Issues are `Ord` so reports print in a stable
//! order.

use std::fmt;

use crate::core::model::{QualifierSet, ResourceType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Issue category, used as the rule tag in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    UnrecognizedResource,
    DuplicateVariant,
    IdentifierCollision,
    MissingDefaultVariant,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::UnrecognizedResource => write!(f, "unrecognized-resource"),
            Rule::DuplicateVariant => write!(f, "duplicate-variant"),
            Rule::IdentifierCollision => write!(f, "identifier-collision"),
            Rule::MissingDefaultVariant => write!(f, "missing-default-variant"),
        }
    }
}

/// A file that matched no known type/qualifier convention. The file is
/// excluded from the catalog and the run fails.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnrecognizedResourceIssue {
    /// Path relative to its resource root.
    pub path: String,
    pub reason: String,
}

/// Two files claimed the same qualifier slot of one logical resource.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct DuplicateVariantIssue {
    pub rtype: ResourceType,
    pub id: String,
    pub qualifiers: QualifierSet,
    pub first_path: String,
    pub second_path: String,
}

/// Two distinct base names sanitized to the same (type, identifier) pair.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct IdentifierCollisionIssue {
    pub rtype: ResourceType,
    pub id: String,
    /// (raw base name, example path) per colliding source, sorted.
    pub sources: Vec<(String, String)>,
}

/// A resource with qualified variants only; severity follows the
/// configured policy.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct MissingDefaultVariantIssue {
    pub rtype: ResourceType,
    pub id: String,
    pub example_path: String,
    pub severity: Severity,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Issue {
    UnrecognizedResource(UnrecognizedResourceIssue),
    DuplicateVariant(DuplicateVariantIssue),
    IdentifierCollision(IdentifierCollisionIssue),
    MissingDefaultVariant(MissingDefaultVariantIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::UnrecognizedResource(_)
            | Issue::DuplicateVariant(_)
            | Issue::IdentifierCollision(_) => Severity::Error,
            Issue::MissingDefaultVariant(issue) => issue.severity,
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Issue::UnrecognizedResource(_) => Rule::UnrecognizedResource,
            Issue::DuplicateVariant(_) => Rule::DuplicateVariant,
            Issue::IdentifierCollision(_) => Rule::IdentifierCollision,
            Issue::MissingDefaultVariant(_) => Rule::MissingDefaultVariant,
        }
    }

    /// Primary file path for the `-->` report line.
    pub fn path(&self) -> &str {
        match self {
            Issue::UnrecognizedResource(issue) => &issue.path,
            Issue::DuplicateVariant(issue) => &issue.second_path,
            Issue::IdentifierCollision(issue) => issue
                .sources
                .first()
                .map(|(_, path)| path.as_str())
                .unwrap_or(""),
            Issue::MissingDefaultVariant(issue) => &issue.example_path,
        }
    }

    /// One-line description printed after the severity tag.
    pub fn message(&self) -> String {
        match self {
            Issue::UnrecognizedResource(issue) => {
                format!("unrecognized resource file: {}", issue.reason)
            }
            Issue::DuplicateVariant(issue) => format!(
                "duplicate '{}' variant for {}:{}",
                issue.qualifiers, issue.rtype, issue.id
            ),
            Issue::IdentifierCollision(issue) => {
                let bases: Vec<&str> =
                    issue.sources.iter().map(|(base, _)| base.as_str()).collect();
                format!(
                    "{} both sanitize to {}:{}",
                    bases.join(" and "),
                    issue.rtype,
                    issue.id
                )
            }
            Issue::MissingDefaultVariant(issue) => {
                format!("{}:{} has no default variant", issue.rtype, issue.id)
            }
        }
    }

    /// Extra context printed as a `note:` line, if any.
    pub fn note(&self) -> Option<String> {
        match self {
            Issue::UnrecognizedResource(_) => None,
            Issue::DuplicateVariant(issue) => Some(format!("conflicts with {}", issue.first_path)),
            Issue::IdentifierCollision(issue) => {
                let paths: Vec<&str> =
                    issue.sources.iter().map(|(_, path)| path.as_str()).collect();
                Some(format!("defined by {}", paths.join(", ")))
            }
            Issue::MissingDefaultVariant(issue) => Some(format!(
                "only qualified variants exist, e.g. {}",
                issue.example_path
            )),
        }
    }
}

pub fn error_count(issues: &[Issue]) -> usize {
    issues
        .iter()
        .filter(|issue| issue.severity() == Severity::Error)
        .count()
}

pub fn warning_count(issues: &[Issue]) -> usize {
    issues
        .iter()
        .filter(|issue| issue.severity() == Severity::Warning)
        .count()
}
