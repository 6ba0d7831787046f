//! Resource collector: resource roots → populated catalog.
//!
//! Parsing is embarrassingly parallel, so each file is parsed on the
//! rayon pool into an immutable `ParsedFile`. The merge into the catalog
//! is sequential: it is cheap, avoids lock contention, and walking the
//! parse results in scan order keeps "first file wins" deterministic.
//! Per-file parse failures become issues; collection always finishes and
//! reports the complete set.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::core::model::{Catalog, QualifierSet, ResourceItem, ResourceKey};
use crate::core::qualifier::{ParsedFile, UnrecognizedReason, parse_resource_path};
use crate::core::sanitize::sanitize;
use crate::core::scan::scan_root;
use crate::issue::{DuplicateVariantIssue, Issue, UnrecognizedResourceIssue};

/// Catalog plus everything that went wrong while building it.
#[derive(Debug)]
pub struct CollectOutcome {
    pub catalog: Catalog,
    pub issues: Vec<Issue>,
    /// Total number of files considered across all roots.
    pub files_seen: usize,
}

/// Scan and parse all roots, in order, and merge the results into one
/// catalog.
pub fn collect_resources(
    roots: &[PathBuf],
    ignore_patterns: &[String],
    verbose: bool,
) -> CollectOutcome {
    let mut catalog = Catalog::new();
    let mut issues = Vec::new();
    let mut files_seen = 0;

    // Remembers, per (resource, qualifier set), the display path of the
    // file that claimed the slot, and which resources were already
    // reported as duplicates (one issue per offending resource).
    let mut slot_owner: HashMap<(ResourceKey, QualifierSet), String> = HashMap::new();
    let mut flagged: HashSet<ResourceKey> = HashSet::new();

    for root in roots {
        let scan = scan_root(root, ignore_patterns, verbose);
        files_seen += scan.files.len();

        // Parallel parse; collect() preserves the sorted scan order.
        let parsed: Vec<(String, Result<ParsedFile, UnrecognizedReason>)> = scan
            .files
            .par_iter()
            .map(|rel_path| (rel_path.clone(), parse_resource_path(rel_path)))
            .collect();

        for (rel_path, result) in parsed {
            let shown = display_path(root, &rel_path);
            match result {
                Err(reason) => {
                    issues.push(Issue::UnrecognizedResource(UnrecognizedResourceIssue {
                        path: shown,
                        reason: reason.to_string(),
                    }));
                }
                Ok(parsed_file) => {
                    let id = sanitize(&parsed_file.base);
                    let key: ResourceKey = (parsed_file.rtype, id.clone());
                    let slot = (key.clone(), parsed_file.qualifiers.clone());

                    if let Some(first_path) = slot_owner.get(&slot) {
                        if flagged.insert(key) {
                            issues.push(Issue::DuplicateVariant(DuplicateVariantIssue {
                                rtype: parsed_file.rtype,
                                id,
                                qualifiers: parsed_file.qualifiers,
                                first_path: first_path.clone(),
                                second_path: shown,
                            }));
                        }
                        continue;
                    }
                    slot_owner.insert(slot, shown.clone());

                    let resource = catalog.entry(parsed_file.rtype, &id);
                    resource
                        .raw_bases
                        .entry(parsed_file.base)
                        .or_insert(shown);
                    resource.items.push(ResourceItem {
                        qualifiers: parsed_file.qualifiers,
                        path: rel_path,
                    });
                }
            }
        }
    }

    freeze(&mut catalog);

    CollectOutcome {
        catalog,
        issues,
        files_seen,
    }
}

/// End of collection: sort each resource's variants (default first) so
/// emission order never depends on discovery order. Resources are not
/// mutated past this point.
fn freeze(catalog: &mut Catalog) {
    let keys: Vec<ResourceKey> = catalog.iter().map(|r| (r.rtype, r.id.clone())).collect();
    for (rtype, id) in keys {
        catalog.entry(rtype, &id).items.sort();
    }
}

fn display_path(root: &Path, rel_path: &str) -> String {
    let root = root.display().to_string();
    if root.is_empty() || root == "." {
        rel_path.to_string()
    } else {
        format!("{}/{}", root.trim_end_matches('/'), rel_path)
    }
}
