//! Partitioner: validated catalog → bounded-size groups.
//!
//! Each resource type is chunked independently: the identifier-sorted
//! resources of a type are split into consecutive runs of at most
//! `max_group_size`, numbered from 1. Consecutive chunking keeps the
//! assignment stable under insertion: adding one resource only perturbs
//! the chunks at or after its sorted position.

use crate::core::model::{Catalog, Group, ResourceType};

/// Split the catalog into groups of at most `max_group_size` resources.
///
/// `max_group_size` must be positive; the config layer enforces this
/// before the pipeline runs.
pub fn partition(catalog: Catalog, max_group_size: usize) -> Vec<Group> {
    debug_assert!(max_group_size > 0);

    let mut per_type: Vec<Vec<_>> = ResourceType::ALL.iter().map(|_| Vec::new()).collect();
    for resource in catalog.into_resources() {
        let slot = ResourceType::ALL
            .iter()
            .position(|t| *t == resource.rtype)
            .unwrap_or(0);
        per_type[slot].push(resource);
    }

    let mut groups = Vec::new();
    for (slot, resources) in per_type.into_iter().enumerate() {
        let rtype = ResourceType::ALL[slot];
        let mut iter = resources.into_iter().peekable();
        let mut index = 1;
        while iter.peek().is_some() {
            let chunk: Vec<_> = iter.by_ref().take(max_group_size).collect();
            groups.push(Group {
                rtype,
                index,
                resources: chunk,
            });
            index += 1;
        }
    }

    groups
}
