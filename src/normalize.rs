//! Input normalization and index-list sorting.

use std::collections::BTreeMap;

use crate::config::SortKey;
use crate::model::{Part, Priority, Thickness};
use crate::{IndexMap, PartMap};

/// Rotates every part so its first component is the shorter side, and
/// builds, for each (thickness, priority) bucket, an index list sorted by
/// the chosen key in descending order. Ties keep the original input order
/// (a stable sort).
pub fn normalize_and_sort(parts: &PartMap, sort_key: SortKey) -> (PartMap, IndexMap) {
    let mut normalized: PartMap = BTreeMap::new();
    let mut indices: IndexMap = BTreeMap::new();

    for (&h, group) in parts.iter() {
        let mut norm_group: BTreeMap<Priority, Vec<Part>> = BTreeMap::new();
        let mut idx_group: BTreeMap<Priority, Vec<usize>> = BTreeMap::new();
        for (&p, list) in group.iter() {
            let norm_list: Vec<Part> = list.iter().map(|r| r.normalized()).collect();
            let mut order: Vec<usize> = (0..norm_list.len()).collect();
            sort_by_key(&mut order, &norm_list, sort_key);
            norm_group.insert(p, norm_list);
            idx_group.insert(p, order);
        }
        normalized.insert(h, norm_group);
        indices.insert(h, idx_group);
    }

    (normalized, indices)
}

/// Re-sorts an existing index list after a rollback reinserted indices into
/// it, keeping only still-present indices (they all still are — rollback
/// never removes any) and restoring descending-key order.
pub fn resort_existing(normalized: &PartMap, indices: &mut IndexMap, sort_key: SortKey) {
    for (h, idx_group) in indices.iter_mut() {
        let Some(norm_group) = normalized.get(h) else {
            continue;
        };
        resort_bucket(norm_group, idx_group, sort_key);
    }
}

/// Same as [`resort_existing`] but restricted to a single thickness's
/// priority map — used by the scheduler's rollback, which only needs to
/// re-sort the one thickness whose probe just failed.
pub fn resort_bucket(
    norm_group: &BTreeMap<Priority, Vec<Part>>,
    idx_group: &mut BTreeMap<Priority, Vec<usize>>,
    sort_key: SortKey,
) {
    for (p, order) in idx_group.iter_mut() {
        let Some(list) = norm_group.get(p) else {
            continue;
        };
        sort_by_key(order, list, sort_key);
    }
}

fn sort_by_key(order: &mut [usize], list: &[Part], sort_key: SortKey) {
    let key = |i: usize| -> f64 {
        match sort_key {
            SortKey::Width => list[i].w,
            SortKey::Length => list[i].l,
        }
    };
    order.sort_by(|&a, &b| key(b).partial_cmp(&key(a)).unwrap_or(std::cmp::Ordering::Equal));
}

/// Computes the reference thickness h*: the maximum thickness among those
/// whose smallest non-empty priority is minimal.
pub fn reference_thickness(parts: &PartMap) -> Option<Thickness> {
    let mut candidates: Vec<(Thickness, Priority)> = Vec::new();
    for (&h, group) in parts.iter() {
        if let Some(&min_p) = group
            .iter()
            .filter(|(_, list)| !list.is_empty())
            .map(|(p, _)| p)
            .min()
        {
            candidates.push((h, min_p));
        }
    }
    let global_min_p = candidates.iter().map(|(_, p)| *p).min()?;
    candidates
        .into_iter()
        .filter(|(_, p)| *p == global_min_p)
        .map(|(h, _)| h)
        .max()
}
