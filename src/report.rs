//! Area accounting and index-based filtering.

use std::collections::BTreeMap;

use crate::model::Thickness;
use crate::{IndexMap, PartMap, PlacementMap};

/// Total area (`w * l`) of every *placed* rectangle, grouped by thickness.
pub fn area_by_thickness(placements: &PlacementMap) -> BTreeMap<Thickness, f64> {
    let mut out = BTreeMap::new();
    for (&h, group) in placements.iter() {
        let mut sum = 0.0;
        for list in group.values() {
            for rect in list {
                sum += rect.w * rect.l;
            }
        }
        out.insert(h, sum);
    }
    out
}

/// Total area of every input part, grouped by thickness.
pub fn required_area(parts: &PartMap) -> BTreeMap<Thickness, f64> {
    let mut out = BTreeMap::new();
    for (&h, group) in parts.iter() {
        let mut sum = 0.0;
        for list in group.values() {
            for part in list {
                sum += part.w * part.l;
            }
        }
        out.insert(h, sum);
    }
    out
}

/// Selects, for each (thickness, priority) bucket, only the elements whose
/// position is listed in `indices`. Used to reconstruct the unplaced-parts
/// map from the scheduler's leftover index lists.
pub fn filter_by_indices(parts: &PartMap, indices: &IndexMap) -> PartMap {
    let mut out: PartMap = BTreeMap::new();
    for (h, pmap) in indices.iter() {
        let Some(src_group) = parts.get(h) else {
            continue;
        };
        let mut out_group = BTreeMap::new();
        for (p, idx_list) in pmap.iter() {
            let Some(src_list) = src_group.get(p) else {
                continue;
            };
            let kept: Vec<_> = src_list
                .iter()
                .enumerate()
                .filter(|(i, _)| idx_list.contains(i))
                .map(|(_, r)| *r)
                .collect();
            out_group.insert(*p, kept);
        }
        out.insert(*h, out_group);
    }
    out
}
