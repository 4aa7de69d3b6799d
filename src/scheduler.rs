//! Outer scheduler.
//!
//! Walks (thickness, priority) pairs in a fixed order — ascending priority,
//! then descending thickness — probing each thickness's demand with the
//! unbounded packer and falling back to the bounded packer when demand
//! exceeds the thickness's deformed length budget.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::PackConfig;
use crate::error::{PackError, Result};
use crate::model::{Priority, Thickness};
use crate::normalize::{self, reference_thickness};
use crate::packer::bounded::pack_bounded;
use crate::packer::unbounded::pack_unbounded;
use crate::report::filter_by_indices;
use crate::scaling::{backward_deform, forward_deform, round_to_1_decimal, round_to_4_decimals};
use crate::{IndexMap, LengthMarking, PartMap, PlacementMap};

/// Full result of a [`crate::pack`] call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackOutput {
    pub placements: PlacementMap,
    pub unplaced: PartMap,
    pub length_marking: LengthMarking,
    pub remaining_length: f64,
}

/// Packs `parts` (grouped by thickness then priority) into a sheet of
/// `width` x `length`, honoring thickness sub-strips and priority order.
///
/// `parts` is read-only: normalization clones internally, so the caller's
/// map is never mutated.
#[tracing::instrument(skip(parts))]
pub fn packaging(width: f64, length: f64, parts: &PartMap, cfg: PackConfig) -> Result<PackOutput> {
    validate_inputs(width, length, parts, cfg.strain)?;

    let mut length_marking: LengthMarking = BTreeMap::new();
    let mut res: PlacementMap = BTreeMap::new();

    let Some(h_star) = reference_thickness(parts) else {
        // No non-empty bucket anywhere: nothing to do, everything unplaced.
        return Ok(PackOutput {
            placements: res,
            unplaced: parts.clone(),
            length_marking,
            remaining_length: length,
        });
    };

    let (normalized, mut indices) = normalize::normalize_and_sort(parts, cfg.sort_key);

    let order = processing_order(&indices);

    let mut remaining = length;

    for (h, p) in order {
        let already_started = length_marking.contains_key(&h);
        let bucket_now_empty = indices
            .get(&h)
            .and_then(|m| m.get(&p))
            .map(|v| v.is_empty())
            .unwrap_or(true);
        if already_started && bucket_now_empty {
            continue;
        }

        let cur_y = *length_marking.get(&h).unwrap_or(&0.0);

        let available = if h == h_star {
            remaining
        } else {
            forward_deform(
                remaining,
                h_star.value(),
                h.value(),
                cfg.strain,
                Some(round_to_1_decimal),
            )
        };

        let group = normalized
            .get(&h)
            .expect("thickness present in normalized map");
        let idx_for_h = indices
            .get_mut(&h)
            .expect("thickness present in index map");

        let (demanded, probe_placements) = pack_unbounded(width, 0.0, cur_y, group, idx_for_h);

        let (consumed, accepted) = if demanded <= available {
            (demanded, probe_placements)
        } else {
            tracing::debug!(
                thickness = h.value(),
                priority = p.0,
                demanded,
                available,
                "unbounded probe exceeded budget, rolling back to bounded packer"
            );
            reinsert(idx_for_h, &probe_placements);
            normalize::resort_bucket(group, idx_for_h, cfg.sort_key);

            let (upper_bound, bounded_placements) =
                pack_bounded(width, remaining, 0.0, cur_y, group, idx_for_h);

            if upper_bound == 0.0 {
                tracing::warn!(
                    thickness = h.value(),
                    priority = p.0,
                    "bounded fallback made no progress for this thickness"
                );
                continue;
            }
            (upper_bound - cur_y, bounded_placements)
        };

        let dest = res.entry(h).or_default();
        for (p2, list) in accepted {
            dest.entry(p2).or_default().extend(list);
        }

        *length_marking.entry(h).or_insert(0.0) += consumed;

        remaining -= backward_deform(
            consumed,
            h_star.value(),
            h.value(),
            cfg.strain,
            Some(round_to_4_decimals),
        );

        if remaining == 0.0 {
            break;
        }
    }

    let unplaced = filter_by_indices(parts, &indices);

    Ok(PackOutput {
        placements: res,
        unplaced,
        length_marking,
        remaining_length: remaining,
    })
}

fn reinsert(
    idx_for_h: &mut BTreeMap<Priority, Vec<usize>>,
    placements: &BTreeMap<Priority, Vec<crate::model::PlacedRect>>,
) {
    for (p, list) in placements.iter() {
        let entry = idx_for_h.entry(*p).or_default();
        for r in list {
            entry.push(r.idx);
        }
    }
}

/// Ascending priority, then descending thickness.
fn processing_order(indices: &IndexMap) -> Vec<(Thickness, Priority)> {
    let mut order: Vec<(Thickness, Priority)> = Vec::new();
    for (&h, pmap) in indices.iter() {
        for (&p, list) in pmap.iter() {
            if !list.is_empty() {
                order.push((h, p));
            }
        }
    }
    order.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(&a.0)));
    order
}

fn validate_inputs(width: f64, length: f64, parts: &PartMap, strain: f64) -> Result<()> {
    if width <= 0.0 || length <= 0.0 {
        return Err(PackError::InvalidDimensions { width, length });
    }
    if strain <= 0.0 {
        return Err(PackError::InvalidStrain(strain));
    }
    for (&h, group) in parts.iter() {
        for (&p, list) in group.iter() {
            for (index, part) in list.iter().enumerate() {
                if part.w <= 0.0 || part.l <= 0.0 {
                    return Err(PackError::InvalidPartDimensions {
                        thickness: h.value(),
                        priority: p.0,
                        index,
                        w: part.w,
                        l: part.l,
                    });
                }
            }
        }
    }
    Ok(())
}
