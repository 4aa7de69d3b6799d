//! Unbounded-length strip packer.
//!
//! Packs only the highest-priority non-empty bucket of one thickness into a
//! strip of fixed width starting at `(x0, y0)`. Each item taken from that
//! bucket starts a new row; the recursive sub-packer then back-fills the
//! rest of the row (from any priority) before the next row starts. Used to
//! *probe* demand — the caller decides whether the realized length fits the
//! thickness's budget before committing to these placements.

use std::collections::BTreeMap;

use crate::model::{Part, PlacedRect, Priority};
use crate::packer::guillotine::recursive_pack;

/// Returns `(realized_length, placements)`, where `realized_length` is the
/// total length consumed (`L - y0`).
///
/// `x0` is only correct when `0.0`: the row-backfill recursion resets the
/// working x-coordinate to the placed part's own width rather than
/// `x0 + width` — the only caller (the outer scheduler) always passes
/// `x0 == 0.0`.
pub fn pack_unbounded(
    width: f64,
    x0: f64,
    y0: f64,
    parts: &BTreeMap<Priority, Vec<Part>>,
    indices: &mut BTreeMap<Priority, Vec<usize>>,
) -> (f64, BTreeMap<Priority, Vec<PlacedRect>>) {
    let mut result: BTreeMap<Priority, Vec<PlacedRect>> = BTreeMap::new();

    let top_priority = indices
        .iter()
        .filter(|(_, v)| !v.is_empty())
        .map(|(&p, _)| p)
        .min();

    let Some(top_priority) = top_priority else {
        return (0.0, result);
    };

    let mut x = x0;
    let mut y = y0;
    let mut l_total = y0;

    loop {
        let exhausted = indices
            .get(&top_priority)
            .map(|v| v.is_empty())
            .unwrap_or(true);
        if exhausted {
            break;
        }
        let idx = indices.get_mut(&top_priority).unwrap().remove(0);
        let part = parts[&top_priority][idx];

        // Place "upright": if the longer side can't lie along the width
        // axis, keep the part as-is; otherwise rotate it onto its side.
        let (omega, d) = if part.l > width {
            (part.w, part.l)
        } else {
            (part.l, part.w)
        };

        result
            .entry(top_priority)
            .or_default()
            .push(PlacedRect::new(x, y, omega, d, idx));

        let w_leftover = width - omega;
        recursive_pack(omega, l_total, w_leftover, d, parts, indices, &mut result);

        l_total += d;
        x = 0.0;
        y = l_total;
    }

    (l_total - y0, result)
}
