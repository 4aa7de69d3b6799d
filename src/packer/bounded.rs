//! Bounded width x length packer.
//!
//! Delegates immediately to the recursive sub-packer, which honors all
//! priorities through its best-fit logic (unlike [`super::unbounded`], which
//! only pulls fresh items from the single highest-priority bucket).

use std::collections::BTreeMap;

use crate::model::{Part, PlacedRect, Priority};
use crate::packer::guillotine::recursive_pack;

/// Returns `(realized_length, placements)`, where `realized_length` is the
/// maximum `y + l` across all placements, or `0.0` if nothing was placed.
pub fn pack_bounded(
    width: f64,
    length: f64,
    x0: f64,
    y0: f64,
    parts: &BTreeMap<Priority, Vec<Part>>,
    indices: &mut BTreeMap<Priority, Vec<usize>>,
) -> (f64, BTreeMap<Priority, Vec<PlacedRect>>) {
    let mut result: BTreeMap<Priority, Vec<PlacedRect>> = BTreeMap::new();
    recursive_pack(x0, y0, width, length, parts, indices, &mut result);

    let realized = result
        .values()
        .flat_map(|v| v.iter())
        .map(|r| r.y2())
        .fold(0.0_f64, f64::max);

    (realized, result)
}
