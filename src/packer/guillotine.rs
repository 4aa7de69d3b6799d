//! Recursive guillotine sub-packer.
//!
//! Fills a free axis-aligned rectangle by picking the best-fit candidate
//! across all priority buckets of one thickness, placing it, and recursing
//! into the leftover sub-rectangle(s) the placement produces. Only one part
//! is placed per call; recursion produces every further placement.

use std::collections::BTreeMap;

use crate::model::{Part, PlacedRect, Priority};

/// Fit classification for a candidate against a free rectangle (w, h).
/// Lower is better; 5 means "does not fit this free rectangle at all".
fn classify(candidate_w: f64, candidate_l: f64, w: f64, h: f64) -> u8 {
    if candidate_w == w && candidate_l == h {
        1
    } else if candidate_w == w && candidate_l < h {
        2
    } else if candidate_l == h && candidate_w < w {
        3
    } else if candidate_w < w && candidate_l < h {
        4
    } else {
        5
    }
}

/// Best candidate within one priority bucket's worklist, trying both
/// orientations per candidate. Ties go to the earliest index in `order`;
/// between a candidate's two orientations, the unrotated one wins ties.
fn best_in_bucket(w: f64, h: f64, order: &[usize], list: &[Part]) -> Option<(u8, usize, bool)> {
    let mut best_case = 6u8;
    let mut best: Option<(usize, bool)> = None;
    for &idx in order {
        let part = list[idx];
        let unrotated = classify(part.w, part.l, w, h);
        if unrotated < best_case {
            best_case = unrotated;
            best = Some((idx, false));
        }
        let rotated = classify(part.l, part.w, w, h);
        if rotated < best_case {
            best_case = rotated;
            best = Some((idx, true));
        }
    }
    best.map(|(idx, rot)| (best_case, idx, rot))
}

/// Recursively fills the free rectangle at `(x, y)` of size `w` x `h`.
///
/// `parts` holds every candidate part for this thickness, keyed by
/// priority; `indices` is the mutable worklist (indices still unplaced),
/// consulted in ascending priority order so higher-priority buckets get
/// first refusal at each free rectangle. `result` accumulates placements.
pub fn recursive_pack(
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    parts: &BTreeMap<Priority, Vec<Part>>,
    indices: &mut BTreeMap<Priority, Vec<usize>>,
    result: &mut BTreeMap<Priority, Vec<PlacedRect>>,
) {
    if w <= 0.0 || h <= 0.0 {
        return;
    }

    let mut chosen: Option<(Priority, usize, bool, u8)> = None;
    for (&p, order) in indices.iter() {
        let Some(list) = parts.get(&p) else {
            continue;
        };
        if let Some((case, idx, rot)) = best_in_bucket(w, h, order, list) {
            if case < 5 {
                chosen = Some((p, idx, rot, case));
                break;
            }
        }
    }

    let Some((p, idx, rot, case)) = chosen else {
        return;
    };

    let part = parts[&p][idx];
    let (omega, d) = if rot { (part.l, part.w) } else { (part.w, part.l) };

    result
        .entry(p)
        .or_default()
        .push(PlacedRect::new(x, y, omega, d, idx));
    indices.get_mut(&p).unwrap().retain(|&i| i != idx);

    match case {
        1 => {}
        2 => recursive_pack(x, y + d, w, h - d, parts, indices, result),
        3 => recursive_pack(x + omega, y, w - omega, h, parts, indices, result),
        4 => {
            let mut min_w = f64::INFINITY;
            let mut min_h = f64::INFINITY;
            for (p2, order2) in indices.iter() {
                let Some(list2) = parts.get(p2) else {
                    continue;
                };
                for &i2 in order2 {
                    min_w = min_w.min(list2[i2].w);
                    min_h = min_h.min(list2[i2].l);
                }
            }
            // Either dimension may end up along either axis after a 90°
            // rotation, so the two leftover branches below must compare
            // against the same, smaller, collapsed bound.
            let collapsed = min_w.min(min_h);
            min_w = collapsed;
            min_h = collapsed;

            if w - omega < min_w {
                recursive_pack(x, y + d, w, h - d, parts, indices, result);
            } else if h - d < min_h {
                recursive_pack(x + omega, y, w - omega, h, parts, indices, result);
            } else if omega < min_w {
                recursive_pack(x + omega, y, w - omega, d, parts, indices, result);
                recursive_pack(x, y + d, w, h - d, parts, indices, result);
            } else {
                recursive_pack(x, y + d, omega, h - d, parts, indices, result);
                recursive_pack(x + omega, y, w - omega, h, parts, indices, result);
            }
        }
        _ => unreachable!("only cases 1..=4 are ever chosen"),
    }
}
