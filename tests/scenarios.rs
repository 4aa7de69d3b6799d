use std::collections::BTreeMap;

use strip_pack_core::model::{Part, Priority, Thickness};
use strip_pack_core::{pack, PackConfig, PartMap};

fn single_bucket(h: f64, p: u32, parts: Vec<Part>) -> PartMap {
    let mut by_priority = BTreeMap::new();
    by_priority.insert(Priority(p), parts);
    let mut map = BTreeMap::new();
    map.insert(Thickness(h), by_priority);
    map
}

/// A sheet too small for anything places nothing, and `remaining_length`
/// reports the full original length untouched.
#[test]
fn sheet_too_small_places_nothing() {
    let parts = single_bucket(1.0, 1, vec![Part::new(10.0, 10.0), Part::new(8.0, 6.0)]);
    let out = pack(25.0, 5.0, &parts, PackConfig::default()).unwrap();

    assert!(out.placements.is_empty());
    assert_eq!(out.remaining_length, 5.0);
}

/// A single part exactly fills the unbounded probe for its thickness class,
/// and the reported accounting matches it exactly.
#[test]
fn single_part_exact_accounting() {
    let parts = single_bucket(2.0, 1, vec![Part::new(10.0, 10.0)]);
    let out = pack(20.0, 20.0, &parts, PackConfig::default()).unwrap();

    let placed = &out.placements[&Thickness(2.0)][&Priority(1)];
    assert_eq!(placed.len(), 1);
    assert_eq!(placed[0].x, 0.0);
    assert_eq!(placed[0].y, 0.0);
    assert_eq!(placed[0].w, 10.0);
    assert_eq!(placed[0].l, 10.0);

    assert_eq!(out.length_marking[&Thickness(2.0)], 10.0);
    assert_eq!(out.remaining_length, 10.0);
}

/// Two identical parts at the reference thickness stack along the length
/// axis with no cross-thickness deformation involved.
#[test]
fn two_stacked_square_parts_at_reference_thickness() {
    let parts = single_bucket(1.0, 1, vec![Part::new(10.0, 10.0), Part::new(10.0, 10.0)]);
    let out = pack(10.0, 25.0, &parts, PackConfig::default()).unwrap();

    let placed = &out.placements[&Thickness(1.0)][&Priority(1)];
    assert_eq!(placed.len(), 2);

    assert_eq!(out.length_marking[&Thickness(1.0)], 20.0);
    assert_eq!(out.remaining_length, 5.0);
}

/// Empty priority buckets never surface in placements, in unplaced output,
/// or in length markings, and they do not perturb the length accounting
/// for the non-empty buckets.
#[test]
fn empty_priority_buckets_are_invisible_in_output() {
    let mut h = BTreeMap::new();
    h.insert(Priority(1), vec![Part::new(10.0, 10.0)]);
    h.insert(Priority(2), Vec::new());
    let mut with_empty: PartMap = BTreeMap::new();
    with_empty.insert(Thickness(1.0), h);

    let without_empty = single_bucket(1.0, 1, vec![Part::new(10.0, 10.0)]);

    let out_with = pack(20.0, 20.0, &with_empty, PackConfig::default()).unwrap();
    let out_without = pack(20.0, 20.0, &without_empty, PackConfig::default()).unwrap();

    assert_eq!(out_with.remaining_length, out_without.remaining_length);
    assert_eq!(
        out_with.length_marking[&Thickness(1.0)],
        out_without.length_marking[&Thickness(1.0)]
    );
    assert!(!out_with
        .placements
        .get(&Thickness(1.0))
        .map(|g| g.contains_key(&Priority(2)))
        .unwrap_or(false));
}

/// A sheet length tight enough that priority-1 demand at the reference
/// thickness consumes most of it, but scheduling still reaches priority-1
/// parts at a different thickness afterward (since scheduling order is
/// priority-first, thickness-second).
#[test]
fn tight_length_still_reaches_other_thicknesses_priority_one() {
    let mut parts: PartMap = BTreeMap::new();

    let mut h3 = BTreeMap::new();
    h3.insert(
        Priority(1),
        vec![
            Part::new(20.0, 14.0),
            Part::new(10.0, 10.0),
            Part::new(5.0, 5.0),
        ],
    );
    parts.insert(Thickness(3.0), h3);

    let mut h1 = BTreeMap::new();
    h1.insert(Priority(1), vec![Part::new(7.0, 7.0)]);
    parts.insert(Thickness(1.0), h1);

    let out = pack(25.0, 27.0, &parts, PackConfig::default()).unwrap();

    let h1_placed = out
        .placements
        .get(&Thickness(1.0))
        .and_then(|g| g.get(&Priority(1)))
        .map(|v| v.len())
        .unwrap_or(0);
    assert!(h1_placed > 0, "priority-1 parts at h=1.0 should be reached");
}
