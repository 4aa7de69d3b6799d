use std::collections::BTreeMap;

use strip_pack_core::model::{Part, PlacedRect, Priority};
use strip_pack_core::packer::guillotine::recursive_pack;

const P1: Priority = Priority(1);

fn run(
    w: f64,
    h: f64,
    parts: Vec<Part>,
) -> (
    BTreeMap<Priority, Vec<usize>>,
    BTreeMap<Priority, Vec<PlacedRect>>,
) {
    let mut parts_map = BTreeMap::new();
    let mut indices = BTreeMap::new();
    let order: Vec<usize> = (0..parts.len()).collect();
    indices.insert(P1, order);
    parts_map.insert(P1, parts);

    let mut result = BTreeMap::new();
    recursive_pack(0.0, 0.0, w, h, &parts_map, &mut indices, &mut result);
    (indices, result)
}

#[test]
fn exact_fit_consumes_the_whole_rectangle_and_recurses_no_further() {
    let (indices, result) = run(10.0, 10.0, vec![Part::new(10.0, 10.0)]);
    let placed = &result[&P1];
    assert_eq!(placed.len(), 1);
    assert_eq!(placed[0], PlacedRect::new(0.0, 0.0, 10.0, 10.0, 0));
    assert!(indices[&P1].is_empty());
}

#[test]
fn width_exact_splits_above_the_placed_part() {
    let (_, result) = run(10.0, 20.0, vec![Part::new(10.0, 8.0), Part::new(10.0, 12.0)]);
    let placed = &result[&P1];
    // Both candidates are width-exact (case 2); the best-fit search keeps
    // scanning and only improves on strictly lower case numbers, so the
    // first candidate encountered in index order wins case 2.
    assert_eq!(placed.len(), 2);
    assert_eq!(placed[0].x, 0.0);
    assert_eq!(placed[0].y, 0.0);
}

#[test]
fn length_exact_splits_beside_the_placed_part() {
    let (_, result) = run(20.0, 10.0, vec![Part::new(8.0, 10.0), Part::new(12.0, 10.0)]);
    let placed = &result[&P1];
    assert_eq!(placed.len(), 2);
    let total_width: f64 = placed.iter().map(|r| r.w).sum();
    assert_eq!(total_width, 20.0);
    for r in placed {
        assert_eq!(r.y, 0.0);
        assert_eq!(r.l, 10.0);
    }
}

#[test]
fn no_fit_leaves_part_unplaced() {
    let (indices, result) = run(5.0, 5.0, vec![Part::new(10.0, 10.0)]);
    assert!(result.is_empty());
    assert_eq!(indices[&P1], vec![0]);
}

#[test]
fn rotation_is_tried_when_only_rotated_orientation_fits() {
    let (_, result) = run(8.0, 14.0, vec![Part::new(14.0, 8.0)]);
    let placed = &result[&P1];
    assert_eq!(placed.len(), 1);
    assert_eq!(placed[0].w, 8.0);
    assert_eq!(placed[0].l, 14.0);
}

#[test]
fn strictly_smaller_part_recurses_into_two_leftover_strips() {
    let (_, result) = run(10.0, 10.0, vec![Part::new(4.0, 4.0), Part::new(3.0, 3.0)]);
    let placed = &result[&P1];
    assert_eq!(placed.len(), 2);
    for r in placed {
        assert!(r.x2() <= 10.0);
        assert!(r.y2() <= 10.0);
    }
    assert!(!placed[0].overlaps(&placed[1]));
}
