//! Property tests for the region algebra.
//!
//! Regions are checked against a brute-force model: the set of cells obtained
//! by testing every point of a small grid.

use std::collections::BTreeSet;

use gadget_tui::core::{Point, Rect, Region, SetOp};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

const GRID: i32 = 16;

fn rect() -> impl Strategy<Value = Rect> {
    (0..GRID, 0..GRID, 0..GRID, 0..GRID).prop_map(|(x1, x2, y1, y2)| {
        Rect::new(y1.min(y2), y1.max(y2), x1.min(x2), x1.max(x2))
    })
}

fn region() -> impl Strategy<Value = Region> {
    prop::collection::vec(rect(), 0..6).prop_map(|rects| rects.into_iter().collect())
}

fn cells(region: &Region) -> BTreeSet<(i32, i32)> {
    let mut set = BTreeSet::new();
    for y in -1..=GRID {
        for x in -1..=GRID {
            if region.contains(Point::new(x, y)) {
                set.insert((x, y));
            }
        }
    }
    set
}

fn rect_cells(region: &Region) -> BTreeSet<(i32, i32)> {
    region
        .rects()
        .flat_map(Rect::points)
        .map(|p| (p.x, p.y))
        .collect()
}

fn assert_canonical(region: &Region) {
    let bands = region.bands();
    for (i, band) in bands.iter().enumerate() {
        assert!(band.y1 < band.y2, "band {i} is empty");
        assert!(!band.walls.is_empty(), "band {i} has no walls");
        assert_eq!(band.walls.len() % 2, 0, "band {i} has an odd wall count");
        assert!(
            band.walls.windows(2).all(|w| w[0] < w[1]),
            "band {i} walls are not strictly increasing"
        );
        if let Some(next) = bands.get(i + 1) {
            assert!(band.y2 <= next.y1, "bands {i} and {} overlap", i + 1);
            assert!(
                band.y2 < next.y1 || band.walls != next.walls,
                "bands {i} and {} should have been coalesced",
                i + 1
            );
        }
    }
}

proptest! {
    #[test]
    fn test_operations_match_cell_sets(a in region(), b in region()) {
        let (ca, cb) = (cells(&a), cells(&b));

        let and = &a & &b;
        let or = &a | &b;
        let sub = &a - &b;
        let xor = &a ^ &b;

        prop_assert_eq!(cells(&and), &ca & &cb);
        prop_assert_eq!(cells(&or), &ca | &cb);
        prop_assert_eq!(cells(&sub), &ca - &cb);
        prop_assert_eq!(cells(&xor), &ca ^ &cb);

        for result in [&and, &or, &sub, &xor] {
            assert_canonical(result);
        }
    }

    #[test]
    fn test_algebraic_laws(a in region(), b in region(), c in region()) {
        prop_assert_eq!(&a | &b, &b | &a);
        prop_assert_eq!(&a & &b, &b & &a);
        prop_assert_eq!(&a ^ &b, &b ^ &a);
        prop_assert_eq!(&(&a | &b) | &c, &a | &(&b | &c));
        prop_assert_eq!(&(&a & &b) & &c, &a & &(&b & &c));
        prop_assert_eq!(&a & &(&b | &c), &(&a & &b) | &(&a & &c));
        prop_assert_eq!(&a - &b, &a & &(&(&a | &b) - &b));
        prop_assert_eq!(&a ^ &b, &(&a - &b) | &(&b - &a));
        prop_assert_eq!(&a | &a, a.clone());
        prop_assert_eq!(&a & &a, a.clone());
        prop_assert!((&a - &a).is_empty());
        prop_assert!((&a ^ &a).is_empty());
        prop_assert_eq!(&a | &Region::new(), a.clone());
        prop_assert!((&a & &Region::new()).is_empty());
    }

    #[test]
    fn test_equal_sets_have_equal_bands(a in region(), b in region()) {
        // Two ways of building the same set must produce identical storage.
        let forward = &(&a - &b) | &b;
        let backward = &b | &a;
        prop_assert_eq!(forward.bands(), backward.bands());
    }

    #[test]
    fn test_rects_round_trip(a in region()) {
        let rects: Vec<Rect> = a.rects().collect();
        prop_assert_eq!(rects.len(), a.rects().len());
        prop_assert!(rects.iter().all(|r| !r.is_empty()));

        let total: i64 = rects.iter().map(|r| r.area()).sum();
        prop_assert_eq!(total, a.area());
        prop_assert_eq!(rect_cells(&a), cells(&a));

        let rebuilt: Region = rects.into_iter().collect();
        prop_assert_eq!(rebuilt, a);
    }

    #[test]
    fn test_containment_is_consistent(a in region(), r in rect()) {
        let inside = r.points().all(|p| a.contains(p));
        let touches = r.points().any(|p| a.contains(p));
        prop_assert_eq!(a.contains_rect(r), inside);
        prop_assert_eq!(a.intersects_rect(r), touches);
        prop_assert_eq!(a.intersects_rect(r), !(&a & &Region::from_rect(r)).is_empty());
    }

    #[test]
    fn test_bbox_bounds_every_cell(a in region()) {
        match a.bbox() {
            None => prop_assert!(a.is_empty()),
            Some(bbox) => {
                prop_assert!(!a.is_empty());
                prop_assert!(cells(&a).iter().all(|&(x, y)| bbox.contains_point(Point::new(x, y))));
            }
        }
    }

    #[test]
    fn test_divmod_splits_region(a in region(), b in region()) {
        let mut rest = a.clone();
        let removed = rest.divmod(&b);
        prop_assert_eq!(&removed, &(&a & &b));
        prop_assert_eq!(&rest, &(&a - &b));
        assert_canonical(&rest);
        assert_canonical(&removed);
    }

    #[test]
    fn test_translate_moves_every_cell(a in region(), dx in -5..5i32, dy in -5..5i32) {
        let moved = a.translate(dx, dy);
        let expected: BTreeSet<_> = rect_cells(&a).into_iter().map(|(x, y)| (x + dx, y + dy)).collect();
        prop_assert_eq!(rect_cells(&moved), expected);
        prop_assert_eq!(moved.translate(-dx, -dy), a);
    }

    #[test]
    fn test_combine_agrees_with_operators(a in region(), b in region()) {
        prop_assert_eq!(a.combine(&b, SetOp::And), &a & &b);
        prop_assert_eq!(a.combine(&b, SetOp::Or), &a + &b);
        prop_assert_eq!(a.combine(&b, SetOp::Sub), &a - &b);
        prop_assert_eq!(a.combine(&b, SetOp::Xor), &a ^ &b);
    }
}
