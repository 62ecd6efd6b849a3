//! Property tests for the circle rasterizers.
//!
//! Run: cargo test --test circle_properties_test

#![allow(clippy::unwrap_used)]

use std::collections::BTreeSet;

use grid_raster::prelude::*;
use proptest::prelude::*;

fn relative(cells: &CellSequence, center: GridPoint) -> BTreeSet<(i64, i64)> {
    cells
        .iter()
        .map(|c| (i64::from(c.col) - i64::from(center.col), i64::from(c.row) - i64::from(center.row)))
        .collect()
}

#[test]
fn both_algorithms_draw_the_same_ring_for_small_radii() {
    for center in [GridPoint::ORIGIN, GridPoint::new(10, 10), GridPoint::new(-37, 4)] {
        for radius in 0..50 {
            let circle = Circle::new(center, radius);
            let bresenham = CircleAlgorithm::Bresenham.rasterize(&circle).to_set();
            let midpoint = CircleAlgorithm::Midpoint.rasterize(&circle).to_set();
            assert_eq!(bresenham, midpoint, "radius {radius} at {center}");
        }
    }
}

#[test]
fn zero_radius_is_the_center() {
    let center = GridPoint::new(3, -8);
    for algorithm in CircleAlgorithm::ALL {
        let cells = algorithm.rasterize(&Circle::new(center, 0));
        assert!(!cells.is_empty());
        assert_eq!(cells.deduplicated().as_slice(), &[center]);
    }
}

#[test]
fn reference_ring_radius_five() {
    let circle = Circle::new(GridPoint::new(10, 10), 5);
    let ring = CircleAlgorithm::Bresenham.rasterize(&circle);
    assert_eq!(ring.first(), Some(GridPoint::new(10, 15)));
    assert_eq!(ring.to_set().len(), 28);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn prop_ring_has_eightfold_symmetry(radius in 0u32..300, col in -100i32..100, row in -100i32..100) {
        let center = GridPoint::new(col, row);
        for algorithm in CircleAlgorithm::ALL {
            let set = relative(&algorithm.rasterize(&Circle::new(center, radius)), center);
            for &(dx, dy) in &set {
                prop_assert!(set.contains(&(dy, dx)));
                prop_assert!(set.contains(&(-dx, dy)));
                prop_assert!(set.contains(&(dx, -dy)));
            }
        }
    }

    #[test]
    fn prop_cells_hug_the_true_circle(radius in 1u32..300) {
        let r = f64::from(radius);
        for algorithm in CircleAlgorithm::ALL {
            let set = relative(&algorithm.rasterize(&Circle::new(GridPoint::ORIGIN, radius)), GridPoint::ORIGIN);
            for (dx, dy) in set {
                let dist = ((dx * dx + dy * dy) as f64).sqrt();
                prop_assert!((dist - r).abs() < 1.0, "({}, {}) at distance {} from r={}", dx, dy, dist, r);
            }
        }
    }

    #[test]
    fn prop_emission_comes_in_octant_groups(radius in 0u32..300) {
        for algorithm in CircleAlgorithm::ALL {
            prop_assert_eq!(algorithm.rasterize(&Circle::new(GridPoint::ORIGIN, radius)).len() % 8, 0);
        }
    }

    #[test]
    fn prop_sets_agree_for_larger_radii(radius in 50u32..2000) {
        let circle = Circle::new(GridPoint::new(7, -7), radius);
        prop_assert_eq!(
            CircleAlgorithm::Bresenham.rasterize(&circle).to_set(),
            CircleAlgorithm::Midpoint.rasterize(&circle).to_set()
        );
    }
}
