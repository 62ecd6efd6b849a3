//! Circle rasterization via 8-way octant symmetry.
//!
//! Both algorithms walk the octant from `(0, r)` (x ascending, y descending
//! toward x) and expand every offset into its eight reflections. Where
//! reflections coincide (`x == 0` or `x == y`) the duplicate cells are still
//! emitted.

use crate::cells::CellSink;
use crate::geometry::{Circle, GridPoint};

use super::Rasterizer;

/// Circle rasterization algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CircleAlgorithm {
    /// Bresenham's two-candidate decision variable, `d = 3 - 2r`.
    #[default]
    Bresenham,
    /// Midpoint decision variable, `p = 1 - r`.
    Midpoint,
}

impl CircleAlgorithm {
    /// Every circle algorithm.
    pub const ALL: [Self; 2] = [Self::Bresenham, Self::Midpoint];
}

impl Rasterizer<Circle> for CircleAlgorithm {
    fn rasterize_into<S: CellSink + ?Sized>(&self, circle: &Circle, sink: &mut S) {
        match self {
            Self::Bresenham => bresenham(*circle, sink),
            Self::Midpoint => midpoint(*circle, sink),
        }
    }
}

/// The eight reflections of octant offset `(x, y)` about `center`.
///
/// Order: `(+x,+y) (-x,+y) (+x,-y) (-x,-y) (+y,+x) (-y,+x) (+y,-x) (-y,-x)`.
/// A reflection outside the `i32` grid is `None`.
#[must_use]
pub fn octant_points(center: GridPoint, x: i64, y: i64) -> [Option<GridPoint>; 8] {
    let at = |dx: i64, dy: i64| {
        let col = i32::try_from(i64::from(center.col) + dx).ok()?;
        let row = i32::try_from(i64::from(center.row) + dy).ok()?;
        Some(GridPoint::new(col, row))
    };
    [
        at(x, y),
        at(-x, y),
        at(x, -y),
        at(-x, -y),
        at(y, x),
        at(-y, x),
        at(y, -x),
        at(-y, -x),
    ]
}

/// Emit the reflections of `(x, y)`. Cells outside the grid are dropped,
/// never wrapped; [`Circle::fits_grid`] circles lose none.
#[inline]
fn emit_octants<S: CellSink + ?Sized>(sink: &mut S, center: GridPoint, x: i64, y: i64) {
    for cell in octant_points(center, x, y).into_iter().flatten() {
        sink.paint(cell);
    }
}

/// Bresenham circle.
///
/// `d` tracks the summed squared-distance error of the two candidate cells.
/// The update uses the position before the step; a step that lands below the
/// diagonal (`y < x`) ends the octant without being emitted.
fn bresenham<S: CellSink + ?Sized>(circle: Circle, sink: &mut S) {
    let r = i64::from(circle.radius);
    let mut x = 0;
    let mut y = r;
    let mut d = 3 - 2 * r;

    emit_octants(sink, circle.center, x, y);

    loop {
        if d > 0 {
            d += 4 * (x - y) + 10;
            y -= 1;
        } else {
            d += 4 * x + 6;
        }
        x += 1;

        if y < x {
            break;
        }
        emit_octants(sink, circle.center, x, y);
    }
}

/// Midpoint circle.
///
/// `p` is the circle function at the midpoint between the two candidate rows,
/// shifted to stay integral. Updated after stepping.
fn midpoint<S: CellSink + ?Sized>(circle: Circle, sink: &mut S) {
    let r = i64::from(circle.radius);
    let mut x = 0;
    let mut y = r;
    let mut p = 1 - r;

    emit_octants(sink, circle.center, x, y);

    while x < y {
        x += 1;
        if p < 0 {
            p += 2 * x + 1;
        } else {
            y -= 1;
            p += 2 * (x - y) + 1;
        }
        emit_octants(sink, circle.center, x, y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn set(algorithm: CircleAlgorithm, cx: i32, cy: i32, r: u32) -> BTreeSet<GridPoint> {
        algorithm.rasterize(&Circle::new(GridPoint::new(cx, cy), r)).to_set()
    }

    #[test]
    fn test_octant_points_order() {
        let pts = octant_points(GridPoint::new(10, 10), 1, 3);
        let expected = [(11, 13), (9, 13), (11, 7), (9, 7), (13, 11), (7, 11), (13, 9), (7, 9)];
        for (pt, (col, row)) in pts.into_iter().zip(expected) {
            assert_eq!(pt, Some(GridPoint::new(col, row)));
        }
    }

    #[test]
    fn test_octant_points_outside_grid_are_none() {
        let pts = octant_points(GridPoint::new(i32::MAX, 0), 1, 2);
        assert_eq!(pts[0], None);
        assert_eq!(pts[1], Some(GridPoint::new(i32::MAX - 1, 2)));
        assert_eq!(pts[4], None);
    }

    #[test]
    fn test_circle_at_grid_edge_never_wraps() {
        let center = GridPoint::new(i32::MAX - 1, 0);
        for algorithm in CircleAlgorithm::ALL {
            let cells = algorithm.rasterize(&Circle::new(center, 3));
            assert!(!cells.is_empty());
            for cell in &cells {
                assert!(cell.col >= i32::MAX - 4, "{algorithm:?} wrapped to {cell}");
                assert!(cell.chebyshev(center) <= 3);
            }
            // the in-range half matches the unclipped ring shifted back
            let reference = algorithm.rasterize(&Circle::new(GridPoint::ORIGIN, 3));
            let kept: BTreeSet<GridPoint> = reference
                .iter()
                .filter(|c| c.col <= 1)
                .map(|c| GridPoint::new(i32::MAX - 1 + c.col, c.row))
                .collect();
            assert_eq!(cells.to_set(), kept);
        }
    }

    #[test]
    fn test_zero_radius_is_center_only() {
        for algorithm in CircleAlgorithm::ALL {
            let cells = algorithm.rasterize(&Circle::new(GridPoint::new(3, 4), 0));
            // one degenerate octant expansion
            assert_eq!(cells.len(), 8);
            assert_eq!(cells.to_set(), BTreeSet::from([GridPoint::new(3, 4)]));
        }
    }

    #[test]
    fn test_radius_one() {
        let expected = BTreeSet::from([
            GridPoint::new(0, 1),
            GridPoint::new(0, -1),
            GridPoint::new(1, 0),
            GridPoint::new(-1, 0),
        ]);
        for algorithm in CircleAlgorithm::ALL {
            assert_eq!(set(algorithm, 0, 0, 1), expected);
        }
    }

    #[test]
    fn test_radius_five_octant_walk() {
        let bres = CircleAlgorithm::Bresenham.rasterize(&Circle::new(GridPoint::ORIGIN, 5));
        let mid = CircleAlgorithm::Midpoint.rasterize(&Circle::new(GridPoint::ORIGIN, 5));

        // Bresenham: (0,5) (1,5) (2,5) (3,4); midpoint adds the mirrored (4,3)
        assert_eq!(bres.len(), 32);
        assert_eq!(mid.len(), 40);
        assert_eq!(bres.to_set().len(), 28);
        assert_eq!(bres.to_set(), mid.to_set());
        assert!(bres.to_set().contains(&GridPoint::new(3, 4)));
        assert!(bres.to_set().contains(&GridPoint::new(-4, 3)));
    }

    #[test]
    fn test_first_emission_is_top_of_circle() {
        for algorithm in CircleAlgorithm::ALL {
            let cells = algorithm.rasterize(&Circle::new(GridPoint::new(10, 10), 5));
            assert_eq!(cells.first(), Some(GridPoint::new(10, 15)));
        }
    }

    #[test]
    fn test_algorithms_agree_small_radii() {
        for r in 0..50 {
            assert_eq!(
                set(CircleAlgorithm::Bresenham, 10, 10, r),
                set(CircleAlgorithm::Midpoint, 10, 10, r),
                "radius {r}"
            );
        }
    }
}
