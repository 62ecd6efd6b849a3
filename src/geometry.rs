//! Geometric primitives for grid rasterization.
//!
//! Grid-space values ([`GridPoint`], [`Segment`], [`Circle`]) are integer and
//! `Copy`; they are built fresh for every draw request. [`GridConfig`] and
//! [`Rect`] live in pixel space.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default cell size in logical pixels.
pub const DEFAULT_CELL_SIZE_PX: f64 = 20.0;

/// Default display scale.
pub const DEFAULT_SCALE: f64 = 1.0;

/// Smallest scale offered by the host's scale control.
pub const MIN_SCALE: f64 = 0.5;

/// Largest scale offered by the host's scale control.
pub const MAX_SCALE: f64 = 2.0;

/// A discrete grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct GridPoint {
    /// Column (x axis, grows to the right).
    pub col: i32,
    /// Row (y axis, grows downwards).
    pub row: i32,
}

impl GridPoint {
    /// Grid origin (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new grid point.
    #[must_use]
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Translate by a column/row offset, or `None` if the result leaves the
    /// `i32` grid.
    #[must_use]
    pub const fn offset(self, dcol: i32, drow: i32) -> Option<Self> {
        match (self.col.checked_add(dcol), self.row.checked_add(drow)) {
            (Some(col), Some(row)) => Some(Self::new(col, row)),
            _ => None,
        }
    }

    /// Chebyshev distance (number of king moves) to another point.
    #[must_use]
    pub fn chebyshev(self, other: Self) -> u32 {
        self.col.abs_diff(other.col).max(self.row.abs_diff(other.row))
    }
}

impl From<(i32, i32)> for GridPoint {
    fn from((col, row): (i32, i32)) -> Self {
        Self::new(col, row)
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

impl FromStr for GridPoint {
    type Err = Error;

    /// Parse `col,row`, with optional surrounding parentheses and spaces.
    fn from_str(s: &str) -> Result<Self> {
        let inner = s.trim().trim_start_matches('(').trim_end_matches(')');
        let (col, row) =
            inner.split_once(',').ok_or_else(|| Error::InvalidPoint(s.to_string()))?;
        let col = col.trim().parse().map_err(|_| Error::InvalidPoint(s.to_string()))?;
        let row = row.trim().parse().map_err(|_| Error::InvalidPoint(s.to_string()))?;
        Ok(Self::new(col, row))
    }
}

/// A line segment between two grid points.
///
/// `start == end` is valid and rasterizes to exactly one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Segment {
    /// Start point.
    pub start: GridPoint,
    /// End point.
    pub end: GridPoint,
}

impl Segment {
    /// Create a new segment.
    #[must_use]
    pub const fn new(start: GridPoint, end: GridPoint) -> Self {
        Self { start, end }
    }

    /// Create a segment from coordinates.
    #[must_use]
    pub const fn from_coords(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self::new(GridPoint::new(x0, y0), GridPoint::new(x1, y1))
    }

    /// Signed column delta `end.col - start.col`, widened so any pair of
    /// endpoints fits.
    #[must_use]
    pub fn dx(&self) -> i64 {
        i64::from(self.end.col) - i64::from(self.start.col)
    }

    /// Signed row delta `end.row - start.row`, widened like [`Self::dx`].
    #[must_use]
    pub fn dy(&self) -> i64 {
        i64::from(self.end.row) - i64::from(self.start.row)
    }

    /// Whether both endpoints coincide.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }
}

/// A circle with an integer center and nonnegative radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Circle {
    /// Center cell.
    pub center: GridPoint,
    /// Radius in cells.
    pub radius: u32,
}

impl Circle {
    /// Create a new circle.
    #[must_use]
    pub const fn new(center: GridPoint, radius: u32) -> Self {
        Self { center, radius }
    }

    /// Create a circle from a signed radius, as entered by a user.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NegativeRadius`] when `radius < 0`, and
    /// [`Error::CircleOutOfRange`] when `center ± radius` does not fit in `i32`.
    pub fn from_signed(center: GridPoint, radius: i64) -> Result<Self> {
        if radius < 0 {
            return Err(Error::NegativeRadius(radius));
        }
        let out_of_range = || Error::CircleOutOfRange { col: center.col, row: center.row, radius };
        if !extent_fits(center, radius) {
            return Err(out_of_range());
        }
        let radius = u32::try_from(radius).map_err(|_| out_of_range())?;
        Ok(Self::new(center, radius))
    }

    /// Whether every cell of the circle's bounding box is addressable.
    #[must_use]
    pub fn fits_grid(&self) -> bool {
        extent_fits(self.center, i64::from(self.radius))
    }

    /// Check [`Self::fits_grid`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::CircleOutOfRange`] otherwise.
    pub fn validate(&self) -> Result<()> {
        if self.fits_grid() {
            Ok(())
        } else {
            Err(Error::CircleOutOfRange {
                col: self.center.col,
                row: self.center.row,
                radius: i64::from(self.radius),
            })
        }
    }
}

fn extent_fits(center: GridPoint, radius: i64) -> bool {
    let range = i64::from(i32::MIN)..=i64::from(i32::MAX);
    [center.col, center.row].into_iter().all(|c| {
        let c = i64::from(c);
        let inside = |v: Option<i64>| v.is_some_and(|v| range.contains(&v));
        inside(c.checked_sub(radius)) && inside(c.checked_add(radius))
    })
}

/// Mapping between grid coordinates and screen pixels.
///
/// Owned and mutated by the host; the rasterization core only reads it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Side of one cell in logical pixels.
    pub cell_size_px: f64,
    /// Display scale applied on top of the logical size.
    pub scale: f64,
}

impl GridConfig {
    /// Create a validated grid configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGridConfig`] if either value is not finite or
    /// not strictly positive.
    pub fn new(cell_size_px: f64, scale: f64) -> Result<Self> {
        let config = Self { cell_size_px, scale };
        config.validate()?;
        Ok(config)
    }

    /// Check that cell size and scale are finite and strictly positive.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGridConfig`] otherwise.
    pub fn validate(&self) -> Result<()> {
        let ok = |v: f64| v.is_finite() && v > 0.0;
        if ok(self.cell_size_px) && ok(self.scale) {
            Ok(())
        } else {
            Err(Error::InvalidGridConfig { cell_size_px: self.cell_size_px, scale: self.scale })
        }
    }

    /// Side of one cell in device pixels (`cell_size_px * scale`).
    #[must_use]
    pub fn cell_pitch(&self) -> f64 {
        self.cell_size_px * self.scale
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { cell_size_px: DEFAULT_CELL_SIZE_PX, scale: DEFAULT_SCALE }
    }
}

/// A rectangle in pixel space defined by position and size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X coordinate of the top-left corner.
    pub x: f64,
    /// Y coordinate of the top-left corner.
    pub y: f64,
    /// Width of the rectangle.
    pub width: f64,
    /// Height of the rectangle.
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Check if a point is inside the half-open rectangle `[x, x+w) × [y, y+h)`.
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    /// Right edge (exclusive).
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_point_parse() {
        assert_eq!("2,3".parse::<GridPoint>().unwrap(), GridPoint::new(2, 3));
        assert_eq!(" (-4, 7) ".parse::<GridPoint>().unwrap(), GridPoint::new(-4, 7));
        assert!("2;3".parse::<GridPoint>().is_err());
        assert!("a,3".parse::<GridPoint>().is_err());
    }

    #[test]
    fn test_grid_point_chebyshev() {
        assert_eq!(GridPoint::new(0, 0).chebyshev(GridPoint::new(3, -5)), 5);
        assert_eq!(GridPoint::new(1, 1).chebyshev(GridPoint::new(1, 1)), 0);
    }

    #[test]
    fn test_segment_deltas() {
        let seg = Segment::from_coords(8, 5, 2, 2);
        assert_eq!(seg.dx(), -6);
        assert_eq!(seg.dy(), -3);
        assert!(!seg.is_degenerate());
        assert!(Segment::from_coords(1, 1, 1, 1).is_degenerate());
    }

    #[test]
    fn test_segment_deltas_span_full_range() {
        let seg = Segment::from_coords(i32::MIN, i32::MAX, i32::MAX, i32::MIN);
        assert_eq!(seg.dx(), i64::from(u32::MAX));
        assert_eq!(seg.dy(), -i64::from(u32::MAX));
    }

    #[test]
    fn test_grid_point_offset() {
        assert_eq!(GridPoint::new(2, 3).offset(-5, 1), Some(GridPoint::new(-3, 4)));
        assert_eq!(GridPoint::new(i32::MAX, 0).offset(1, 0), None);
        assert_eq!(GridPoint::new(0, i32::MIN).offset(0, -1), None);
    }

    #[test]
    fn test_circle_from_signed() {
        let c = Circle::from_signed(GridPoint::new(10, 10), 5).unwrap();
        assert_eq!(c.radius, 5);
        assert!(matches!(
            Circle::from_signed(GridPoint::ORIGIN, -1),
            Err(Error::NegativeRadius(-1))
        ));
    }

    #[test]
    fn test_circle_from_signed_out_of_range() {
        assert!(matches!(
            Circle::from_signed(GridPoint::ORIGIN, 5_000_000_000),
            Err(Error::CircleOutOfRange { radius: 5_000_000_000, .. })
        ));
        assert!(matches!(
            Circle::from_signed(GridPoint::new(i32::MAX - 1, 0), 3),
            Err(Error::CircleOutOfRange { .. })
        ));
        assert!(Circle::from_signed(GridPoint::new(i32::MAX - 3, i32::MIN + 3), 3).is_ok());
        assert!(Circle::from_signed(GridPoint::ORIGIN, i64::MAX).is_err());
        let err = Circle::from_signed(GridPoint::ORIGIN, i64::from(u32::MAX)).unwrap_err();
        assert!(!err.to_string().contains("Negative"));
    }

    #[test]
    fn test_circle_fits_grid() {
        assert!(Circle::new(GridPoint::new(10, 10), 5).fits_grid());
        assert!(Circle::new(GridPoint::ORIGIN, (1 << 31) - 1).fits_grid());
        assert!(!Circle::new(GridPoint::ORIGIN, 1 << 31).fits_grid());
        assert!(Circle::new(GridPoint::new(0, i32::MIN), 1).validate().is_err());
    }

    #[test]
    fn test_grid_config_validation() {
        assert!(GridConfig::new(20.0, 1.0).is_ok());
        assert!(GridConfig::new(0.0, 1.0).is_err());
        assert!(GridConfig::new(20.0, -1.0).is_err());
        assert!(GridConfig::new(f64::NAN, 1.0).is_err());
        assert!(GridConfig::new(20.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_grid_config_pitch() {
        let config = GridConfig::new(20.0, 1.5).unwrap();
        assert!((config.cell_pitch() - 30.0).abs() < 1e-12);
    }

    #[test]
    fn test_rect_contains_half_open() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains(0.0, 0.0));
        assert!(rect.contains(9.99, 9.99));
        assert!(!rect.contains(10.0, 5.0));
    }
}
