//! Pointer-to-grid coordinate mapping.
//!
//! Cell `(c, r)` is painted over the half-open pixel rectangle
//! `[c·pitch, (c+1)·pitch) × [r·pitch, (r+1)·pitch)` where
//! `pitch = cell_size_px · scale`. [`CoordinateMapper::map`] is the exact
//! discrete inverse of that rectangle mapping, shifted by the pointer origin:
//! cell edges are compared using the same products that place them, so a
//! position maps to `c` exactly when `origin + c·pitch <= p < origin + (c+1)·pitch`.

use crate::error::{Error, Result};
use crate::geometry::{GridConfig, GridPoint, Rect};

/// Border width, in pixels, of the host canvas element.
/// Pointer positions are measured from the outer edge, so the host subtracts it.
pub const CANVAS_BORDER_PX: f64 = 1.0;

/// Converts pointer positions into grid cells and back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    config: GridConfig,
    origin_x: f64,
    origin_y: f64,
}

impl CoordinateMapper {
    /// Create a mapper with the pointer origin at `(0, 0)`.
    #[must_use]
    pub const fn new(config: GridConfig) -> Self {
        Self { config, origin_x: 0.0, origin_y: 0.0 }
    }

    /// Set the pixel position of the grid origin in pointer space.
    #[must_use]
    pub const fn with_origin(mut self, x: f64, y: f64) -> Self {
        self.origin_x = x;
        self.origin_y = y;
        self
    }

    /// Grid configuration in use.
    #[must_use]
    pub const fn config(&self) -> GridConfig {
        self.config
    }

    /// Map a pointer position to the cell under it.
    ///
    /// Total over finite input: negative and off-surface positions map to
    /// off-screen cells. Non-finite input saturates; use [`Self::try_map`] at
    /// a boundary that can receive it.
    #[must_use]
    pub fn map(&self, x: f64, y: f64) -> GridPoint {
        let pitch = self.config.cell_pitch();
        GridPoint::new(axis_cell(x, self.origin_x, pitch), axis_cell(y, self.origin_y, pitch))
    }

    /// Map a pointer position, rejecting NaN and infinities.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonFiniteCoordinate`] if either coordinate is not finite.
    pub fn try_map(&self, x: f64, y: f64) -> Result<GridPoint> {
        if !x.is_finite() || !y.is_finite() {
            return Err(Error::NonFiniteCoordinate { x, y });
        }
        Ok(self.map(x, y))
    }

    /// Pointer-space position of the top-left corner of a cell.
    #[must_use]
    pub fn cell_origin(&self, cell: GridPoint) -> (f64, f64) {
        let rect = self.cell_rect(cell);
        (self.origin_x + rect.x, self.origin_y + rect.y)
    }

    /// Surface-space rectangle painted for a cell, in device pixels.
    #[must_use]
    pub fn cell_rect(&self, cell: GridPoint) -> Rect {
        let pitch = self.config.cell_pitch();
        Rect::new(f64::from(cell.col) * pitch, f64::from(cell.row) * pitch, pitch, pitch)
    }
}

/// Cell index `c` on one axis with `origin + c·pitch <= pos < origin + (c+1)·pitch`.
///
/// The quotient estimate can be off by one near an edge; the comparison
/// against the edge products settles it.
fn axis_cell(pos: f64, origin: f64, pitch: f64) -> i32 {
    let edge = |c: f64| origin + c * pitch;
    let mut c = ((pos - origin) / pitch).floor();
    if edge(c + 1.0) <= pos {
        c += 1.0;
    } else if edge(c) > pos {
        c -= 1.0;
    }
    c as i32
}

/// Largest float strictly below `v`.
#[cfg(test)]
fn just_below(v: f64) -> f64 {
    if v > 0.0 {
        f64::from_bits(v.to_bits() - 1)
    } else if v < 0.0 {
        f64::from_bits(v.to_bits() + 1)
    } else {
        -f64::from_bits(1)
    }
}
