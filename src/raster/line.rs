//! Line segment rasterization.
//!
//! All three algorithms start at `segment.start` and finish at `segment.end`.
//! Their intermediate paths may differ, most visibly at ±1 slope tie-breaks.

use crate::cells::CellSink;
use crate::geometry::{GridPoint, Segment};

use super::Rasterizer;

/// Line rasterization algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineAlgorithm {
    /// Real-valued slope, one rounded sample per major-axis step.
    NaiveSlope,
    /// Digital Differential Analyzer.
    Dda,
    /// Bresenham's integer error accumulation.
    #[default]
    Bresenham,
}

impl LineAlgorithm {
    /// Every line algorithm.
    pub const ALL: [Self; 3] = [Self::NaiveSlope, Self::Dda, Self::Bresenham];
}

impl Rasterizer<Segment> for LineAlgorithm {
    fn rasterize_into<S: CellSink + ?Sized>(&self, segment: &Segment, sink: &mut S) {
        match self {
            Self::NaiveSlope => naive_slope(*segment, sink),
            Self::Dda => dda(*segment, sink),
            Self::Bresenham => bresenham(*segment, sink),
        }
    }
}

/// Round half toward positive infinity: `floor(v + 0.5)`.
///
/// This is the rounding used for every real-valued sample, so `0.5 → 1`
/// and `-0.5 → 0`.
#[inline]
#[must_use]
pub fn round_half_up(v: f64) -> i32 {
    (v + 0.5).floor() as i32
}

/// Naive slope line.
///
/// Iterates the dominant axis one cell at a time, in whichever direction
/// leads to the end point, and evaluates the line equation for the other axis.
/// When `|dx| == |dy|` the row axis drives.
fn naive_slope<S: CellSink + ?Sized>(segment: Segment, sink: &mut S) {
    let GridPoint { col: x0, row: y0 } = segment.start;
    let GridPoint { col: x1, row: y1 } = segment.end;
    let dx = i64::from(x1) - i64::from(x0);
    let dy = i64::from(y1) - i64::from(y0);

    if dx == 0 && dy == 0 {
        sink.paint(segment.start);
        return;
    }

    if dx.abs() > dy.abs() {
        let m = dy as f64 / dx as f64;
        let step = if x0 < x1 { 1 } else { -1 };
        let mut x = x0;
        loop {
            let y = round_half_up(f64::from(y0) + m * (i64::from(x) - i64::from(x0)) as f64);
            sink.paint(GridPoint::new(x, y));
            if x == x1 {
                break;
            }
            x += step;
        }
    } else {
        let m = dx as f64 / dy as f64;
        let step = if y0 < y1 { 1 } else { -1 };
        let mut y = y0;
        loop {
            let x = round_half_up(f64::from(x0) + m * (i64::from(y) - i64::from(y0)) as f64);
            sink.paint(GridPoint::new(x, y));
            if y == y1 {
                break;
            }
            y += step;
        }
    }
}

/// DDA line: `max(|dx|, |dy|) + 1` samples at fixed real increments.
fn dda<S: CellSink + ?Sized>(segment: Segment, sink: &mut S) {
    let dx = i64::from(segment.end.col) - i64::from(segment.start.col);
    let dy = i64::from(segment.end.row) - i64::from(segment.start.row);
    let steps = dx.abs().max(dy.abs());

    if steps == 0 {
        sink.paint(segment.start);
        return;
    }

    let x_inc = dx as f64 / steps as f64;
    let y_inc = dy as f64 / steps as f64;
    let mut x = f64::from(segment.start.col);
    let mut y = f64::from(segment.start.row);

    for _ in 0..=steps {
        sink.paint(GridPoint::new(round_half_up(x), round_half_up(y)));
        x += x_inc;
        y += y_inc;
    }
}

/// Bresenham line with midpoint-halved initial error.
///
/// The classic form starts from `err = (dx > dy ? dx : -dy) / 2`. Keeping the
/// error doubled preserves the half exactly in integer arithmetic. Emits
/// exactly `max(dx, dy) + 1` cells.
fn bresenham<S: CellSink + ?Sized>(segment: Segment, sink: &mut S) {
    let GridPoint { col: x1, row: y1 } = segment.end;
    let mut x = segment.start.col;
    let mut y = segment.start.row;

    let dx = (i64::from(x1) - i64::from(x)).abs();
    let dy = (i64::from(y1) - i64::from(y)).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let sy = if y < y1 { 1 } else { -1 };
    let mut err = if dx > dy { dx } else { -dy };

    loop {
        sink.paint(GridPoint::new(x, y));
        if x == x1 && y == y1 {
            break;
        }

        let e2 = err;
        if e2 > -2 * dx {
            err -= 2 * dy;
            x += sx;
        }
        if e2 < 2 * dy {
            err += 2 * dx;
            y += sy;
        }
    }
}
