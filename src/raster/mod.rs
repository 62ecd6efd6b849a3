//! Rasterization of line segments and circles onto grid cells.
//!
//! # Algorithms
//!
//! - **Naive slope**: real-valued slope, one rounded sample per major-axis step
//! - **DDA**: Digital Differential Analyzer, fixed real increments on both axes
//! - **Bresenham line**: integer error accumulation
//! - **Bresenham circle**: two-candidate integer decision variable
//! - **Midpoint circle**: midpoint integer decision variable
//!
//! Every algorithm is pure and total over its geometry. Selection is a tagged
//! variant ([`AlgorithmId`] / [`Algorithm`]) dispatched through one
//! [`Rasterizer`] capability per geometry kind.
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Bresenham, J. E. (1977). "A linear algorithm for incremental digital display
//!   of circular arcs." *CACM* 20(2).

mod circle;
mod line;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cells::{CellSequence, CellSink};
use crate::error::{Error, Result};
use crate::geometry::{Circle, Segment};

pub use circle::{octant_points, CircleAlgorithm};
pub use line::{round_half_up, LineAlgorithm};

/// Capability shared by every algorithm that rasterizes geometry `G`.
pub trait Rasterizer<G> {
    /// Emit the cells approximating `geometry` into `sink`, in order.
    fn rasterize_into<S: CellSink + ?Sized>(&self, geometry: &G, sink: &mut S);

    /// Collect the cells approximating `geometry`.
    fn rasterize(&self, geometry: &G) -> CellSequence {
        let mut cells = CellSequence::new();
        self.rasterize_into(geometry, &mut cells);
        cells
    }
}

/// Rasterize a segment with the given line algorithm.
#[must_use]
pub fn rasterize_line(algorithm: LineAlgorithm, segment: Segment) -> CellSequence {
    algorithm.rasterize(&segment)
}

/// Rasterize a circle with the given circle algorithm.
#[must_use]
pub fn rasterize_circle(algorithm: CircleAlgorithm, circle: Circle) -> CellSequence {
    algorithm.rasterize(&circle)
}

/// Algorithm tag as exchanged with hosts and configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AlgorithmId {
    /// Naive slope line.
    NaiveSlope,
    /// DDA line.
    Dda,
    /// Bresenham line.
    #[default]
    BresenhamLine,
    /// Bresenham circle.
    BresenhamCircle,
    /// Midpoint circle.
    MidpointCircle,
}

impl AlgorithmId {
    /// Every tag, lines first.
    pub const ALL: [Self; 5] = [
        Self::NaiveSlope,
        Self::Dda,
        Self::BresenhamLine,
        Self::BresenhamCircle,
        Self::MidpointCircle,
    ];

    /// Canonical tag string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NaiveSlope => "naiveSlope",
            Self::Dda => "dda",
            Self::BresenhamLine => "bresenhamLine",
            Self::BresenhamCircle => "bresenhamCircle",
            Self::MidpointCircle => "midpointCircle",
        }
    }

    /// Resolve the tag to its typed algorithm.
    #[must_use]
    pub const fn algorithm(self) -> Algorithm {
        match self {
            Self::NaiveSlope => Algorithm::Line(LineAlgorithm::NaiveSlope),
            Self::Dda => Algorithm::Line(LineAlgorithm::Dda),
            Self::BresenhamLine => Algorithm::Line(LineAlgorithm::Bresenham),
            Self::BresenhamCircle => Algorithm::Circle(CircleAlgorithm::Bresenham),
            Self::MidpointCircle => Algorithm::Circle(CircleAlgorithm::Midpoint),
        }
    }

    /// Whether the tag names a line algorithm.
    #[must_use]
    pub const fn is_line(self) -> bool {
        matches!(self.algorithm(), Algorithm::Line(_))
    }

    /// Whether the tag names a circle algorithm.
    #[must_use]
    pub const fn is_circle(self) -> bool {
        matches!(self.algorithm(), Algorithm::Circle(_))
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlgorithmId {
    type Err = Error;

    /// Accepts the canonical tags, the legacy form tags `simpleLine` and
    /// `ddaLine`, and kebab/snake-case spellings, case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        let key: String =
            s.chars().filter(|c| *c != '-' && *c != '_').collect::<String>().to_ascii_lowercase();
        match key.as_str() {
            "naiveslope" | "naive" | "simpleline" | "simple" => Ok(Self::NaiveSlope),
            "dda" | "ddaline" => Ok(Self::Dda),
            "bresenhamline" | "bresenham" => Ok(Self::BresenhamLine),
            "bresenhamcircle" => Ok(Self::BresenhamCircle),
            "midpointcircle" | "midpoint" => Ok(Self::MidpointCircle),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl From<LineAlgorithm> for AlgorithmId {
    fn from(algorithm: LineAlgorithm) -> Self {
        match algorithm {
            LineAlgorithm::NaiveSlope => Self::NaiveSlope,
            LineAlgorithm::Dda => Self::Dda,
            LineAlgorithm::Bresenham => Self::BresenhamLine,
        }
    }
}

impl From<CircleAlgorithm> for AlgorithmId {
    fn from(algorithm: CircleAlgorithm) -> Self {
        match algorithm {
            CircleAlgorithm::Bresenham => Self::BresenhamCircle,
            CircleAlgorithm::Midpoint => Self::MidpointCircle,
        }
    }
}

/// Typed algorithm, split by the geometry it consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Line algorithm.
    Line(LineAlgorithm),
    /// Circle algorithm.
    Circle(CircleAlgorithm),
}

/// Geometry submitted for rasterization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Geometry {
    /// Line segment.
    Segment(Segment),
    /// Circle.
    Circle(Circle),
}

impl Geometry {
    /// Kind name used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Segment(_) => "segment",
            Self::Circle(_) => "circle",
        }
    }
}

impl From<Segment> for Geometry {
    fn from(segment: Segment) -> Self {
        Self::Segment(segment)
    }
}

impl From<Circle> for Geometry {
    fn from(circle: Circle) -> Self {
        Self::Circle(circle)
    }
}

/// A validated (algorithm, geometry) pair.
///
/// Construction is the boundary check: once built, rasterization cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawRequest {
    /// Line request.
    Line {
        /// Line algorithm.
        algorithm: LineAlgorithm,
        /// Segment to rasterize.
        segment: Segment,
    },
    /// Circle request.
    Circle {
        /// Circle algorithm.
        algorithm: CircleAlgorithm,
        /// Circle to rasterize.
        circle: Circle,
    },
}

impl DrawRequest {
    /// Pair an algorithm tag with geometry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlgorithmMismatch`] when a line tag is paired with a
    /// circle or a circle tag with a segment, and [`Error::CircleOutOfRange`]
    /// for a circle reaching past the `i32` grid.
    pub fn new(id: AlgorithmId, geometry: impl Into<Geometry>) -> Result<Self> {
        match (id.algorithm(), geometry.into()) {
            (Algorithm::Line(algorithm), Geometry::Segment(segment)) => {
                Ok(Self::Line { algorithm, segment })
            }
            (Algorithm::Circle(algorithm), Geometry::Circle(circle)) => {
                circle.validate()?;
                Ok(Self::Circle { algorithm, circle })
            }
            (_, geometry) => {
                Err(Error::AlgorithmMismatch { algorithm: id.as_str(), geometry: geometry.kind() })
            }
        }
    }

    /// Algorithm tag of this request.
    #[must_use]
    pub fn algorithm_id(&self) -> AlgorithmId {
        match *self {
            Self::Line { algorithm, .. } => algorithm.into(),
            Self::Circle { algorithm, .. } => algorithm.into(),
        }
    }

    /// Emit the request's cells into a sink.
    pub fn rasterize_into<S: CellSink + ?Sized>(&self, sink: &mut S) {
        match self {
            Self::Line { algorithm, segment } => algorithm.rasterize_into(segment, sink),
            Self::Circle { algorithm, circle } => algorithm.rasterize_into(circle, sink),
        }
    }

    /// Collect the request's cells.
    #[must_use]
    pub fn rasterize(&self) -> CellSequence {
        let mut cells = CellSequence::new();
        self.rasterize_into(&mut cells);
        cells
    }
}
