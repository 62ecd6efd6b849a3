//! Host scene state and the render pass.
//!
//! A [`Scene`] is what the host's form edits: the selected algorithm, the
//! line endpoints, the circle, and the grid configuration. Every state change
//! is followed by a full pass; [`render`] is the pure part of that pass and
//! [`run_pass`] adds painting and timing.

use std::time::Duration;

use crate::cells::{CellSequence, CellSink};
use crate::error::Result;
use crate::geometry::{Circle, GridConfig, GridPoint, Segment};
use crate::instrument::Instrumentation;
use crate::mapper::{CoordinateMapper, CANVAS_BORDER_PX};
use crate::raster::{Algorithm, AlgorithmId, DrawRequest};

/// Editable state of the visualizer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scene {
    /// Selected algorithm.
    pub algorithm: AlgorithmId,
    /// Line start, once placed.
    pub line_start: Option<GridPoint>,
    /// Line end, once placed.
    pub line_end: Option<GridPoint>,
    /// Circle center, once placed.
    pub circle_center: Option<GridPoint>,
    /// Circle radius, once entered.
    pub circle_radius: Option<u32>,
    /// Grid configuration.
    pub grid: GridConfig,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            algorithm: AlgorithmId::BresenhamLine,
            line_start: Some(GridPoint::new(2, 2)),
            line_end: Some(GridPoint::new(8, 5)),
            circle_center: Some(GridPoint::new(10, 10)),
            circle_radius: Some(5),
            grid: GridConfig::default(),
        }
    }
}

impl Scene {
    /// Create the default scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select an algorithm. Geometry of the other kind is kept for later.
    pub fn select_algorithm(&mut self, algorithm: AlgorithmId) {
        self.algorithm = algorithm;
    }

    /// Set the radius from user input.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NegativeRadius`] for a negative value and
    /// [`crate::Error::CircleOutOfRange`] for one past the grid; the scene is
    /// left unchanged.
    pub fn set_radius(&mut self, radius: i64) -> Result<()> {
        let circle = Circle::from_signed(GridPoint::ORIGIN, radius)?;
        self.circle_radius = Some(circle.radius);
        Ok(())
    }

    /// Mapper from canvas pointer positions to cells, border included.
    #[must_use]
    pub fn mapper(&self) -> CoordinateMapper {
        CoordinateMapper::new(self.grid).with_origin(CANVAS_BORDER_PX, CANVAS_BORDER_PX)
    }

    /// Apply a click on a grid cell.
    ///
    /// Line algorithms place the start, then the end; a third click starts
    /// a new line at the clicked cell and clears the end. Circle algorithms
    /// move the center and drop any line endpoints.
    pub fn click(&mut self, cell: GridPoint) {
        if self.algorithm.is_line() {
            match (self.line_start, self.line_end) {
                (None, _) => self.line_start = Some(cell),
                (Some(_), None) => self.line_end = Some(cell),
                (Some(_), Some(_)) => {
                    self.line_start = Some(cell);
                    self.line_end = None;
                }
            }
        } else {
            self.circle_center = Some(cell);
            self.line_start = None;
            self.line_end = None;
        }
    }

    /// Apply a click at a canvas pointer position.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NonFiniteCoordinate`] for NaN or infinite input.
    pub fn click_pixel(&mut self, x: f64, y: f64) -> Result<GridPoint> {
        let cell = self.mapper().try_map(x, y)?;
        self.click(cell);
        Ok(cell)
    }

    /// The draw request for the selected algorithm, or `None` while the
    /// geometry it needs is incomplete.
    #[must_use]
    pub fn draw_request(&self) -> Option<DrawRequest> {
        match self.algorithm.algorithm() {
            Algorithm::Line(algorithm) => {
                let segment = Segment::new(self.line_start?, self.line_end?);
                Some(DrawRequest::Line { algorithm, segment })
            }
            Algorithm::Circle(algorithm) => {
                let circle = Circle::new(self.circle_center?, self.circle_radius?);
                Some(DrawRequest::Circle { algorithm, circle })
            }
        }
    }
}

/// Cells for the current scene; `None` when the scene is incomplete.
#[must_use]
pub fn render(scene: &Scene) -> Option<CellSequence> {
    scene.draw_request().map(|request| request.rasterize())
}

/// One host pass: rasterize into `sink` under measurement.
///
/// An incomplete scene paints nothing and clears `instrumentation`, so no
/// stale duration survives. Returns the recorded duration.
pub fn run_pass<S: CellSink + ?Sized>(
    scene: &Scene,
    sink: &mut S,
    instrumentation: &mut Instrumentation,
) -> Option<Duration> {
    let Some(request) = scene.draw_request() else {
        instrumentation.clear();
        tracing::debug!(algorithm = %scene.algorithm, "scene incomplete, nothing drawn");
        return None;
    };

    let mut counted = Counted { inner: sink, count: 0 };
    instrumentation.measure(|| request.rasterize_into(&mut counted));
    tracing::debug!(
        algorithm = %request.algorithm_id(),
        cells = counted.count,
        elapsed = %instrumentation.display(),
        "pass drawn"
    );
    instrumentation.elapsed()
}

/// Forwards cells while counting them.
struct Counted<'a, S: ?Sized> {
    inner: &'a mut S,
    count: usize,
}

impl<S: CellSink + ?Sized> CellSink for Counted<'_, S> {
    fn paint(&mut self, cell: GridPoint) {
        self.count += 1;
        self.inner.paint(cell);
    }
}
