//! Framebuffer-backed paint surface.
//!
//! [`GridSurface`] is the host side of a pass: it clears the canvas, draws the
//! grid and the geometry markers, then receives rasterized cells as a
//! [`CellSink`] and fills one cell rectangle per cell.

use crate::cells::CellSink;
use crate::color::{Palette, Rgba};
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::geometry::{GridConfig, GridPoint};
use crate::instrument::Instrumentation;
use crate::mapper::CoordinateMapper;
use crate::scene::{run_pass, Scene};

/// Default logical canvas side, in pixels.
pub const DEFAULT_CANVAS_PX: u32 = 400;

/// Paint surface over an RGBA framebuffer.
#[derive(Debug, Clone)]
pub struct GridSurface {
    fb: Framebuffer,
    mapper: CoordinateMapper,
    palette: Palette,
    painted: usize,
    skipped: usize,
}

impl GridSurface {
    /// Create a surface of `width_px × height_px` logical pixels.
    ///
    /// The framebuffer is allocated at device size, i.e. multiplied by the
    /// grid's scale.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid configuration is invalid or the device
    /// size rounds to zero.
    pub fn new(width_px: u32, height_px: u32, grid: GridConfig) -> Result<Self> {
        grid.validate()?;
        let device = |logical: u32| (f64::from(logical) * grid.scale).round() as u32;
        let fb = Framebuffer::new(device(width_px), device(height_px))?;

        Ok(Self {
            fb,
            mapper: CoordinateMapper::new(grid),
            palette: Palette::default(),
            painted: 0,
            skipped: 0,
        })
    }

    /// Replace the palette.
    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Underlying framebuffer.
    #[must_use]
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.fb
    }

    /// Consume the surface, keeping the framebuffer.
    #[must_use]
    pub fn into_framebuffer(self) -> Framebuffer {
        self.fb
    }

    /// Palette in use.
    #[must_use]
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Cells painted since the last [`Self::begin_pass`].
    #[must_use]
    pub const fn painted(&self) -> usize {
        self.painted
    }

    /// Cells received since the last [`Self::begin_pass`] that fell entirely
    /// outside the surface.
    #[must_use]
    pub const fn skipped(&self) -> usize {
        self.skipped
    }

    /// Number of whole or partial cell columns and rows on the surface.
    #[must_use]
    pub fn grid_extent(&self) -> (u32, u32) {
        let pitch = self.mapper.config().cell_pitch();
        let cells = |px: u32| (f64::from(px) / pitch).ceil() as u32;
        (cells(self.fb.width()), cells(self.fb.height()))
    }

    /// Reset the surface for a new pass: background, grid lines, and the
    /// markers of the selected algorithm kind.
    pub fn begin_pass(&mut self, scene: &Scene) {
        self.painted = 0;
        self.skipped = 0;
        self.fb.clear(self.palette.background);
        self.draw_grid_lines();

        if scene.algorithm.is_line() {
            if let Some(start) = scene.line_start {
                self.fill_cell(start, self.palette.line_start);
            }
            if let Some(end) = scene.line_end {
                self.fill_cell(end, self.palette.line_end);
            }
        } else if let Some(center) = scene.circle_center {
            self.fill_cell(center, self.palette.circle_center);
        }
    }

    fn draw_grid_lines(&mut self) {
        let pitch = self.mapper.config().cell_pitch();
        let (cols, rows) = self.grid_extent();
        let (width, height) = (self.fb.width(), self.fb.height());
        let color = self.palette.grid;

        for k in 0..=cols {
            let x = (f64::from(k) * pitch).floor() as u32;
            self.fb.fill_rect(x, 0, 1, height, color);
        }
        for k in 0..=rows {
            let y = (f64::from(k) * pitch).floor() as u32;
            self.fb.fill_rect(0, y, width, 1, color);
        }
    }

    /// Fill the rectangle of one cell, clipped to the surface.
    ///
    /// Returns `false` when no pixel of the cell is on the surface.
    pub fn fill_cell(&mut self, cell: GridPoint, color: Rgba) -> bool {
        let rect = self.mapper.cell_rect(cell);
        let left = rect.x.floor().max(0.0);
        let top = rect.y.floor().max(0.0);
        let right = rect.right().floor().min(f64::from(self.fb.width()));
        let bottom = rect.bottom().floor().min(f64::from(self.fb.height()));

        if right <= left || bottom <= top {
            return false;
        }

        self.fb.fill_rect(
            left as u32,
            top as u32,
            (right - left) as u32,
            (bottom - top) as u32,
            color,
        );
        true
    }
}

impl CellSink for GridSurface {
    fn paint(&mut self, cell: GridPoint) {
        if self.fill_cell(cell, self.palette.cell) {
            self.painted += 1;
        } else {
            self.skipped += 1;
            tracing::trace!(%cell, "cell outside surface");
        }
    }
}

/// Run a complete pass for `scene` on a fresh surface.
///
/// # Errors
///
/// Returns an error if the surface cannot be allocated.
pub fn draw_scene(
    scene: &Scene,
    width_px: u32,
    height_px: u32,
) -> Result<(GridSurface, Instrumentation)> {
    let mut surface = GridSurface::new(width_px, height_px, scene.grid)?;
    let mut instrumentation = Instrumentation::new();
    surface.begin_pass(scene);
    run_pass(scene, &mut surface, &mut instrumentation);
    Ok((surface, instrumentation))
}
