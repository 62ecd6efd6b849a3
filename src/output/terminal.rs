//! Terminal output encoder.
//!
//! Renders a cell sequence onto a character grid, one character per cell,
//! row 0 at the top. Two modes:
//! - ASCII: `#` for painted cells, `.` for empty ones
//! - Unicode: `█` and `·`
//!
//! Markers (`S` line start, `E` line end, `C` circle center) are drawn first
//! and painted cells overwrite them, as on the pixel surface.
//!
//! Without an explicit origin the window starts at cell `(0, 0)`, moved left
//! or up as far as needed to show every cell and marker.

use crate::cells::CellSequence;
use crate::geometry::GridPoint;
use crate::scene::Scene;

/// Terminal rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TerminalMode {
    /// Plain ASCII (widest compatibility)
    #[default]
    Ascii,
    /// Unicode block and middle dot
    Unicode,
}

impl TerminalMode {
    const fn glyphs(self) -> (char, char) {
        match self {
            Self::Ascii => ('#', '.'),
            Self::Unicode => ('█', '·'),
        }
    }
}

/// Terminal encoder configuration.
#[derive(Debug, Clone)]
pub struct TerminalEncoder {
    mode: TerminalMode,
    origin: Option<GridPoint>,
    columns: Option<u32>,
    rows: Option<u32>,
    markers: bool,
}

impl Default for TerminalEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalEncoder {
    /// Create a new terminal encoder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self { mode: TerminalMode::default(), origin: None, columns: None, rows: None, markers: true }
    }

    /// Set the rendering mode.
    #[must_use]
    pub fn mode(mut self, mode: TerminalMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the top-left cell of the window.
    /// If not set, the window starts at the leftmost and topmost cell drawn,
    /// or at `(0, 0)` when every cell lies right of and below it.
    #[must_use]
    pub fn origin(mut self, origin: GridPoint) -> Self {
        self.origin = Some(origin);
        self
    }

    /// Set the window width in cells.
    /// If not set, the window extends to the rightmost cell drawn.
    #[must_use]
    pub fn columns(mut self, columns: u32) -> Self {
        self.columns = Some(columns);
        self
    }

    /// Set the window height in cells.
    /// If not set, the window extends to the lowest cell drawn.
    #[must_use]
    pub fn rows(mut self, rows: u32) -> Self {
        self.rows = Some(rows);
        self
    }

    /// Enable or disable scene markers in [`Self::render_scene`].
    #[must_use]
    pub fn markers(mut self, markers: bool) -> Self {
        self.markers = markers;
        self
    }

    /// Render cells without markers.
    #[must_use]
    pub fn render(&self, cells: &CellSequence) -> String {
        self.render_layers(&[], cells)
    }

    /// Render cells with the markers of `scene`'s selected algorithm kind.
    #[must_use]
    pub fn render_scene(&self, scene: &Scene, cells: &CellSequence) -> String {
        if !self.markers {
            return self.render(cells);
        }

        let mut marks = Vec::with_capacity(2);
        if scene.algorithm.is_line() {
            marks.extend(scene.line_start.map(|p| (p, 'S')));
            marks.extend(scene.line_end.map(|p| (p, 'E')));
        } else {
            marks.extend(scene.circle_center.map(|p| (p, 'C')));
        }
        self.render_layers(&marks, cells)
    }

    fn render_layers(&self, marks: &[(GridPoint, char)], cells: &CellSequence) -> String {
        let (filled, empty) = self.mode.glyphs();
        let points: Vec<(GridPoint, char)> =
            marks.iter().copied().chain(cells.iter().map(|&c| (c, filled))).collect();
        let origin = self.window_origin(&points);
        let (width, height) = self.window(origin, &points);
        let mut canvas = vec![vec![empty; width]; height];

        for &(point, glyph) in &points {
            if let Some((x, y)) = slot(origin, point, width, height) {
                canvas[y][x] = glyph;
            }
        }

        let mut output = String::with_capacity((width * self.mode_width() + 1) * height);
        for row in canvas {
            output.extend(row);
            output.push('\n');
        }
        output
    }

    const fn mode_width(&self) -> usize {
        match self.mode {
            TerminalMode::Ascii => 1,
            TerminalMode::Unicode => 3,
        }
    }

    fn window_origin(&self, points: &[(GridPoint, char)]) -> (i64, i64) {
        if let Some(origin) = self.origin {
            return (i64::from(origin.col), i64::from(origin.row));
        }
        points.iter().fold((0, 0), |(col, row), (p, _)| {
            (col.min(i64::from(p.col)), row.min(i64::from(p.row)))
        })
    }

    fn window(&self, origin: (i64, i64), points: &[(GridPoint, char)]) -> (usize, usize) {
        let extent = points.iter().fold((1_i64, 1_i64), |(w, h), (p, _)| {
            let dx = i64::from(p.col) - origin.0 + 1;
            let dy = i64::from(p.row) - origin.1 + 1;
            (w.max(dx), h.max(dy))
        });

        let width = self.columns.map_or(extent.0, i64::from);
        let height = self.rows.map_or(extent.1, i64::from);
        (usize::try_from(width).unwrap_or(0), usize::try_from(height).unwrap_or(0))
    }
}

fn slot(origin: (i64, i64), point: GridPoint, width: usize, height: usize) -> Option<(usize, usize)> {
    let x = usize::try_from(i64::from(point.col) - origin.0).ok()?;
    let y = usize::try_from(i64::from(point.row) - origin.1).ok()?;
    (x < width && y < height).then_some((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::AlgorithmId;
    use crate::scene::render;

    fn seq(points: &[(i32, i32)]) -> CellSequence {
        points.iter().copied().map(GridPoint::from).collect()
    }

    #[test]
    fn test_ascii_render() {
        let out = TerminalEncoder::new().render(&seq(&[(0, 0), (1, 1), (2, 1)]));
        assert_eq!(out, "#..\n.##\n");
    }

    #[test]
    fn test_unicode_render() {
        let out = TerminalEncoder::new().mode(TerminalMode::Unicode).render(&seq(&[(1, 0)]));
        assert_eq!(out, "·█\n");
    }

    #[test]
    fn test_fixed_window_clips() {
        let out = TerminalEncoder::new()
            .origin(GridPoint::ORIGIN)
            .columns(2)
            .rows(1)
            .render(&seq(&[(0, 0), (5, 0), (-1, 0), (0, 3)]));
        assert_eq!(out, "#.\n");
    }

    #[test]
    fn test_origin_shifts_window() {
        let out = TerminalEncoder::new().origin(GridPoint::new(-1, -1)).render(&seq(&[(-1, -1), (0, 0)]));
        assert_eq!(out, "#.\n.#\n");
    }

    #[test]
    fn test_negative_cells_extend_window_without_origin() {
        let out = TerminalEncoder::new().render(&seq(&[(-2, 0), (1, -1)]));
        assert_eq!(out, "...#\n#...\n");

        let positive = TerminalEncoder::new().render(&seq(&[(2, 1)]));
        assert_eq!(positive, "...\n..#\n");
    }

    #[test]
    fn test_circle_around_grid_origin_renders_every_cell() {
        let mut scene = Scene::new();
        scene.select_algorithm(AlgorithmId::BresenhamCircle);
        scene.circle_center = Some(GridPoint::ORIGIN);
        scene.circle_radius = Some(3);
        let cells = render(&scene).unwrap();

        let out = TerminalEncoder::new().markers(false).render_scene(&scene, &cells);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 7);
        assert!(lines.iter().all(|l| l.len() == 7));
        assert_eq!(out.matches('#').count(), cells.to_set().len());

        let marked = TerminalEncoder::new().render_scene(&scene, &cells);
        assert_eq!(marked.lines().nth(3), Some("#..C..#"));
    }

    #[test]
    fn test_empty_sequence_renders_single_empty_cell() {
        assert_eq!(TerminalEncoder::new().render(&CellSequence::new()), ".\n");
    }

    #[test]
    fn test_circle_center_marker() {
        let mut scene = Scene::new();
        scene.select_algorithm(AlgorithmId::MidpointCircle);
        scene.circle_center = Some(GridPoint::new(2, 2));
        scene.circle_radius = Some(2);
        let cells = render(&scene).unwrap();

        let out = TerminalEncoder::new().render_scene(&scene, &cells);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], ".###.");
        assert_eq!(lines[2], "#.C.#");

        let plain = TerminalEncoder::new().markers(false).render_scene(&scene, &cells);
        assert!(!plain.contains('C'));
    }

    #[test]
    fn test_line_markers_are_overwritten_by_cells() {
        let scene = Scene::new();
        let cells = render(&scene).unwrap();
        let out = TerminalEncoder::new().render_scene(&scene, &cells);
        assert!(!out.contains('S'));
        assert!(!out.contains('E'));
        assert_eq!(out.matches('#').count(), 7);
    }
}
