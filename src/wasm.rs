//! WebAssembly bindings for grid-raster.
//!
//! Exposes the rasterizers and the paint surface to a browser host.
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { rasterize, grid_cell, render_png } from 'grid-raster';
//!
//! await init();
//!
//! // Flat [col, row, col, row, ...]
//! const cells = rasterize('bresenhamLine', 2, 2, 8, 5);
//!
//! // Pointer position to cell
//! const [col, row] = grid_cell(event.offsetX, event.offsetY, 20, 1.0);
//!
//! // Full pass as PNG
//! const png = render_png('midpointCircle', 10, 10, 5, 0, 20, 1.0, 400, 400);
//! const blob = new Blob([png], { type: 'image/png' });
//! document.getElementById('grid').src = URL.createObjectURL(blob);
//! ```

use wasm_bindgen::prelude::*;

use crate::error::Result;
use crate::geometry::{Circle, GridConfig, GridPoint, Segment};
use crate::mapper::{CoordinateMapper, CANVAS_BORDER_PX};
use crate::output::PngEncoder;
use crate::raster::{AlgorithmId, DrawRequest};
use crate::scene::Scene;
use crate::surface::draw_scene;

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Interpret the four numeric arguments for `algorithm`.
///
/// Lines read `(a, b) → (c, d)`; circles read center `(a, b)`, radius `c`.
fn draw_request(algorithm: &str, a: i32, b: i32, c: i32, d: i32) -> Result<DrawRequest> {
    let id: AlgorithmId = algorithm.parse()?;
    if id.is_line() {
        DrawRequest::new(id, Segment::from_coords(a, b, c, d))
    } else {
        DrawRequest::new(id, Circle::from_signed(GridPoint::new(a, b), i64::from(c))?)
    }
}

fn scene_for(request: DrawRequest, grid: GridConfig) -> Scene {
    let mut scene = Scene { grid, ..Scene::default() };
    scene.select_algorithm(request.algorithm_id());
    match request {
        DrawRequest::Line { segment, .. } => {
            scene.line_start = Some(segment.start);
            scene.line_end = Some(segment.end);
        }
        DrawRequest::Circle { circle, .. } => {
            scene.circle_center = Some(circle.center);
            scene.circle_radius = Some(circle.radius);
        }
    }
    scene
}

/// Rasterize one primitive and return its cells flattened to
/// `[col, row, col, row, ...]` in emission order.
///
/// # Errors
///
/// Returns an error for an unknown algorithm or a negative radius.
#[wasm_bindgen]
pub fn rasterize(algorithm: &str, a: i32, b: i32, c: i32, d: i32) -> std::result::Result<Vec<i32>, JsValue> {
    let cells = draw_request(algorithm, a, b, c, d).map_err(js_error)?.rasterize();
    Ok(cells.iter().flat_map(|p| [p.col, p.row]).collect())
}

/// Map a canvas pointer position (border included) to `[col, row]`.
///
/// # Errors
///
/// Returns an error for an invalid grid or a non-finite position.
#[wasm_bindgen]
pub fn grid_cell(x: f64, y: f64, cell_size_px: f64, scale: f64) -> std::result::Result<Vec<i32>, JsValue> {
    let grid = GridConfig::new(cell_size_px, scale).map_err(js_error)?;
    let cell = CoordinateMapper::new(grid)
        .with_origin(CANVAS_BORDER_PX, CANVAS_BORDER_PX)
        .try_map(x, y)
        .map_err(js_error)?;
    Ok(vec![cell.col, cell.row])
}

/// Run a full pass and return it as PNG bytes.
///
/// # Errors
///
/// Returns an error for invalid arguments or if encoding fails.
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn render_png(
    algorithm: &str,
    a: i32,
    b: i32,
    c: i32,
    d: i32,
    cell_size_px: f64,
    scale: f64,
    width_px: u32,
    height_px: u32,
) -> std::result::Result<Vec<u8>, JsValue> {
    let request = draw_request(algorithm, a, b, c, d).map_err(js_error)?;
    let grid = GridConfig::new(cell_size_px, scale).map_err(js_error)?;
    let (surface, _) = draw_scene(&scene_for(request, grid), width_px, height_px).map_err(js_error)?;
    PngEncoder::to_bytes(surface.framebuffer()).map_err(js_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::scene::render;

    #[test]
    fn test_draw_request_line() {
        let request = draw_request("bresenhamLine", 2, 2, 8, 5).unwrap();
        assert_eq!(request.rasterize().len(), 7);
    }

    #[test]
    fn test_draw_request_circle_ignores_d() {
        let a = draw_request("midpointCircle", 3, 3, 2, 0).unwrap();
        let b = draw_request("midpointCircle", 3, 3, 2, 99).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_draw_request_errors() {
        assert!(matches!(draw_request("wu", 0, 0, 1, 1), Err(Error::UnknownAlgorithm(_))));
        assert!(matches!(draw_request("bresenhamCircle", 0, 0, -1, 0), Err(Error::NegativeRadius(-1))));
        assert!(matches!(
            draw_request("midpointCircle", i32::MAX - 1, 0, 3, 0),
            Err(Error::CircleOutOfRange { radius: 3, .. })
        ));
    }

    #[test]
    fn test_scene_for_renders_same_cells() {
        let request = draw_request("dda", 0, 0, 4, 2).unwrap();
        let scene = scene_for(request, GridConfig::default());
        assert_eq!(render(&scene), Some(request.rasterize()));
    }

    #[test]
    fn test_rasterize_flattens() {
        let flat = rasterize("naiveSlope", 0, 0, 2, 0).unwrap();
        assert_eq!(flat, vec![0, 0, 1, 0, 2, 0]);
    }

    #[test]
    fn test_grid_cell() {
        assert_eq!(grid_cell(41.0, 20.0, 20.0, 1.0).unwrap(), vec![2, 0]);
    }

    #[test]
    fn test_render_png_magic() {
        let bytes = render_png("bresenhamLine", 2, 2, 8, 5, 20.0, 1.0, 100, 100).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
    }
}
