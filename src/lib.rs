//! # Grid-Raster
//!
//! Scan-conversion of lines and circles onto a discrete grid of cells.
//!
//! The core is a set of pure rasterizers: each takes integer geometry and
//! emits the ordered sequence of grid cells approximating it. Everything
//! else (the scene, the pixel surface, encoders, configuration) is host code
//! built around that core.
//!
//! ## Algorithms
//!
//! - **Lines**: naive slope-intercept, DDA, Bresenham (integer error term)
//! - **Circles**: Bresenham (`d = 3 - 2r`) and midpoint (`p = 1 - r`), both
//!   using eight-way octant symmetry
//!
//! ## Quick Start
//!
//! ```rust
//! use grid_raster::prelude::*;
//!
//! let segment = Segment::from_coords(2, 2, 8, 5);
//! let cells = LineAlgorithm::Bresenham.rasterize(&segment);
//! assert_eq!(cells.len(), 7);
//! assert_eq!(cells.last(), Some(GridPoint::new(8, 5)));
//!
//! let ring = CircleAlgorithm::Midpoint.rasterize(&Circle::new(GridPoint::new(10, 10), 5));
//! assert_eq!(ring.to_set().len(), 28);
//! ```
//!
//! ## Feature Flags
//!
//! - `cli`: the `grid-raster` binary (clap, tracing-subscriber, dirs)
//! - `wasm`: wasm-bindgen exports for a browser host

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics/rasterization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Grid points, segments, circles, and the grid configuration.
pub mod geometry;

/// Cell sequences and the sink trait rasterizers emit into.
pub mod cells;

/// Line and circle rasterizers.
pub mod raster;

/// Pixel to cell mapping.
pub mod mapper;

/// Pass timing.
pub mod instrument;

// ============================================================================
// Host Modules
// ============================================================================

/// Scene state, click handling, and the render pass.
pub mod scene;

/// Color types for the paint surface.
pub mod color;

/// RGBA framebuffer.
pub mod framebuffer;

/// Framebuffer-backed cell surface.
pub mod surface;

/// Output encoders (PNG, terminal).
pub mod output;

/// YAML configuration.
pub mod config;

/// WebAssembly bindings for browser usage.
#[cfg(feature = "wasm")]
#[cfg_attr(docsrs, doc(cfg(feature = "wasm")))]
pub mod wasm;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for grid-raster operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use grid_raster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::cells::{CellSequence, CellSink};
    pub use crate::color::{Palette, Rgba};
    pub use crate::config::Config;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{Circle, GridConfig, GridPoint, Segment};
    pub use crate::instrument::Instrumentation;
    pub use crate::mapper::CoordinateMapper;
    pub use crate::output::{PngEncoder, TerminalEncoder, TerminalMode};
    pub use crate::raster::{AlgorithmId, CircleAlgorithm, DrawRequest, LineAlgorithm, Rasterizer};
    pub use crate::scene::{render, run_pass, Scene};
    pub use crate::surface::{draw_scene, GridSurface};
}
