//! Error types for grid-raster operations.
//!
//! The rasterization core is total over its documented inputs and never
//! returns these. They are produced at the boundary, where host input is
//! turned into core values, and by the host-side surface, encoders and
//! configuration loader.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in grid-raster operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Invalid dimensions for a framebuffer or canvas.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Algorithm tag outside the known set.
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// Algorithm tag paired with the wrong kind of geometry.
    #[error("Algorithm {algorithm} cannot rasterize a {geometry}")]
    AlgorithmMismatch {
        /// Algorithm tag.
        algorithm: &'static str,
        /// Geometry kind that was supplied.
        geometry: &'static str,
    },

    /// Circle radius below zero.
    #[error("Negative radius: {0}")]
    NegativeRadius(i64),

    /// Circle whose extent `center ± radius` leaves the `i32` grid.
    #[error("Circle at ({col}, {row}) with radius {radius} exceeds the grid coordinate range")]
    CircleOutOfRange {
        /// Center column.
        col: i32,
        /// Center row.
        row: i32,
        /// Requested radius.
        radius: i64,
    },

    /// Pixel coordinate that is NaN or infinite.
    #[error("Non-finite pixel coordinate: ({x}, {y})")]
    NonFiniteCoordinate {
        /// X coordinate in pixels.
        x: f64,
        /// Y coordinate in pixels.
        y: f64,
    },

    /// Cell size or scale that is not finite and strictly positive.
    #[error("Invalid grid configuration: cell size {cell_size_px} px, scale {scale}")]
    InvalidGridConfig {
        /// Cell size in pixels.
        cell_size_px: f64,
        /// Display scale.
        scale: f64,
    },

    /// Grid point text that is not `col,row`.
    #[error("Invalid grid point: {0}")]
    InvalidPoint(String),

    /// Configuration parsing error with line number.
    #[error("configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed).
        line: usize,
        /// Error message describing the issue.
        message: String,
    },

    /// Configuration file not found.
    #[error("configuration file not found: {0}")]
    ConfigNotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidDimensions { width: 0, height: 100 };
        assert!(err.to_string().contains("Invalid dimensions"));
    }

    #[test]
    fn test_algorithm_mismatch_names_both_sides() {
        let err = Error::AlgorithmMismatch { algorithm: "dda", geometry: "circle" };
        let msg = err.to_string();
        assert!(msg.contains("dda"));
        assert!(msg.contains("circle"));
    }

    #[test]
    fn test_negative_radius() {
        let err = Error::NegativeRadius(-3);
        assert!(err.to_string().contains("-3"));
    }

    #[test]
    fn test_io_error_converts() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
