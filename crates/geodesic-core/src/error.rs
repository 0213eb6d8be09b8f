//! Error types for geodesic sphere generation with rich diagnostics.
//!
//! Each error carries a machine-readable code in the format `GEO-XXXX`:
//! - `GEO-1xxx`: configuration errors (bad parameters, rejected before any
//!   geometry is built)
//! - `GEO-2xxx`: geometry errors (degenerate data encountered mid-pipeline)
//! - `GEO-3xxx`: I/O errors (STL export)
//!
//! # Example
//!
//! ```rust,ignore
//! use geodesic_core::{GeodesicError, ErrorCode};
//!
//! let err = GeodesicError::invalid_factor("hollow_factor", 1.5);
//! println!("Error code: {}", err.code()); // GEO-1002
//! ```

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for geodesic operations.
pub type GeodesicResult<T> = Result<T, GeodesicError>;

/// Machine-readable error codes for geodesic operations.
///
/// Codes follow the pattern `GEO-XXXX` where:
/// - 1xxx = configuration errors
/// - 2xxx = geometry errors
/// - 3xxx = I/O errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Configuration errors (1xxx)
    /// GEO-1001: Subdivision frequency exceeds the resource guard
    InvalidFrequency = 1001,
    /// GEO-1002: Hollow or thickness factor outside [0, 1]
    InvalidFactor = 1002,
    /// GEO-1003: Sphere radius is non-positive or non-finite
    InvalidRadius = 1003,

    // Geometry errors (2xxx)
    /// GEO-2001: Vertex too close to the origin to project
    DegenerateVertex = 2001,

    // I/O errors (3xxx)
    /// GEO-3001: Failed to write STL file
    IoWrite = 3001,
}

impl ErrorCode {
    /// Returns the error code as a string in the format `GEO-XXXX`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidFrequency => "GEO-1001",
            ErrorCode::InvalidFactor => "GEO-1002",
            ErrorCode::InvalidRadius => "GEO-1003",
            ErrorCode::DegenerateVertex => "GEO-2001",
            ErrorCode::IoWrite => "GEO-3001",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors that can occur during geodesic sphere generation.
///
/// Configuration errors are raised before any geometric work begins;
/// geometry errors abort the pipeline stage that detected them.
#[derive(Debug, Error, Diagnostic)]
pub enum GeodesicError {
    /// Subdivision frequency exceeds the resource guard.
    #[error("subdivision frequency {frequency} exceeds the maximum of {max}")]
    #[diagnostic(
        code(geodesic::config::frequency),
        help(
            "Face count grows as 20 * 4^frequency; frequency {max} already yields millions of faces. Use a smaller frequency."
        )
    )]
    InvalidFrequency { frequency: u32, max: u32 },

    /// Hollow or thickness factor outside the unit interval.
    #[error("invalid {name}: {value} is outside [0, 1]")]
    #[diagnostic(
        code(geodesic::config::factor),
        help("Both the hollow factor and the thickness factor must be between 0.0 and 1.0 inclusive.")
    )]
    InvalidFactor { name: &'static str, value: f64 },

    /// Non-positive or non-finite sphere radius.
    #[error("invalid radius: {radius} (must be positive and finite)")]
    #[diagnostic(code(geodesic::config::radius))]
    InvalidRadius { radius: f64 },

    /// Vertex too close to the origin to project onto the sphere.
    #[error(
        "cannot project vertex {vertex_index} at ({x:.6}, {y:.6}, {z:.6}): distance from origin is numerically zero"
    )]
    #[diagnostic(
        code(geodesic::geometry::degenerate_vertex),
        help("Radial projection divides by the vertex norm; a vertex at the origin has no defined direction.")
    )]
    DegenerateVertex {
        vertex_index: usize,
        x: f64,
        y: f64,
        z: f64,
    },

    /// Error writing an STL file.
    #[error("failed to write STL to {path}")]
    #[diagnostic(
        code(geodesic::io::write),
        help("Check that the directory exists and is writable")
    )]
    IoWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GeodesicError {
    /// Returns the machine-readable error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            GeodesicError::InvalidFrequency { .. } => ErrorCode::InvalidFrequency,
            GeodesicError::InvalidFactor { .. } => ErrorCode::InvalidFactor,
            GeodesicError::InvalidRadius { .. } => ErrorCode::InvalidRadius,
            GeodesicError::DegenerateVertex { .. } => ErrorCode::DegenerateVertex,
            GeodesicError::IoWrite { .. } => ErrorCode::IoWrite,
        }
    }

    /// Returns true if this is a configuration error (caller can fix the
    /// parameters and retry).
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            GeodesicError::InvalidFrequency { .. }
                | GeodesicError::InvalidFactor { .. }
                | GeodesicError::InvalidRadius { .. }
        )
    }

    // Constructor helpers

    /// Create an invalid frequency error.
    pub fn invalid_frequency(frequency: u32, max: u32) -> Self {
        GeodesicError::InvalidFrequency { frequency, max }
    }

    /// Create an invalid factor error.
    pub fn invalid_factor(name: &'static str, value: f64) -> Self {
        GeodesicError::InvalidFactor { name, value }
    }

    /// Create an invalid radius error.
    pub fn invalid_radius(radius: f64) -> Self {
        GeodesicError::InvalidRadius { radius }
    }

    /// Create a degenerate vertex error.
    pub fn degenerate_vertex(vertex_index: usize, position: [f64; 3]) -> Self {
        GeodesicError::DegenerateVertex {
            vertex_index,
            x: position[0],
            y: position[1],
            z: position[2],
        }
    }

    /// Create an I/O write error.
    pub fn io_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GeodesicError::IoWrite {
            path: path.into(),
            source,
        }
    }
}
