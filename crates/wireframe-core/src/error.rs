//! Error types for wireframe-rs.

use thiserror::Error;

/// The main error type for loading and validating wireframe inputs.
#[derive(Error, Debug)]
pub enum WireframeError {
    /// An edge references a vertex that does not exist.
    #[error("edge {edge} references vertex {index}, but the model has {vertex_count} vertices")]
    EdgeIndexOutOfRange {
        edge: usize,
        index: usize,
        vertex_count: usize,
    },

    /// Image dimensions must both be positive.
    #[error("invalid image dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Focal length must be positive and finite.
    #[error("invalid focal length {0}")]
    InvalidFocalLength(f64),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for wireframe-rs operations.
pub type Result<T> = std::result::Result<T, WireframeError>;
