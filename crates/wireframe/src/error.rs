//! Error type for the facade crate.

use thiserror::Error;
use wireframe_core::WireframeError;
use wireframe_render::RenderError;

/// Errors from loading inputs, rendering, or comparing against references.
#[derive(Error, Debug)]
pub enum Error {
    /// Model or config loading failed.
    #[error(transparent)]
    Core(#[from] WireframeError),

    /// Image encoding, decoding, or writing failed.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Reading or writing a reference file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A reference file could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for wireframe-rs operations.
pub type Result<T> = std::result::Result<T, Error>;
