//! Rendering error types.

use thiserror::Error;

/// Errors that can occur while reading or writing rendered images.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Image encoding or decoding failed.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// The file extension does not name a supported image format.
    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),

    /// Pixel data does not match the stated dimensions.
    #[error("invalid image data")]
    InvalidImageData,
}

/// A specialized Result type for rendering operations.
pub type RenderResult<T> = std::result::Result<T, RenderError>;
