//! Error types for rendering and image output.

use thiserror::Error;

/// Errors from the render entry points.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Invalid resolution {0}: must be at least 1 and fit in memory")]
    InvalidResolution(u32),

    #[error("Pixel buffer has {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },
}

pub type RenderResult<T> = Result<T, RenderError>;

/// Errors that can occur while encoding or writing an image.
#[derive(Error, Debug)]
pub enum ImageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Resolution {0} does not fit in a 16-bit TGA header")]
    ResolutionTooLarge(u32),
}

pub type ImageResult<T> = Result<T, ImageError>;
