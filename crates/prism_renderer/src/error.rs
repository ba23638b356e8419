//! Render-pass errors.

use thiserror::Error;

/// Errors that abort a render pass.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("cannot cast ray at {axis} = {coord}, image spans [0, {extent})")]
    PixelOutOfRange {
        axis: &'static str,
        coord: f64,
        extent: u32,
    },
}

/// Result type for rendering operations.
pub type RenderResult<T> = Result<T, RenderError>;
