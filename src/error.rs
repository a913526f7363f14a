//! Error types for the selection and color pipeline.

use thiserror::Error;

/// A color string matched neither the hex nor the rgb/rgba grammar when
/// channel extraction was attempted.
///
/// Raised instead of guessing channels: a string that cannot be classified
/// never silently decodes to zeros.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot parse color string {color:?}")]
pub struct ColorParseError {
    /// The offending input, verbatim.
    pub color: String,
}

impl ColorParseError {
    pub(crate) fn new(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
        }
    }
}

/// The surface did not expose a click-event container at `attach` time.
///
/// Nothing was bound; the caller may retry once the surface has finished
/// rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("surface is not ready: no click-event container to bind to")]
pub struct SurfaceNotReadyError;
