//! Error types for the hsl-adjust core.

use thiserror::Error;

/// Errors produced by color parsing, range validation and swatch output.
///
/// A search that exhausts its ranges without a match is not an error; see
/// [`crate::search::SearchOutcome::NotFound`].
#[derive(Debug, Error)]
pub enum ColorError {
    /// A hex color string had the wrong length or a non-hex character.
    #[error("invalid color format: {0}")]
    InvalidColorFormat(String),

    /// A search range had a non-positive or non-finite interval, or non-finite bounds.
    #[error("invalid range: {0}")]
    InvalidRange(String),

    /// A search preset document could not be parsed or serialized.
    #[error("invalid preset: {0}")]
    InvalidPreset(String),

    /// A sweep axis name was not recognized.
    #[error("unknown axis: {0}")]
    UnknownAxis(String),

    /// A swatch image would have zero width or height.
    #[error("invalid dimensions: swatch width and height must be non-zero")]
    InvalidDimensions,

    /// A file write failed.
    #[error("I/O error: {0}")]
    Io(String),
}
