//! PNG output of a suggestion strip.
//!
//! This module is feature-gated behind `png` (default on) so that WASM builds
//! can share the pixel layout without pulling in the `image` crate.

use hsl_adjust_core::{ColorError, Suggestion};
use std::path::Path;

use crate::pixel::{strip_dimensions, swatches_to_rgba};

/// Writes suggestions as a horizontal strip of `cell`-pixel squares.
///
/// Returns `ColorError::InvalidDimensions` for empty input, a zero cell, or
/// dimensions that overflow `u32`, and `ColorError::Io` on write failure.
pub fn write_png(swatches: &[Suggestion], cell: usize, path: &Path) -> Result<(), ColorError> {
    if swatches.is_empty() || cell == 0 {
        return Err(ColorError::InvalidDimensions);
    }
    let (width, height) = strip_dimensions(swatches.len(), cell);
    let w = u32::try_from(width).map_err(|_| ColorError::InvalidDimensions)?;
    let h = u32::try_from(height).map_err(|_| ColorError::InvalidDimensions)?;
    let rgba = swatches_to_rgba(swatches, cell);
    let img = image::RgbaImage::from_raw(w, h, rgba)
        .ok_or_else(|| ColorError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| ColorError::Io(e.to_string()))
}
