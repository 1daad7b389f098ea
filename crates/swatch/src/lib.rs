#![deny(unsafe_code)]
//! Swatch rendering for hsl-adjust suggestions.
//!
//! Turns a list of [`Suggestion`]s into an RGBA strip (always available) and
//! writes it as a PNG (feature `png`, default on). Both the CLI and any
//! canvas-based front end share the same buffer layout.
//!
//! [`Suggestion`]: hsl_adjust_core::Suggestion

pub mod pixel;

#[cfg(feature = "png")]
pub mod snapshot;

pub use pixel::{strip_dimensions, swatches_to_rgba};
