#![deny(unsafe_code)]
//! Core color engine for hsl-adjust.
//!
//! Provides RGB/HSL/hex conversion (`color`), SASS-style `adjust-color`
//! (`adjust`), search ranges (`range`), the brute-force inverse search
//! (`search`), exploratory suggestion sweeps (`suggest`), JSON search presets
//! (`preset`) and parameter helpers (`params`). Everything is pure and
//! stateless apart from the caller-owned [`CancelToken`].

pub mod adjust;
pub mod color;
pub mod error;
pub mod params;
pub mod preset;
pub mod range;
pub mod search;
pub mod suggest;

pub use adjust::{adjust, AdjustmentDelta, Adjuster};
pub use color::{hex_to_rgb, hsl_to_rgb, rgb_to_hex, rgb_to_hsl, HexColor, Hsl, Rgb, Rgb8};
pub use error::ColorError;
pub use preset::SearchPreset;
pub use range::{DeltaGrid, SearchRange, SearchRanges};
#[cfg(feature = "parallel")]
pub use search::find_adjustment_par;
pub use search::{
    find_adjustment, find_adjustment_from, find_adjustment_with_cancel, CancelToken,
    SearchOutcome,
};
pub use suggest::{enumerate_suggestions, Axis, Suggestion, Suggestions, Sweep};
