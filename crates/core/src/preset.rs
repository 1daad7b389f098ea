//! Reproducible description of an adjustment search.
//!
//! A [`SearchPreset`] captures everything needed to rerun a search: base
//! color, target color and the three per-axis ranges. It is stored as JSON,
//! with colors as hex strings and missing range axes taking their defaults.

use crate::color::HexColor;
use crate::error::ColorError;
use crate::range::SearchRanges;
use crate::search::{find_adjustment_with_cancel, CancelToken, SearchOutcome};
use serde::{Deserialize, Serialize};

/// Base, target and ranges for one search.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SearchPreset {
    pub base: HexColor,
    pub target: HexColor,
    #[serde(default)]
    pub ranges: SearchRanges,
}

impl SearchPreset {
    /// Creates a preset with default ranges.
    pub fn new(base: HexColor, target: HexColor) -> Self {
        Self {
            base,
            target,
            ranges: SearchRanges::default(),
        }
    }

    /// Parses a preset from JSON.
    ///
    /// Returns `ColorError::InvalidPreset` for malformed JSON or colors, and
    /// `ColorError::InvalidRange` for an invalid range.
    pub fn from_json_str(json: &str) -> Result<Self, ColorError> {
        let preset: SearchPreset =
            serde_json::from_str(json).map_err(|e| ColorError::InvalidPreset(e.to_string()))?;
        preset.validate()?;
        Ok(preset)
    }

    pub fn to_json_pretty(&self) -> Result<String, ColorError> {
        serde_json::to_string_pretty(self).map_err(|e| ColorError::InvalidPreset(e.to_string()))
    }

    /// Validates the ranges and that the search space fits in `usize`.
    pub fn validate(&self) -> Result<(), ColorError> {
        self.ranges.validate()?;
        self.ranges.evaluations()?;
        Ok(())
    }

    /// Runs the sequential search this preset describes.
    pub fn run(&self, cancel: &CancelToken) -> Result<SearchOutcome, ColorError> {
        find_adjustment_with_cancel(
            &self.base.to_string(),
            &self.target.to_string(),
            &self.ranges,
            cancel,
        )
    }
}
