//! Per-axis arithmetic progressions and their Cartesian product.
//!
//! A [`SearchRange`] is `start, start + interval, ...` up to `end` inclusive.
//! [`DeltaGrid`] flattens three of them (hue outermost, then saturation, then
//! lightness) into one indexable iterator of [`AdjustmentDelta`]s, which is
//! what both the search and the joint suggestion sweep walk.

use crate::adjust::AdjustmentDelta;
use crate::error::ColorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Slack added before flooring the step count so that decimal intervals
/// (e.g. `0.0:0.3:0.1`) keep their final value despite float error.
const LEN_EPSILON: f64 = 1e-9;

/// Relative overshoot past `end` still treated as rounding error when
/// checking the last value.
const END_TOLERANCE: f64 = 1e-12;

/// An inclusive `start..=end` progression with a positive `interval`.
///
/// Callers are expected to pass `start <= end`; a misordered range is not
/// corrected and simply enumerates nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchRange {
    pub start: f64,
    pub end: f64,
    pub interval: f64,
}

impl SearchRange {
    /// Creates a validated range.
    ///
    /// Returns `ColorError::InvalidRange` if the interval is not a positive
    /// finite number or either bound is not finite.
    pub fn new(start: f64, end: f64, interval: f64) -> Result<Self, ColorError> {
        let range = Self {
            start,
            end,
            interval,
        };
        range.validate()?;
        Ok(range)
    }

    /// A range containing exactly `value`.
    pub fn point(value: f64) -> Self {
        Self {
            start: value,
            end: value,
            interval: 1.0,
        }
    }

    pub fn validate(&self) -> Result<(), ColorError> {
        if !self.interval.is_finite() || self.interval <= 0.0 {
            return Err(ColorError::InvalidRange(format!(
                "interval must be a positive number, got {}",
                self.interval
            )));
        }
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(ColorError::InvalidRange(format!(
                "bounds must be finite, got {}..{}",
                self.start, self.end
            )));
        }
        Ok(())
    }

    /// Number of values: `floor((end - start) / interval) + 1`, or 0 for a
    /// misordered or invalid range. No value lies past `end` beyond float
    /// rounding.
    pub fn len(&self) -> usize {
        if self.validate().is_err() || self.end < self.start {
            return 0;
        }
        let steps = ((self.end - self.start) / self.interval + LEN_EPSILON).floor();
        // `as` saturates at usize::MAX for absurdly fine intervals.
        let len = (steps as usize).saturating_add(1);
        let scale = self.start.abs().max(self.end.abs()).max(self.interval);
        if len > 1 && self.value_at(len - 1) > self.end + scale * END_TOLERANCE {
            len - 1
        } else {
            len
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The `index`-th value, computed from `start` to avoid accumulated drift.
    pub fn value_at(&self, index: usize) -> f64 {
        self.start + index as f64 * self.interval
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + Clone {
        let range = *self;
        (0..range.len()).map(move |i| range.value_at(i))
    }
}

/// Parses `start:end:interval`, e.g. `-10:10:0.5`.
impl FromStr for SearchRange {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        let [start, end, interval] = parts.as_slice() else {
            return Err(ColorError::InvalidRange(format!(
                "expected start:end:interval, got {s:?}"
            )));
        };
        let number = |part: &str, what: &str| -> Result<f64, ColorError> {
            part.trim()
                .parse::<f64>()
                .map_err(|e| ColorError::InvalidRange(format!("invalid {what} {part:?}: {e}")))
        };
        SearchRange::new(
            number(*start, "start")?,
            number(*end, "end")?,
            number(*interval, "interval")?,
        )
    }
}

impl fmt::Display for SearchRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.start, self.end, self.interval)
    }
}

/// One range per adjustment axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchRanges {
    pub hue: SearchRange,
    pub saturation: SearchRange,
    pub lightness: SearchRange,
}

impl Default for SearchRanges {
    fn default() -> Self {
        let around_zero = SearchRange {
            start: -20.0,
            end: 20.0,
            interval: 1.0,
        };
        Self {
            hue: around_zero,
            saturation: around_zero,
            lightness: around_zero,
        }
    }
}

impl SearchRanges {
    pub fn new(hue: SearchRange, saturation: SearchRange, lightness: SearchRange) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Validates each axis, naming the failing one.
    pub fn validate(&self) -> Result<(), ColorError> {
        for (name, range) in self.axes() {
            range
                .validate()
                .map_err(|e| ColorError::InvalidRange(format!("{name}: {e}")))?;
        }
        Ok(())
    }

    /// Total number of candidate deltas.
    ///
    /// Returns `ColorError::InvalidRange` if the product overflows `usize`.
    pub fn evaluations(&self) -> Result<usize, ColorError> {
        self.hue
            .len()
            .checked_mul(self.saturation.len())
            .and_then(|n| n.checked_mul(self.lightness.len()))
            .ok_or_else(|| ColorError::InvalidRange("search space is too large".to_string()))
    }

    fn axes(&self) -> [(&'static str, &SearchRange); 3] {
        [
            ("hue", &self.hue),
            ("saturation", &self.saturation),
            ("lightness", &self.lightness),
        ]
    }
}

/// Flattened Cartesian product of three [`SearchRange`]s.
///
/// Index `i` maps to `(hue, saturation, lightness)` indices in row-major
/// order with hue outermost. Cloning yields an independent cursor.
#[derive(Debug, Clone)]
pub struct DeltaGrid {
    ranges: SearchRanges,
    saturation_len: usize,
    lightness_len: usize,
    total: usize,
    next: usize,
}

impl DeltaGrid {
    pub fn new(ranges: SearchRanges) -> Result<Self, ColorError> {
        ranges.validate()?;
        let total = ranges.evaluations()?;
        Ok(Self {
            ranges,
            saturation_len: ranges.saturation.len(),
            lightness_len: ranges.lightness.len(),
            total,
            next: 0,
        })
    }

    pub fn ranges(&self) -> &SearchRanges {
        &self.ranges
    }

    /// Total number of deltas, independent of the cursor position.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of deltas sharing one hue value.
    pub fn inner_len(&self) -> usize {
        self.saturation_len * self.lightness_len
    }

    /// The delta at flat `index`. `index` must be below [`DeltaGrid::total`].
    pub fn delta_at(&self, index: usize) -> AdjustmentDelta {
        let inner = self.inner_len();
        AdjustmentDelta {
            hue: self.ranges.hue.value_at(index / inner),
            saturation: self
                .ranges
                .saturation
                .value_at((index / self.lightness_len) % self.saturation_len),
            lightness: self.ranges.lightness.value_at(index % self.lightness_len),
        }
    }

    /// Rewinds the cursor to the first delta.
    pub fn restart(&mut self) {
        self.next = 0;
    }
}

impl Iterator for DeltaGrid {
    type Item = AdjustmentDelta;

    fn next(&mut self) -> Option<AdjustmentDelta> {
        if self.next >= self.total {
            return None;
        }
        let delta = self.delta_at(self.next);
        self.next += 1;
        Some(delta)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DeltaGrid {}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(start: f64, end: f64, interval: f64) -> SearchRange {
        SearchRange::new(start, end, interval).unwrap()
    }

    #[test]
    fn len_counts_inclusive_endpoints() {
        assert_eq!(range(0.0, 20.0, 1.0).len(), 21);
        assert_eq!(range(-10.0, 0.0, 1.0).len(), 11);
        assert_eq!(range(0.0, 10.0, 3.0).len(), 4);
    }

    #[test]
    fn len_keeps_final_value_for_decimal_interval() {
        let r = range(0.0, 0.3, 0.1);
        assert_eq!(r.len(), 4);
        assert!((r.value_at(3) - 0.3).abs() < 1e-12);
    }

    #[test]
    fn len_does_not_step_past_end() {
        let r = range(0.0, 2.999_999_999_5, 1.0);
        assert_eq!(r.len(), 3);
        assert_eq!(r.values().collect::<Vec<_>>(), vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn len_keeps_final_value_far_from_zero() {
        let r = range(1e6, 1e6 + 0.3, 0.1);
        assert_eq!(r.len(), 4);
    }

    #[test]
    fn point_range_has_one_value() {
        let r = SearchRange::point(7.5);
        assert_eq!(r.values().collect::<Vec<_>>(), vec![7.5]);
    }

    #[test]
    fn misordered_range_is_empty() {
        let r = range(5.0, -5.0, 1.0);
        assert!(r.is_empty());
        assert_eq!(r.values().count(), 0);
    }

    #[test]
    fn new_rejects_non_positive_interval() {
        assert!(matches!(
            SearchRange::new(0.0, 10.0, 0.0),
            Err(ColorError::InvalidRange(_))
        ));
        assert!(SearchRange::new(0.0, 10.0, -1.0).is_err());
        assert!(SearchRange::new(0.0, 10.0, f64::NAN).is_err());
        assert!(SearchRange::new(0.0, 10.0, f64::INFINITY).is_err());
    }

    #[test]
    fn new_rejects_non_finite_bounds() {
        assert!(SearchRange::new(f64::NEG_INFINITY, 10.0, 1.0).is_err());
        assert!(SearchRange::new(0.0, f64::NAN, 1.0).is_err());
    }

    #[test]
    fn values_are_index_based() {
        let values: Vec<f64> = range(-1.0, 1.0, 0.5).values().collect();
        assert_eq!(values, vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn from_str_parses_negative_bounds() {
        let r: SearchRange = "-10:10:0.5".parse().unwrap();
        assert_eq!(r, range(-10.0, 10.0, 0.5));
        assert_eq!(r.to_string(), "-10:10:0.5");
    }

    #[test]
    fn from_str_rejects_malformed_input() {
        assert!("1:2".parse::<SearchRange>().is_err());
        assert!("1:2:3:4".parse::<SearchRange>().is_err());
        assert!("a:2:1".parse::<SearchRange>().is_err());
        assert!("0:10:0".parse::<SearchRange>().is_err());
    }

    #[test]
    fn ranges_validate_names_failing_axis() {
        let ranges = SearchRanges {
            saturation: SearchRange {
                start: 0.0,
                end: 1.0,
                interval: 0.0,
            },
            ..SearchRanges::default()
        };
        let err = ranges.validate().unwrap_err();
        assert!(err.to_string().contains("saturation"), "got: {err}");
    }

    #[test]
    fn default_ranges_evaluation_count() {
        assert_eq!(SearchRanges::default().evaluations().unwrap(), 41 * 41 * 41);
    }

    #[test]
    fn evaluations_overflow_is_an_error() {
        let huge = SearchRange {
            start: 0.0,
            end: 1e300,
            interval: 1e-300,
        };
        let ranges = SearchRanges::new(huge, huge, huge);
        assert!(matches!(
            ranges.evaluations(),
            Err(ColorError::InvalidRange(_))
        ));
    }

    #[test]
    fn grid_walks_hue_outermost() {
        let ranges = SearchRanges::new(
            range(0.0, 1.0, 1.0),
            range(0.0, 1.0, 1.0),
            range(0.0, 2.0, 1.0),
        );
        let grid = DeltaGrid::new(ranges).unwrap();
        assert_eq!(grid.len(), 12);
        let deltas: Vec<(f64, f64, f64)> = grid
            .map(|d| (d.hue, d.saturation, d.lightness))
            .collect();
        assert_eq!(deltas[0], (0.0, 0.0, 0.0));
        assert_eq!(deltas[1], (0.0, 0.0, 1.0));
        assert_eq!(deltas[3], (0.0, 1.0, 0.0));
        assert_eq!(deltas[6], (1.0, 0.0, 0.0));
        assert_eq!(deltas[11], (1.0, 1.0, 2.0));
    }

    #[test]
    fn grid_restart_replays_sequence() {
        let mut grid = DeltaGrid::new(SearchRanges::new(
            range(0.0, 2.0, 1.0),
            SearchRange::point(0.0),
            SearchRange::point(0.0),
        ))
        .unwrap();
        let first: Vec<_> = grid.by_ref().collect();
        assert_eq!(grid.next(), None);
        grid.restart();
        let second: Vec<_> = grid.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn grid_with_empty_axis_yields_nothing() {
        let grid = DeltaGrid::new(SearchRanges::new(
            range(0.0, 2.0, 1.0),
            range(3.0, 1.0, 1.0),
            SearchRange::point(0.0),
        ))
        .unwrap();
        assert_eq!(grid.total(), 0);
        assert_eq!(grid.count(), 0);
    }

    #[test]
    fn ranges_json_defaults_missing_axes() {
        let ranges: SearchRanges =
            serde_json::from_str(r#"{"hue": {"start": 0, "end": 20, "interval": 1}}"#).unwrap();
        assert_eq!(ranges.hue, range(0.0, 20.0, 1.0));
        assert_eq!(ranges.saturation, SearchRanges::default().saturation);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn values_stay_within_bounds(
                start in -400.0_f64..400.0,
                span in 0.0_f64..400.0,
                interval in 0.01_f64..50.0,
            ) {
                let r = range(start, start + span, interval);
                let len = r.len();
                prop_assert!(len >= 1);
                prop_assert!(r.value_at(len - 1) <= r.end + 1e-9, "{} overshoots {}", r.value_at(len - 1), r.end);
                prop_assert!(r.value_at(len) > r.end - 1e-9, "{} left out before {}", r.value_at(len), r.end);
            }
        }
    }
}
