//! Exploratory suggestion sets: fixed sweeps of deltas applied to a base
//! color, producing labeled swatches.
//!
//! Unlike the search there is no termination condition; a sweep always
//! yields its full sequence. [`Suggestions`] is lazy and can be restarted.

use crate::adjust::{Adjuster, AdjustmentDelta};
use crate::color::{HexColor, Rgb8};
use crate::error::ColorError;
use crate::params::{param_bool, param_range, param_range_fields};
use crate::range::{DeltaGrid, SearchRange, SearchRanges};
use serde::Serialize;
use serde_json::Value;

/// Recognized axis names, in [`Axis`] order.
const AXIS_NAMES: &[&str] = &["hue", "saturation", "lightness"];

/// Recognized sweep names: one per axis plus the joint sweep.
const SWEEP_NAMES: &[&str] = &["hue", "saturation", "lightness", "all"];

/// One of the three adjustment axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Hue,
    Saturation,
    Lightness,
}

impl Axis {
    /// Looks up an axis by name.
    ///
    /// Returns `ColorError::UnknownAxis` if the name is not recognized.
    pub fn from_name(name: &str) -> Result<Self, ColorError> {
        match name {
            "hue" => Ok(Axis::Hue),
            "saturation" => Ok(Axis::Saturation),
            "lightness" => Ok(Axis::Lightness),
            _ => Err(ColorError::UnknownAxis(name.to_string())),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Axis::Hue => "hue",
            Axis::Saturation => "saturation",
            Axis::Lightness => "lightness",
        }
    }

    pub fn list_names() -> &'static [&'static str] {
        AXIS_NAMES
    }
}

/// A sequence of deltas to apply to a base color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sweep {
    /// Vary one axis, holding the other two at zero.
    Single { axis: Axis, range: SearchRange },
    /// Vary all three axes (hue outermost). With `skip_extremes`, results
    /// that land on pure black or pure white are dropped.
    Joint {
        ranges: SearchRanges,
        skip_extremes: bool,
    },
}

impl Sweep {
    /// The curated default sweep for one axis.
    pub fn curated(axis: Axis) -> Self {
        let range = match axis {
            Axis::Hue => SearchRange {
                start: -180.0,
                end: 180.0,
                interval: 30.0,
            },
            Axis::Saturation | Axis::Lightness => SearchRange {
                start: -50.0,
                end: 50.0,
                interval: 10.0,
            },
        };
        Sweep::Single { axis, range }
    }

    /// The curated joint sweep: hue ±60 by 30, saturation and lightness ±20 by 10.
    pub fn curated_joint() -> Self {
        let narrow = SearchRange {
            start: -20.0,
            end: 20.0,
            interval: 10.0,
        };
        Sweep::Joint {
            ranges: SearchRanges::new(
                SearchRange {
                    start: -60.0,
                    end: 60.0,
                    interval: 30.0,
                },
                narrow,
                narrow,
            ),
            skip_extremes: true,
        }
    }

    /// Looks up a curated sweep by name (`hue`, `saturation`, `lightness`, `all`).
    pub fn from_name(name: &str) -> Result<Self, ColorError> {
        match name {
            "all" => Ok(Sweep::curated_joint()),
            other => Axis::from_name(other).map(Sweep::curated),
        }
    }

    /// Builds a named sweep with JSON overrides applied to the curated defaults.
    ///
    /// Single-axis sweeps read `start`, `end`, `interval` from the top level.
    /// The `all` sweep reads per-axis objects `hue`, `saturation`, `lightness`
    /// and a `skip_extremes` flag. Unknown keys are ignored.
    pub fn from_json(name: &str, params: &Value) -> Result<Self, ColorError> {
        let sweep = match Sweep::from_name(name)? {
            Sweep::Single { axis, range } => Sweep::Single {
                axis,
                range: param_range_fields(params, range),
            },
            Sweep::Joint {
                ranges,
                skip_extremes,
            } => Sweep::Joint {
                ranges: SearchRanges::new(
                    param_range(params, "hue", ranges.hue),
                    param_range(params, "saturation", ranges.saturation),
                    param_range(params, "lightness", ranges.lightness),
                ),
                skip_extremes: param_bool(params, "skip_extremes", skip_extremes),
            },
        };
        sweep.ranges().validate()?;
        Ok(sweep)
    }

    pub fn list_names() -> &'static [&'static str] {
        SWEEP_NAMES
    }

    /// The three per-axis ranges this sweep walks. Fixed axes are single points at zero.
    pub fn ranges(&self) -> SearchRanges {
        match *self {
            Sweep::Single { axis, range } => {
                let zero = SearchRange::point(0.0);
                match axis {
                    Axis::Hue => SearchRanges::new(range, zero, zero),
                    Axis::Saturation => SearchRanges::new(zero, range, zero),
                    Axis::Lightness => SearchRanges::new(zero, zero, range),
                }
            }
            Sweep::Joint { ranges, .. } => ranges,
        }
    }

    fn skip_extremes(&self) -> bool {
        matches!(
            self,
            Sweep::Joint {
                skip_extremes: true,
                ..
            }
        )
    }
}

/// One swatch: the delta applied and the resulting color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Suggestion {
    pub delta: AdjustmentDelta,
    pub color: HexColor,
}

impl Suggestion {
    pub fn label(&self) -> String {
        self.delta.to_string()
    }
}

/// Lazy, finite sequence of [`Suggestion`]s for one base color and sweep.
#[derive(Debug, Clone)]
pub struct Suggestions {
    adjuster: Adjuster,
    grid: DeltaGrid,
    skip_extremes: bool,
}

impl Suggestions {
    pub fn base(&self) -> HexColor {
        self.adjuster.base().to_hex()
    }

    /// Rewinds to the first suggestion.
    pub fn restart(&mut self) {
        self.grid.restart();
    }
}

impl Iterator for Suggestions {
    type Item = Suggestion;

    fn next(&mut self) -> Option<Suggestion> {
        loop {
            let delta = self.grid.next()?;
            let rgb = self.adjuster.apply_rgb(delta);
            if self.skip_extremes && (rgb == Rgb8::BLACK || rgb == Rgb8::WHITE) {
                continue;
            }
            return Some(Suggestion {
                delta,
                color: rgb.to_hex(),
            });
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (remaining, upper) = self.grid.size_hint();
        if self.skip_extremes {
            (0, upper)
        } else {
            (remaining, upper)
        }
    }
}

/// Applies every delta of `sweep` to `base`.
///
/// Fails if `base` is not a valid hex color or a sweep range is invalid.
pub fn enumerate_suggestions(base: &str, sweep: &Sweep) -> Result<Suggestions, ColorError> {
    Ok(Suggestions {
        adjuster: Adjuster::from_hex(base)?,
        grid: DeltaGrid::new(sweep.ranges())?,
        skip_extremes: sweep.skip_extremes(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adjust::adjust;
    use serde_json::json;

    #[test]
    fn axis_names_round_trip() {
        for name in Axis::list_names() {
            assert_eq!(Axis::from_name(name).unwrap().name(), *name);
        }
    }

    #[test]
    fn unknown_axis_is_an_error() {
        assert!(matches!(
            Axis::from_name("chroma"),
            Err(ColorError::UnknownAxis(_))
        ));
        assert!(Sweep::from_name("chroma").is_err());
    }

    #[test]
    fn curated_hue_sweep_covers_full_circle() {
        let suggestions: Vec<_> = enumerate_suggestions("C0D4ED", &Sweep::curated(Axis::Hue))
            .unwrap()
            .collect();
        assert_eq!(suggestions.len(), 13);
        assert_eq!(suggestions[0].delta, AdjustmentDelta::new(-180.0, 0.0, 0.0));
        assert_eq!(suggestions[6].delta, AdjustmentDelta::default());
        assert_eq!(suggestions[6].color.to_string(), "C0D4ED");
    }

    #[test]
    fn single_axis_sweep_holds_other_axes_at_zero() {
        for s in enumerate_suggestions("C0D4ED", &Sweep::curated(Axis::Lightness)).unwrap() {
            assert_eq!(s.delta.hue, 0.0);
            assert_eq!(s.delta.saturation, 0.0);
        }
    }

    #[test]
    fn suggestion_colors_match_adjust() {
        for s in enumerate_suggestions("336699", &Sweep::curated(Axis::Saturation)).unwrap() {
            let expected = adjust("336699", s.delta.hue, s.delta.saturation, s.delta.lightness)
                .unwrap();
            assert_eq!(s.color, expected, "{}", s.label());
        }
    }

    #[test]
    fn curated_joint_sweep_size() {
        let unfiltered = Sweep::Joint {
            ranges: Sweep::curated_joint().ranges(),
            skip_extremes: false,
        };
        assert_eq!(
            enumerate_suggestions("C0D4ED", &unfiltered).unwrap().count(),
            125
        );
    }

    #[test]
    fn joint_sweep_skips_black_and_white() {
        let lightness = SearchRange {
            start: -60.0,
            end: 60.0,
            interval: 30.0,
        };
        let ranges =
            SearchRanges::new(SearchRange::point(0.0), SearchRange::point(0.0), lightness);

        let kept: Vec<String> = enumerate_suggestions(
            "808080",
            &Sweep::Joint {
                ranges,
                skip_extremes: false,
            },
        )
        .unwrap()
        .map(|s| s.color.to_string())
        .collect();
        assert!(kept.contains(&"000000".to_string()));
        assert!(kept.contains(&"FFFFFF".to_string()));

        let filtered: Vec<String> = enumerate_suggestions(
            "808080",
            &Sweep::Joint {
                ranges,
                skip_extremes: true,
            },
        )
        .unwrap()
        .map(|s| s.color.to_string())
        .collect();
        assert_eq!(filtered.len(), kept.len() - 2);
        assert!(!filtered.iter().any(|c| c == "000000" || c == "FFFFFF"));
    }

    #[test]
    fn suggestions_restart_replays_sequence() {
        let mut suggestions =
            enumerate_suggestions("C0D4ED", &Sweep::curated(Axis::Hue)).unwrap();
        let replay = suggestions.clone();
        let first: Vec<_> = suggestions.by_ref().collect();
        assert_eq!(suggestions.next(), None);
        suggestions.restart();
        let second: Vec<_> = suggestions.collect();
        assert_eq!(first, second);
        assert_eq!(first, replay.collect::<Vec<_>>());
    }

    #[test]
    fn invalid_base_is_an_error() {
        assert!(matches!(
            enumerate_suggestions("nope", &Sweep::curated(Axis::Hue)),
            Err(ColorError::InvalidColorFormat(_))
        ));
    }

    #[test]
    fn from_json_overrides_single_axis_range() {
        let sweep = Sweep::from_json("hue", &json!({"start": -30, "end": 30, "interval": 15}))
            .unwrap();
        let count = enumerate_suggestions("C0D4ED", &sweep).unwrap().count();
        assert_eq!(count, 5);
    }

    #[test]
    fn from_json_overrides_joint_axes_and_flag() {
        let sweep = Sweep::from_json(
            "all",
            &json!({
                "hue": {"start": 0, "end": 0},
                "saturation": {"start": 0, "end": 0},
                "skip_extremes": false
            }),
        )
        .unwrap();
        match sweep {
            Sweep::Joint {
                ranges,
                skip_extremes,
            } => {
                assert!(!skip_extremes);
                assert_eq!(ranges.hue.len(), 1);
                assert_eq!(ranges.saturation.len(), 1);
                assert_eq!(ranges.lightness.len(), 5);
            }
            Sweep::Single { .. } => panic!("expected a joint sweep"),
        }
    }

    #[test]
    fn from_json_rejects_zero_interval() {
        assert!(matches!(
            Sweep::from_json("lightness", &json!({"interval": 0})),
            Err(ColorError::InvalidRange(_))
        ));
    }

    #[test]
    fn from_json_empty_params_equals_curated() {
        assert_eq!(
            Sweep::from_json("saturation", &json!({})).unwrap(),
            Sweep::curated(Axis::Saturation)
        );
    }

    #[test]
    fn suggestion_serializes_delta_and_hex() {
        let s = enumerate_suggestions("C0D4ED", &Sweep::curated(Axis::Hue))
            .unwrap()
            .nth(6)
            .unwrap();
        let v = serde_json::to_value(s).unwrap();
        assert_eq!(v["color"], "C0D4ED");
        assert_eq!(v["delta"]["hue"], 0.0);
    }
}
