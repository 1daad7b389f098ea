//! `adjust-color()` semantics: add a hue/saturation/lightness delta to a base
//! color in HSL space and convert back to 8-bit RGB.

use crate::color::{hsl_to_rgb, HexColor, Hsl, Rgb8};
use crate::error::ColorError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Additive offsets in degrees (hue) and percent (saturation, lightness).
///
/// There is no range restriction; deltas beyond ±360 / ±100 are valid and
/// simply wrap (hue) or clamp (saturation, lightness) after addition.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AdjustmentDelta {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl AdjustmentDelta {
    pub fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }
}

/// Renders the delta as `adjust-color` keyword arguments, e.g.
/// `$hue: 10deg, $saturation: -5%, $lightness: 3%`.
impl fmt::Display for AdjustmentDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "$hue: {}deg, $saturation: {}%, $lightness: {}%",
            self.hue, self.saturation, self.lightness
        )
    }
}

/// A base color with its HSL form computed once.
///
/// Search and suggestion sweeps apply thousands of deltas to the same base;
/// this avoids re-parsing and re-converting it per candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adjuster {
    base: Rgb8,
    hsl: Hsl,
}

impl Adjuster {
    pub fn new(base: Rgb8) -> Self {
        Self {
            base,
            hsl: Hsl::from(base),
        }
    }

    /// Parses the base from a hex string.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        Ok(Self::new(Rgb8::from_hex(hex)?))
    }

    pub fn base(&self) -> Rgb8 {
        self.base
    }

    pub fn base_hsl(&self) -> Hsl {
        self.hsl
    }

    /// Applies `delta`, rounding each channel to the nearest integer and
    /// clamping to [0, 255].
    pub fn apply_rgb(&self, delta: AdjustmentDelta) -> Rgb8 {
        hsl_to_rgb(Hsl {
            h: self.hsl.h + delta.hue,
            s: self.hsl.s + delta.saturation,
            l: self.hsl.l + delta.lightness,
        })
        .to_rgb8()
    }

    pub fn apply(&self, delta: AdjustmentDelta) -> HexColor {
        self.apply_rgb(delta).to_hex()
    }
}

/// Adjusts `base` by the given hue (degrees), saturation and lightness (percent)
/// deltas.
///
/// Pipeline: hex -> RGB -> HSL -> add deltas -> RGB -> round/clamp -> hex.
/// Fails only if `base` is not a valid hex color.
pub fn adjust(
    base: &str,
    hue: f64,
    saturation: f64,
    lightness: f64,
) -> Result<HexColor, ColorError> {
    let adjuster = Adjuster::from_hex(base)?;
    Ok(adjuster.apply(AdjustmentDelta::new(hue, saturation, lightness)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_default_adjustment() {
        let out = adjust("C0D4ED", 0.0, 7.644, -8.627).unwrap();
        assert_eq!(out.to_string(), "99BCE8");
    }

    #[test]
    fn zero_delta_is_identity_for_sample() {
        assert_eq!(adjust("C0D4ED", 0.0, 0.0, 0.0).unwrap().to_string(), "C0D4ED");
    }

    #[test]
    fn hue_rotation_of_red() {
        assert_eq!(adjust("FF0000", 180.0, 0.0, 0.0).unwrap().to_string(), "00FFFF");
        assert_eq!(adjust("FF0000", -240.0, 0.0, 0.0).unwrap().to_string(), "00FF00");
    }

    #[test]
    fn lightness_extremes_clamp_to_black_and_white() {
        assert_eq!(adjust("FF0000", 0.0, 0.0, -50.0).unwrap().to_string(), "000000");
        assert_eq!(adjust("336699", 0.0, 0.0, 500.0).unwrap().to_string(), "FFFFFF");
    }

    #[test]
    fn desaturating_fully_yields_gray() {
        let out = adjust("C0D4ED", 0.0, -100.0, 0.0).unwrap().rgb();
        assert_eq!(out.r, out.g);
        assert_eq!(out.g, out.b);
    }

    #[test]
    fn gray_gains_lightness() {
        assert_eq!(adjust("808080", 0.0, 0.0, 10.0).unwrap().to_string(), "9A9A9A");
    }

    #[test]
    fn accepts_lowercase_base() {
        assert_eq!(
            adjust("c0d4ed", 0.0, 7.644, -8.627).unwrap(),
            adjust("C0D4ED", 0.0, 7.644, -8.627).unwrap()
        );
    }

    #[test]
    fn invalid_base_is_an_error() {
        assert!(matches!(
            adjust("C0D4E", 0.0, 0.0, 0.0),
            Err(ColorError::InvalidColorFormat(_))
        ));
    }

    #[test]
    fn adjuster_matches_free_function() {
        let adjuster = Adjuster::from_hex("C0D4ED").unwrap();
        let delta = AdjustmentDelta::new(10.0, -5.0, 3.0);
        assert_eq!(
            adjuster.apply(delta),
            adjust("C0D4ED", 10.0, -5.0, 3.0).unwrap()
        );
        assert_eq!(adjuster.base(), Rgb8::new(0xC0, 0xD4, 0xED));
    }

    #[test]
    fn delta_label_uses_adjust_color_keywords() {
        let label = AdjustmentDelta::new(10.0, -5.0, 3.5).to_string();
        assert_eq!(label, "$hue: 10deg, $saturation: -5%, $lightness: 3.5%");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn adjust_is_deterministic(
                r in any::<u8>(), g in any::<u8>(), b in any::<u8>(),
                dh in -360.0_f64..360.0,
                ds in -100.0_f64..100.0,
                dl in -100.0_f64..100.0,
            ) {
                let base = Rgb8::new(r, g, b).to_hex().to_string();
                let first = adjust(&base, dh, ds, dl).unwrap().to_string();
                let second = adjust(&base, dh, ds, dl).unwrap().to_string();
                prop_assert_eq!(first, second);
            }

            #[test]
            fn zero_delta_within_one_per_channel(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
                let out = Adjuster::new(Rgb8::new(r, g, b)).apply_rgb(AdjustmentDelta::default());
                prop_assert!((i16::from(out.r) - i16::from(r)).abs() <= 1);
                prop_assert!((i16::from(out.g) - i16::from(g)).abs() <= 1);
                prop_assert!((i16::from(out.b) - i16::from(b)).abs() <= 1);
            }
        }
    }
}
