//! Color types and conversion functions between 8-bit RGB, unrounded RGB,
//! HSL and hex strings.
//!
//! All conversions are pure functions. Numeric inputs are clamped rather than
//! rejected; only malformed hex strings produce an error. HSL uses degrees for
//! hue and percentages (0–100) for saturation and lightness, matching the
//! SASS `adjust-color()` conventions.

use crate::error::ColorError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Final 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// RGB color with unrounded channels on the 0–255 scale.
///
/// This is what [`hsl_to_rgb`] produces. Use [`Rgb::to_rgb8`] to quantize.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Hue in degrees, saturation and lightness in percent.
///
/// Values may sit outside their conventional ranges as intermediates
/// (e.g. `h + Δh` before wrapping); [`hsl_to_rgb`] normalizes and clamps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// Canonical hex form of an [`Rgb8`]: six uppercase digits, no leading `#`.
///
/// Parsing is case-insensitive and tolerates a leading `#`; display always
/// yields the canonical form. Serializes as that string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor(Rgb8);

impl Rgb8 {
    pub const BLACK: Rgb8 = Rgb8 { r: 0, g: 0, b: 0 };
    pub const WHITE: Rgb8 = Rgb8 {
        r: 255,
        g: 255,
        b: 255,
    };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a 6-digit hex color like `"C0D4ED"` (case insensitive, optional `#`).
    ///
    /// Returns `ColorError::InvalidColorFormat` on wrong length or non-hex characters.
    pub fn from_hex(hex: &str) -> Result<Rgb8, ColorError> {
        hex_to_rgb(hex)
    }

    pub fn to_hex(self) -> HexColor {
        HexColor(self)
    }
}

impl Rgb {
    /// Rounds each channel to the nearest integer and clamps it to [0, 255].
    ///
    /// NaN channels become 0.
    pub fn to_rgb8(self) -> Rgb8 {
        Rgb8 {
            r: quantize_channel(self.r),
            g: quantize_channel(self.g),
            b: quantize_channel(self.b),
        }
    }
}

impl From<Rgb8> for Rgb {
    fn from(c: Rgb8) -> Self {
        Rgb {
            r: f64::from(c.r),
            g: f64::from(c.g),
            b: f64::from(c.b),
        }
    }
}

impl From<Rgb8> for Hsl {
    fn from(c: Rgb8) -> Self {
        rgb_to_hsl(Rgb::from(c))
    }
}

impl HexColor {
    /// Parses and canonicalizes a hex color string.
    pub fn parse(hex: &str) -> Result<HexColor, ColorError> {
        hex_to_rgb(hex).map(HexColor)
    }

    pub fn rgb(self) -> Rgb8 {
        self.0
    }
}

impl From<Rgb8> for HexColor {
    fn from(c: Rgb8) -> Self {
        HexColor(c)
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HexColor::parse(s)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Rgb8 { r, g, b } = self.0;
        write!(f, "{r:02X}{g:02X}{b:02X}")
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        HexColor::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Parses a 6-digit hex color into 8-bit channels.
///
/// Each two-character pair is parsed independently as base 16. A leading `#`
/// is stripped. Wrong length, non-ASCII input or non-hex digits return
/// `ColorError::InvalidColorFormat` naming the offending part.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb8, ColorError> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if !hex.is_ascii() {
        return Err(ColorError::InvalidColorFormat(format!(
            "non-ASCII characters in {hex:?}"
        )));
    }
    if hex.len() != 6 {
        return Err(ColorError::InvalidColorFormat(format!(
            "expected 6 hex digits, got {}",
            hex.len()
        )));
    }
    Ok(Rgb8 {
        r: parse_channel(&hex[0..2], "red")?,
        g: parse_channel(&hex[2..4], "green")?,
        b: parse_channel(&hex[4..6], "blue")?,
    })
}

/// Renders channels as a canonical hex color.
///
/// Total over any input: each channel is clamped to [0, 255] and rounded
/// before encoding; NaN encodes as `00`.
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> HexColor {
    Rgb { r, g, b }.to_rgb8().to_hex()
}

/// Converts RGB (0–255 scale) to HSL.
///
/// Channels are clamped to [0, 255] first. Achromatic input (all channels
/// equal, including black and white) yields `h = 0`, `s = 0`. The saturation
/// denominator switches at `l = 50`: below it uses `2l`, at or above it uses
/// `200 - 2l`.
pub fn rgb_to_hsl(c: Rgb) -> Hsl {
    let r = clamp_or_zero(c.r, 255.0);
    let g = clamp_or_zero(c.g, 255.0);
    let b = clamp_or_zero(c.b, 255.0);

    let max = r.max(g).max(b);
    let range = max - r.min(g).min(b);
    let l = max / 255.0 * 100.0 - range / 255.0 * 50.0;

    if range == 0.0 {
        return Hsl { h: 0.0, s: 0.0, l };
    }

    let mut h = if max == r {
        ((g - b) / range) * 60.0
    } else if max == g {
        ((b - r) / range) * 60.0 + 120.0
    } else {
        ((r - g) / range) * 60.0 + 240.0
    };
    if h < 0.0 {
        h += 360.0;
    }

    let denominator = if l < 50.0 { l * 2.0 } else { 200.0 - l * 2.0 };
    let s = (range / 2.55) / denominator * 100.0;

    Hsl { h, s, l }
}

/// Converts HSL to unrounded RGB on the 0–255 scale.
///
/// Hue is wrapped into [0, 360) (negative hues included); saturation and
/// lightness are clamped to [0, 100]. The output is deliberately not rounded.
pub fn hsl_to_rgb(c: Hsl) -> Rgb {
    let h = ((c.h % 360.0) + 360.0) % 360.0;
    let s = clamp_or_zero(c.s, 100.0);
    let l = clamp_or_zero(c.l, 100.0);

    if s == 0.0 {
        let v = l * 2.55;
        return Rgb { r: v, g: v, b: v };
    }

    let temp1 = if l < 50.0 {
        l * (1.0 + s / 100.0)
    } else {
        l + s - l * s / 100.0
    };
    let temp2 = 2.0 * l - temp1;

    let channel = |sector: f64| -> f64 {
        let v = if sector < 1.0 {
            temp2 + (temp1 - temp2) * sector
        } else if sector < 3.0 {
            temp1
        } else if sector < 4.0 {
            temp2 + (temp1 - temp2) * (4.0 - sector)
        } else {
            temp2
        };
        v * 2.55
    };

    Rgb {
        r: channel(((h + 120.0) / 60.0) % 6.0),
        g: channel(h / 60.0),
        b: channel(((h + 240.0) / 60.0) % 6.0),
    }
}

fn parse_channel(pair: &str, name: &str) -> Result<u8, ColorError> {
    if !pair.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidColorFormat(format!(
            "invalid {name} component: {pair:?}"
        )));
    }
    u8::from_str_radix(pair, 16)
        .map_err(|e| ColorError::InvalidColorFormat(format!("invalid {name} component: {e}")))
}

/// Clamps to [0, max], mapping NaN to 0.
fn clamp_or_zero(v: f64, max: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, max)
    }
}

fn quantize_channel(v: f64) -> u8 {
    // `as` saturates, but clamp keeps the intent visible.
    clamp_or_zero(v.round(), 255.0) as u8
}
