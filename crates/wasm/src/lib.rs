#![deny(unsafe_code)]
//! WASM bindings for hsl-adjust.
//!
//! Exposes the core operations to a browser front end. Colors cross the
//! boundary as 6-digit hex strings without `#`; triples cross as `[f64; 3]`
//! arrays. Errors become JS exceptions carrying the error message.

use hsl_adjust_core::{
    enumerate_suggestions, find_adjustment_from, hsl_to_rgb, rgb_to_hsl, Hsl, Rgb, SearchOutcome,
    SearchRange, SearchRanges, Sweep,
};
use wasm_bindgen::prelude::*;

fn to_js(e: hsl_adjust_core::ColorError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// `adjust-color(base, hue, saturation, lightness)` as a hex string.
#[wasm_bindgen]
pub fn adjust(base: &str, hue: f64, saturation: f64, lightness: f64) -> Result<String, JsValue> {
    hsl_adjust_core::adjust(base, hue, saturation, lightness)
        .map(|c| c.to_string())
        .map_err(to_js)
}

/// Returns `[h, s, l]` for the given channels (0–255, clamped).
#[wasm_bindgen(js_name = rgbToHsl)]
pub fn rgb_to_hsl_js(r: f64, g: f64, b: f64) -> Vec<f64> {
    let Hsl { h, s, l } = rgb_to_hsl(Rgb { r, g, b });
    vec![h, s, l]
}

/// Returns unrounded `[r, g, b]` on the 0–255 scale.
#[wasm_bindgen(js_name = hslToRgb)]
pub fn hsl_to_rgb_js(h: f64, s: f64, l: f64) -> Vec<f64> {
    let Rgb { r, g, b } = hsl_to_rgb(Hsl { h, s, l });
    vec![r, g, b]
}

/// One slice of a search. While `done` is false, call `findAdjustment`
/// again with `start = nextIndex`, typically from the next animation frame.
#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq)]
pub struct SearchStep {
    outcome: SearchOutcome,
}

#[wasm_bindgen]
impl SearchStep {
    /// True once the search found a delta or ran out of candidates.
    #[wasm_bindgen(getter)]
    pub fn done(&self) -> bool {
        !matches!(self.outcome, SearchOutcome::Paused { .. })
    }

    #[wasm_bindgen(getter)]
    pub fn found(&self) -> bool {
        self.outcome.is_found()
    }

    /// Where to resume; meaningless once `done`.
    #[wasm_bindgen(getter, js_name = nextIndex)]
    pub fn next_index(&self) -> usize {
        match self.outcome {
            SearchOutcome::Paused { next_index } => next_index,
            _ => 0,
        }
    }

    /// `[hue, saturation, lightness]` when found, otherwise empty.
    #[wasm_bindgen(getter)]
    pub fn delta(&self) -> Vec<f64> {
        self.outcome
            .delta()
            .map(|d| vec![d.hue, d.saturation, d.lightness])
            .unwrap_or_default()
    }
}

/// Searches for a delta mapping `base` to `target`, trying at most
/// `max_candidates` candidates from grid index `start` so the page stays
/// responsive.
///
/// `ranges` is nine numbers: hue, saturation and lightness as
/// `start, end, interval` each.
#[wasm_bindgen(js_name = findAdjustment)]
pub fn find_adjustment_js(
    base: &str,
    target: &str,
    ranges: &[f64],
    start: usize,
    max_candidates: usize,
) -> Result<SearchStep, JsValue> {
    let ranges = ranges_from_slice(ranges)?;
    let outcome =
        find_adjustment_from(base, target, &ranges, start, max_candidates).map_err(to_js)?;
    Ok(SearchStep { outcome })
}

/// Hex colors of the curated sweep `name` (`hue`, `saturation`, `lightness`, `all`).
#[wasm_bindgen(js_name = suggestions)]
pub fn suggestions_js(base: &str, name: &str) -> Result<Vec<String>, JsValue> {
    let sweep = Sweep::from_name(name).map_err(to_js)?;
    suggestion_colors(base, &sweep).map_err(to_js)
}

fn suggestion_colors(
    base: &str,
    sweep: &Sweep,
) -> Result<Vec<String>, hsl_adjust_core::ColorError> {
    Ok(enumerate_suggestions(base, sweep)?
        .map(|s| s.color.to_string())
        .collect())
}

fn ranges_from_slice(values: &[f64]) -> Result<SearchRanges, JsValue> {
    let [hs, he, hi, ss, se, si, ls, le, li] = values else {
        return Err(JsValue::from_str(
            "expected 9 range values: hue, saturation, lightness as start, end, interval",
        ));
    };
    let range = |start: f64, end: f64, interval: f64| {
        SearchRange::new(start, end, interval).map_err(to_js)
    };
    Ok(SearchRanges::new(
        range(*hs, *he, *hi)?,
        range(*ss, *se, *si)?,
        range(*ls, *le, *li)?,
    ))
}
