//! Pure helper functions for extracting typed parameters from a `serde_json::Value` object.
//!
//! Each helper takes a JSON value, a key name, and a default. If the key is
//! missing or the value is not the expected type, the default is returned.
//! These never fail; range validity is checked by the caller.

use crate::range::SearchRange;
use serde_json::Value;

/// Extracts an `f64` from `params[name]`, returning `default` if missing or wrong type.
///
/// Accepts both JSON numbers (including integers) and converts them to f64.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    params.get(name).and_then(Value::as_f64).unwrap_or(default)
}

/// Extracts a `bool` from `params[name]`, returning `default` if missing or wrong type.
pub fn param_bool(params: &Value, name: &str, default: bool) -> bool {
    params.get(name).and_then(Value::as_bool).unwrap_or(default)
}

/// Reads `start`, `end` and `interval` from `params` itself, each falling
/// back to the corresponding field of `default`.
pub fn param_range_fields(params: &Value, default: SearchRange) -> SearchRange {
    SearchRange {
        start: param_f64(params, "start", default.start),
        end: param_f64(params, "end", default.end),
        interval: param_f64(params, "interval", default.interval),
    }
}

/// Reads a nested range object `params[name]`, e.g.
/// `{"hue": {"start": -30, "end": 30}}`. Missing fields keep `default`'s.
pub fn param_range(params: &Value, name: &str, default: SearchRange) -> SearchRange {
    params
        .get(name)
        .map(|v| param_range_fields(v, default))
        .unwrap_or(default)
}
