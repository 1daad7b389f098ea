//! Exit-coded errors for the `hsl-adjust` binary.
//!
//! A search that ends `not found` or `cancelled` is a normal result and exits 0.
//! Everything else maps onto one of four codes:
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: the colors or ranges themselves are wrong (bad hex, zero interval,
//!       unknown sweep, empty swatch strip)
//! - 11: a preset could not be read or a PNG could not be written
//! - 12: a preset file or `--params` string is not the expected JSON, or a
//!       required color is missing
//! - 13: result JSON could not be produced

use hsl_adjust_core::ColorError;
use std::fmt;
use std::path::Path;

#[derive(Debug)]
pub enum CliError {
    /// Rejected by the color core.
    Color(ColorError),
    Io(String),
    Input(String),
    Serialization(String),
}

impl CliError {
    /// `find` was given neither a positional color nor a preset supplying it.
    pub fn missing_color(which: &str) -> Self {
        CliError::Input(format!("missing {which} color (pass it or use --preset)"))
    }

    /// Attaches the offending file to an I/O failure.
    pub fn io_at(path: &Path, e: impl fmt::Display) -> Self {
        CliError::Io(format!("{}: {e}", path.display()))
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Color(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }

    /// Short tag for `--json` error output.
    pub fn kind(&self) -> &'static str {
        match self {
            CliError::Color(ColorError::InvalidColorFormat(_)) => "color",
            CliError::Color(ColorError::InvalidRange(_)) => "range",
            CliError::Color(ColorError::UnknownAxis(_)) => "sweep",
            CliError::Color(_) => "swatch",
            CliError::Io(_) => "io",
            CliError::Input(_) => "input",
            CliError::Serialization(_) => "serialization",
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Color(e) => write!(f, "{e}"),
            CliError::Io(msg) | CliError::Input(msg) | CliError::Serialization(msg) => {
                f.write_str(msg)
            }
        }
    }
}

/// Preset parse failures are the user's JSON, not the color math, so they
/// land on the input code; core I/O failures keep the I/O code.
impl From<ColorError> for CliError {
    fn from(e: ColorError) -> Self {
        match e {
            ColorError::Io(msg) => CliError::Io(msg),
            ColorError::InvalidPreset(msg) => CliError::Input(format!("invalid preset: {msg}")),
            other => CliError::Color(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}
