#![deny(unsafe_code)]
//! CLI binary for hsl-adjust.
//!
//! Subcommands:
//! - `adjust <base>`: apply a hue/saturation/lightness delta
//! - `inspect <hex>`: show a color's RGB and HSL
//! - `from-hsl <h> <s> <l>`: convert HSL to RGB and hex
//! - `find <base> <target>`: search for a delta mapping base to target
//! - `suggest <base>`: list (and optionally render) a sweep of swatches
//! - `list`: print available sweeps

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use hsl_adjust_core::{
    adjust, enumerate_suggestions, find_adjustment_par, find_adjustment_with_cancel, hsl_to_rgb,
    AdjustmentDelta, CancelToken, HexColor, Hsl, SearchOutcome, SearchPreset, SearchRange,
    Suggestion, Sweep,
};
use log::info;
use std::path::PathBuf;
use std::time::Duration;
use std::{fs, process, thread};

#[derive(Parser)]
#[command(name = "hsl-adjust", about = "SASS-style adjust-color explorer")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Apply a hue/saturation/lightness delta to a base color.
    Adjust {
        /// Base color as 6 hex digits (e.g. "C0D4ED").
        base: String,

        /// Hue delta in degrees.
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        hue: f64,

        /// Saturation delta in percent.
        #[arg(long, default_value_t = 7.644, allow_negative_numbers = true)]
        saturation: f64,

        /// Lightness delta in percent.
        #[arg(long, default_value_t = -8.627, allow_negative_numbers = true)]
        lightness: f64,
    },
    /// Show a color's RGB and HSL components.
    Inspect {
        /// Color as 6 hex digits.
        color: String,
    },
    /// Convert HSL (degrees, percent, percent) to RGB and hex.
    FromHsl {
        #[arg(allow_negative_numbers = true)]
        h: f64,
        #[arg(allow_negative_numbers = true)]
        s: f64,
        #[arg(allow_negative_numbers = true)]
        l: f64,
    },
    /// Search for a delta that adjusts BASE into TARGET.
    Find {
        /// Base color (optional when --preset provides it).
        base: Option<String>,

        /// Target color (optional when --preset provides it).
        target: Option<String>,

        /// JSON preset with base, target and ranges.
        #[arg(long)]
        preset: Option<PathBuf>,

        /// Hue range as start:end:interval (overrides the preset).
        #[arg(long, allow_hyphen_values = true)]
        hue: Option<SearchRange>,

        /// Saturation range as start:end:interval (overrides the preset).
        #[arg(long, allow_hyphen_values = true)]
        saturation: Option<SearchRange>,

        /// Lightness range as start:end:interval (overrides the preset).
        #[arg(long, allow_hyphen_values = true)]
        lightness: Option<SearchRange>,

        /// Spread the hue axis across all cores; any match may be returned.
        #[arg(long)]
        parallel: bool,

        /// Give up after this many milliseconds.
        #[arg(long)]
        timeout_ms: Option<u64>,
    },
    /// List a sweep of suggested colors around a base color.
    Suggest {
        /// Base color as 6 hex digits.
        base: String,

        /// Sweep name (hue, saturation, lightness, all).
        #[arg(short, long, default_value = "hue")]
        sweep: String,

        /// Sweep overrides as a JSON string.
        #[arg(long, default_value = "{}")]
        params: String,

        /// Also write the swatches as a PNG strip.
        #[arg(long)]
        png: Option<PathBuf>,

        /// Swatch size in pixels for --png.
        #[arg(long, default_value_t = 32)]
        cell: usize,
    },
    /// List available sweeps.
    List,
}

/// Resolves the search preset: preset file first, then positional colors and
/// range flags on top.
fn resolve_preset(
    base: Option<String>,
    target: Option<String>,
    preset: Option<PathBuf>,
    ranges: [Option<SearchRange>; 3],
) -> Result<SearchPreset, CliError> {
    let from_file = match preset {
        Some(path) => {
            let text = fs::read_to_string(&path).map_err(|e| CliError::io_at(&path, e))?;
            info!("loaded preset from {}", path.display());
            Some(SearchPreset::from_json_str(&text)?)
        }
        None => None,
    };

    let color = |arg: Option<String>,
                 fallback: Option<HexColor>,
                 what: &str|
     -> Result<HexColor, CliError> {
        match (arg, fallback) {
            (Some(s), _) => Ok(HexColor::parse(&s)?),
            (None, Some(c)) => Ok(c),
            (None, None) => Err(CliError::missing_color(what)),
        }
    };
    let base = color(base, from_file.map(|p| p.base), "base")?;
    let target = color(target, from_file.map(|p| p.target), "target")?;

    let mut resolved = SearchPreset::new(base, target);
    if let Some(p) = from_file {
        resolved.ranges = p.ranges;
    }
    let [hue, saturation, lightness] = ranges;
    if let Some(r) = hue {
        resolved.ranges.hue = r;
    }
    if let Some(r) = saturation {
        resolved.ranges.saturation = r;
    }
    if let Some(r) = lightness {
        resolved.ranges.lightness = r;
    }
    resolved.validate()?;
    Ok(resolved)
}

/// Runs the search, tripping the cancel token after `timeout_ms` if given.
fn search(
    preset: &SearchPreset,
    parallel: bool,
    timeout_ms: Option<u64>,
) -> Result<SearchOutcome, CliError> {
    let base = preset.base.to_string();
    let target = preset.target.to_string();

    let cancel = CancelToken::new();
    if let Some(ms) = timeout_ms {
        let timer = cancel.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(ms));
            timer.cancel();
        });
    }

    let outcome = if parallel {
        find_adjustment_par(&base, &target, &preset.ranges, &cancel)?
    } else {
        find_adjustment_with_cancel(&base, &target, &preset.ranges, &cancel)?
    };
    Ok(outcome)
}

fn print_suggestions(suggestions: &[Suggestion], json: bool) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::to_string_pretty(suggestions)?);
    } else {
        for s in suggestions {
            println!("{}  {}", s.color, s.label());
        }
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let sweeps = Sweep::list_names();
            if cli.json {
                let info = serde_json::json!({ "sweeps": sweeps });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Sweeps:");
                for name in sweeps {
                    println!("  {name}");
                }
            }
        }
        Command::Adjust {
            base,
            hue,
            saturation,
            lightness,
        } => {
            let result = adjust(&base, hue, saturation, lightness)?;
            if cli.json {
                let info = serde_json::json!({
                    "base": HexColor::parse(&base)?,
                    "delta": AdjustmentDelta::new(hue, saturation, lightness),
                    "result": result,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("{result}");
            }
        }
        Command::Inspect { color } => {
            let hex = HexColor::parse(&color)?;
            let rgb = hex.rgb();
            let hsl = Hsl::from(rgb);
            if cli.json {
                let info = serde_json::json!({ "hex": hex, "rgb": rgb, "hsl": hsl });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!(
                    "{hex}  rgb({}, {}, {})  hsl({:.3}, {:.3}%, {:.3}%)",
                    rgb.r, rgb.g, rgb.b, hsl.h, hsl.s, hsl.l
                );
            }
        }
        Command::FromHsl { h, s, l } => {
            let rgb = hsl_to_rgb(Hsl { h, s, l });
            let hex = rgb.to_rgb8().to_hex();
            if cli.json {
                let info = serde_json::json!({ "rgb": rgb, "hex": hex });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("rgb({:.3}, {:.3}, {:.3})  {hex}", rgb.r, rgb.g, rgb.b);
            }
        }
        Command::Find {
            base,
            target,
            preset,
            hue,
            saturation,
            lightness,
            parallel,
            timeout_ms,
        } => {
            let preset = resolve_preset(base, target, preset, [hue, saturation, lightness])?;
            let outcome = search(&preset, parallel, timeout_ms)?;

            if cli.json {
                let info = serde_json::json!({
                    "base": preset.base,
                    "target": preset.target,
                    "found": outcome.is_found(),
                    "cancelled": outcome == SearchOutcome::Cancelled,
                    "delta": outcome.delta(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                match outcome {
                    SearchOutcome::Found(delta) => {
                        println!(
                            "adjust-color(#{}, {delta}) -> #{}",
                            preset.base, preset.target
                        );
                    }
                    SearchOutcome::NotFound => println!("not found"),
                    SearchOutcome::Cancelled => println!("cancelled"),
                    // Only sliced searches pause.
                    SearchOutcome::Paused { next_index } => {
                        println!("paused at candidate {next_index}")
                    }
                }
            }
        }
        Command::Suggest {
            base,
            sweep,
            params,
            png,
            cell,
        } => {
            let params: serde_json::Value = serde_json::from_str(&params)
                .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;
            let sweep = Sweep::from_json(&sweep, &params)?;
            let suggestions: Vec<Suggestion> = enumerate_suggestions(&base, &sweep)?.collect();

            print_suggestions(&suggestions, cli.json)?;

            if let Some(path) = png {
                hsl_adjust_swatch::snapshot::write_png(&suggestions, cell, &path)?;
                eprintln!(
                    "wrote {} swatches ({cell}px) -> {}",
                    suggestions.len(),
                    path.display()
                );
            }
        }
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({
                "error": e.to_string(),
                "kind": e.kind(),
                "exit_code": e.exit_code(),
            });
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
