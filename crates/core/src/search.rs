//! Brute-force inverse of [`crate::adjust`]: find a delta that turns a base
//! color into a target color.
//!
//! The forward map is neither injective nor continuous (8-bit rounding, the
//! lightness branch at 50%), so there is no closed-form inverse. The search
//! walks every delta of a [`DeltaGrid`] in order and stops at the first one
//! whose adjusted color equals the target. Cost is
//! `hue.len() * saturation.len() * lightness.len()` conversions; callers that
//! need to stay responsive pass a [`CancelToken`].

use crate::adjust::{AdjustmentDelta, Adjuster};
use crate::color::Rgb8;
use crate::error::ColorError;
use crate::range::{DeltaGrid, SearchRanges};
use log::{debug, warn};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Candidates evaluated between cancellation checks.
pub const CANCEL_CHECK_INTERVAL: usize = 1024;

/// Searches at or above this many candidates log a warning.
pub const LARGE_SEARCH_WARNING: usize = 5_000_000;

/// Result of a search. Only `Found` carries a delta; the rest are normal
/// outcomes, not errors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SearchOutcome {
    /// A delta for which `adjust(base, delta) == target`.
    Found(AdjustmentDelta),
    /// Every candidate was tried without a match.
    NotFound,
    /// The caller's [`CancelToken`] was tripped before the search finished.
    Cancelled,
    /// A [`find_adjustment_from`] slice used up its budget. Resume at `next_index`.
    Paused { next_index: usize },
}

impl SearchOutcome {
    pub fn delta(&self) -> Option<AdjustmentDelta> {
        match self {
            SearchOutcome::Found(delta) => Some(*delta),
            SearchOutcome::NotFound
            | SearchOutcome::Cancelled
            | SearchOutcome::Paused { .. } => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }
}

/// Shared flag a caller trips to stop a running search.
///
/// Clones share the same flag, so one clone can be handed to a timer or UI
/// thread while the search holds another.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Finds a delta within `ranges` that adjusts `base` into `target`.
///
/// Sweeps hue outermost, then saturation, then lightness, and returns the
/// first match in that order. Fails only on a malformed color or range.
pub fn find_adjustment(
    base: &str,
    target: &str,
    ranges: &SearchRanges,
) -> Result<SearchOutcome, ColorError> {
    find_adjustment_with_cancel(base, target, ranges, &CancelToken::new())
}

/// Like [`find_adjustment`], checking `cancel` every [`CANCEL_CHECK_INTERVAL`]
/// candidates and returning [`SearchOutcome::Cancelled`] once it is tripped.
pub fn find_adjustment_with_cancel(
    base: &str,
    target: &str,
    ranges: &SearchRanges,
    cancel: &CancelToken,
) -> Result<SearchOutcome, ColorError> {
    let (adjuster, target, grid) = prepare(base, target, ranges, true)?;

    for (evaluated, delta) in grid.enumerate() {
        if evaluated % CANCEL_CHECK_INTERVAL == 0 && cancel.is_cancelled() {
            debug!("search cancelled after {evaluated} candidates");
            return Ok(SearchOutcome::Cancelled);
        }
        if adjuster.apply_rgb(delta) == target {
            debug!("found {delta} after {} candidates", evaluated + 1);
            return Ok(SearchOutcome::Found(delta));
        }
    }

    debug!("no match for {}", target.to_hex());
    Ok(SearchOutcome::NotFound)
}

/// Parallel variant: hue values are distributed across rayon workers, each
/// sweeping its own saturation × lightness plane.
///
/// Any matching delta may be returned, not necessarily the first in grid
/// order. The first worker to match stops the others.
#[cfg(feature = "parallel")]
pub fn find_adjustment_par(
    base: &str,
    target: &str,
    ranges: &SearchRanges,
    cancel: &CancelToken,
) -> Result<SearchOutcome, ColorError> {
    use rayon::prelude::*;

    let (adjuster, target, grid) = prepare(base, target, ranges, true)?;
    let inner = grid.inner_len();
    let hue_len = grid.ranges().hue.len();
    if grid.total() == 0 {
        return Ok(SearchOutcome::NotFound);
    }

    let done = AtomicBool::new(false);
    let interrupted = AtomicBool::new(false);

    let found = (0..hue_len).into_par_iter().find_map_any(|hue_index| {
        let offset = hue_index * inner;
        for i in 0..inner {
            if i % CANCEL_CHECK_INTERVAL == 0 {
                if done.load(Ordering::Relaxed) {
                    return None;
                }
                if cancel.is_cancelled() {
                    interrupted.store(true, Ordering::Relaxed);
                    return None;
                }
            }
            let delta = grid.delta_at(offset + i);
            if adjuster.apply_rgb(delta) == target {
                done.store(true, Ordering::Relaxed);
                return Some(delta);
            }
        }
        None
    });

    Ok(match found {
        Some(delta) => {
            debug!("found {delta} (parallel)");
            SearchOutcome::Found(delta)
        }
        None if interrupted.load(Ordering::Relaxed) => {
            debug!("parallel search cancelled");
            SearchOutcome::Cancelled
        }
        None => {
            debug!("no match for {} (parallel)", target.to_hex());
            SearchOutcome::NotFound
        }
    })
}

/// Sliced variant for callers that cannot block, such as a browser main
/// thread: tries at most `max_candidates` deltas starting at grid index
/// `start` and returns [`SearchOutcome::Paused`] if the budget runs out first.
///
/// Resuming from each `next_index` until the outcome is not `Paused` visits
/// the same candidates in the same order as [`find_adjustment`], so it finds
/// the same first match. A `start` at or past the end yields `NotFound`.
/// A zero budget is `ColorError::InvalidRange`, since it could never progress.
pub fn find_adjustment_from(
    base: &str,
    target: &str,
    ranges: &SearchRanges,
    start: usize,
    max_candidates: usize,
) -> Result<SearchOutcome, ColorError> {
    if max_candidates == 0 {
        return Err(ColorError::InvalidRange(
            "max_candidates must be at least 1".to_string(),
        ));
    }
    let (adjuster, target, grid) = prepare(base, target, ranges, start == 0)?;
    let end = start.saturating_add(max_candidates).min(grid.total());

    for index in start..end {
        let delta = grid.delta_at(index);
        if adjuster.apply_rgb(delta) == target {
            debug!("found {delta} at index {index}");
            return Ok(SearchOutcome::Found(delta));
        }
    }

    if end < grid.total() {
        Ok(SearchOutcome::Paused { next_index: end })
    } else {
        debug!("no match for {}", target.to_hex());
        Ok(SearchOutcome::NotFound)
    }
}

/// Parses inputs and builds the grid. `announce` logs the search size, which
/// resumed slices skip so a long search warns once.
fn prepare(
    base: &str,
    target: &str,
    ranges: &SearchRanges,
    announce: bool,
) -> Result<(Adjuster, Rgb8, DeltaGrid), ColorError> {
    let adjuster = Adjuster::from_hex(base)?;
    let target = Rgb8::from_hex(target)?;
    let grid = DeltaGrid::new(*ranges)?;
    if !announce {
        return Ok((adjuster, target, grid));
    }

    if grid.total() >= LARGE_SEARCH_WARNING {
        warn!(
            "searching {} candidates; this may take a while (hue {}, saturation {}, lightness {})",
            grid.total(),
            ranges.hue,
            ranges.saturation,
            ranges.lightness
        );
    }
    debug!(
        "searching {} candidates: {} -> {}",
        grid.total(),
        adjuster.base().to_hex(),
        target.to_hex()
    );
    Ok((adjuster, target, grid))
}
