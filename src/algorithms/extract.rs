//! Wrap-aware extraction of the data covered by a circular interval.
//!
//! ## Purpose
//!
//! A circular interval covers, in a series laid out period after period,
//! one contiguous index run per period cycle (plus a trailing partial run).
//! This module walks the series once and splits an interval's coverage into
//! those disjoint runs, keeping both the values and their absolute indices
//! so the scorers can regress against position and locate self-matches.
//!
//! ## Key concepts
//!
//! ### Run collection
//!
//! The walk tracks the base-sector position `i mod period`. A run opens
//! whenever the position hits the interval start (it is open from index 0
//! for wrapped intervals, `start > end`) and closes inclusively at the
//! interval end. Whatever is still open when the series ends is kept as a
//! final partial run.
//!
//! ## Invariants
//!
//! * Runs are disjoint and ordered by their first index.
//! * Each run's indices are contiguous and ascending.
//!
//! ## Non-goals
//!
//! * This module does not validate that the series length is a multiple of
//!   the period; partial trailing cycles are extracted as partial runs.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use core::mem;
use num_traits::Float;

use crate::primitives::interval::Interval;

// ============================================================================
// Sector Data
// ============================================================================

/// One contiguous index run covered by an interval.
#[derive(Debug, Clone, PartialEq)]
pub struct SectorRun<T> {
    /// Series values of the run, in index order.
    pub values: Vec<T>,

    /// Absolute series indices of the run.
    pub indices: Vec<usize>,
}

/// All runs covered by one interval, ordered by first index.
#[derive(Debug, Clone, PartialEq)]
pub struct SectorData<T> {
    /// The wrap-induced disjoint runs.
    pub runs: Vec<SectorRun<T>>,
}

impl<T> SectorData<T> {
    /// Total number of values across all runs.
    pub fn len(&self) -> usize {
        self.runs.iter().map(|run| run.values.len()).sum()
    }

    /// True when no run carries any value.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ============================================================================
// Extraction
// ============================================================================

/// Split the data covered by `interval` into its disjoint index runs.
pub fn sector_runs<T: Float>(
    series: &[T],
    interval: Interval,
    period: usize,
) -> SectorData<T> {
    let mut runs = Vec::new();
    let mut values: Vec<T> = Vec::new();
    let mut indices: Vec<usize> = Vec::new();

    // Wrapped intervals are already inside their range at index 0.
    let mut active = interval.start > interval.end;
    let mut position = 0;

    for (i, &value) in series.iter().enumerate() {
        if position == interval.start {
            active = true;
            values.clear();
            indices.clear();
        }
        if active {
            values.push(value);
            indices.push(i);
        }
        if position == interval.end {
            active = false;
            if !values.is_empty() {
                runs.push(SectorRun {
                    values: mem::take(&mut values),
                    indices: mem::take(&mut indices),
                });
            }
        }
        position = (position + 1) % period;
    }

    if !values.is_empty() {
        runs.push(SectorRun { values, indices });
    }

    SectorData { runs }
}
