//! The period sweep: ranking candidate periods by model fit.
//!
//! ## Purpose
//!
//! This module scores every candidate period in a half-open range by
//! fitting the periodic model to the series and reporting the RMS residual
//! as the candidate's fitness. Lower fitness means the series is better
//! explained by that period.
//!
//! ## Design notes
//!
//! * The sweep is an `Iterator` of per-candidate `Result`s: a fit that
//!   fails (singular system, too few points for the model) surfaces as an
//!   error for that one candidate and never poisons the rest of the sweep.
//! * With the `parallel` feature, [`PeriodSweep::run_parallel`] scores all
//!   candidates across threads; ordering of the output matches the
//!   candidate range regardless of scheduling.
//!
//! ## Invariants
//!
//! * Candidates are visited in ascending order, `min_period` inclusive to
//!   `max_period` exclusive.
//! * Fitness is non-negative.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use num_traits::Float;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::engine::fitness::period_fitness;
use crate::engine::output::PeriodFitness;
use crate::engine::validator::Validator;
use crate::primitives::errors::PeriodscanError;

// ============================================================================
// Builder
// ============================================================================

/// Fluent configuration for one period sweep.
#[derive(Debug, Clone)]
pub struct PeriodSweepBuilder<T> {
    series: Vec<T>,
    min_period: usize,
    max_period: usize,
}

impl<T: Float> PeriodSweepBuilder<T> {
    /// Sweep `series` over candidate periods `[min_period, max_period)`.
    pub fn new(series: Vec<T>, min_period: usize, max_period: usize) -> Self {
        Self {
            series,
            min_period,
            max_period,
        }
    }

    /// Validate the configuration and build the sweep.
    ///
    /// # Errors
    ///
    /// `EmptyInput` for an empty series, `InvalidPeriodRange` when the
    /// range is empty or starts below 2.
    pub fn build(self) -> Result<PeriodSweep<T>, PeriodscanError> {
        Validator::validate_series(&self.series)?;
        Validator::validate_period_range(self.min_period, self.max_period)?;
        Ok(PeriodSweep {
            series: self.series,
            next_period: self.min_period,
            max_period: self.max_period,
        })
    }
}

// ============================================================================
// Sweep
// ============================================================================

/// A running period sweep; yields one fitness result per candidate.
#[derive(Debug, Clone)]
pub struct PeriodSweep<T> {
    series: Vec<T>,
    next_period: usize,
    max_period: usize,
}

impl<T: Float> Iterator for PeriodSweep<T> {
    type Item = Result<PeriodFitness<T>, PeriodscanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_period >= self.max_period {
            return None;
        }
        let period = self.next_period;
        self.next_period += 1;
        Some(period_fitness(&self.series, period).map(|fitness| PeriodFitness { period, fitness }))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.max_period - self.next_period;
        (remaining, Some(remaining))
    }
}

#[cfg(feature = "parallel")]
impl<T: Float + Send + Sync> PeriodSweep<T> {
    /// Score all remaining candidates across the rayon thread pool.
    ///
    /// Results come back in candidate order, one per period, failures
    /// included in place.
    pub fn run_parallel(self) -> Vec<Result<PeriodFitness<T>, PeriodscanError>> {
        (self.next_period..self.max_period)
            .into_par_iter()
            .map(|period| {
                period_fitness(&self.series, period).map(|fitness| PeriodFitness { period, fitness })
            })
            .collect()
    }
}
