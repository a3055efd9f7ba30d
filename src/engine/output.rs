//! Output types for periodscan operations.
//!
//! ## Purpose
//!
//! This module defines the structured results that cross the crate boundary:
//! [`FitResult`] from the solver and the two batch record types the sweeps
//! emit, [`SectorQuality`] and [`PeriodFitness`]. Records are the atomic
//! units a host accumulates into batches for transport; batch framing itself
//! is an external concern.
//!
//! ## Design notes
//!
//! * Results are plain data: produced once, immutable thereafter.
//! * Residuals are derivable from a [`FitResult`] (see `engine::fitness`)
//!   but not stored by the fitter itself.
//! * Generic over `Float` types.
//!
//! ## Invariants
//!
//! * `FitResult::error` is the sum of squared residuals of the returned
//!   parameters, never negative.
//! * `iterations` counts solver iterations actually performed, including
//!   rejected damping retries.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not provide serialization logic.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use num_traits::Float;

use crate::algorithms::measures::QualityMeasure;

// ============================================================================
// Fit Result
// ============================================================================

/// Result of one nonlinear least-squares fit.
#[derive(Debug, Clone, PartialEq)]
pub struct FitResult<T> {
    /// Final parameter vector, in the model's order.
    pub parameters: Vec<T>,

    /// Final sum of squared residuals.
    pub error: T,

    /// Iterations performed before termination.
    pub iterations: usize,
}

impl<T: Float + core::fmt::Display> core::fmt::Display for FitResult<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "fit: [")?;
        for (i, p) in self.parameters.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", p)?;
        }
        write!(
            f,
            "], error = {}, iterations = {}",
            self.error, self.iterations
        )
    }
}

// ============================================================================
// Sweep Records
// ============================================================================

/// One scored sector: the atomic record of the sector sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectorQuality<T> {
    /// First base sector of the scored interval.
    pub start: usize,

    /// Last base sector of the scored interval (inclusive, wrapped).
    pub end: usize,

    /// Measure that produced the value.
    pub measure: QualityMeasure,

    /// The scalar quality value.
    pub value: T,
}

/// One scored candidate period: the atomic record of the period sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodFitness<T> {
    /// The candidate period.
    pub period: usize,

    /// RMS residual of the periodic-model fit; lower fits better.
    pub fitness: T,
}
