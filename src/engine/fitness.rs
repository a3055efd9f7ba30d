//! Periodic-model fitting entry points.
//!
//! ## Purpose
//!
//! This module connects the generic solver to the periodic model: it builds
//! the normalized abscissa for a candidate period, runs the fit from the
//! canonical initial guess, and condenses the outcome into the RMS residual
//! used to rank candidate periods.
//!
//! ## Design notes
//!
//! * The abscissa is `i / period`, so one model cycle spans exactly one
//!   candidate period of samples regardless of the period's magnitude.
//! * Fitness is the root-mean-square residual of the fitted curve; lower
//!   values indicate the series is better explained by that period.
//! * Non-convergence is not an error; the best parameters found still
//!   yield a usable (large) fitness value.
//!
//! ## Invariants
//!
//! * `period_fitness` is non-negative and zero only for an exact fit.
//! * `residuals` has exactly one entry per input value.
//!
//! ## Non-goals
//!
//! * This module does not choose among candidate periods; see
//!   `adapters::periods` for the sweep.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use num_traits::Float;

use crate::algorithms::model::{initial_guess, periodic_model};
use crate::engine::output::FitResult;
use crate::engine::solver::{FitOptions, LevenbergMarquardt};
use crate::primitives::errors::PeriodscanError;

/// Fit the periodic model to `values` assuming the given candidate period.
///
/// The abscissa is the sample index divided by the period, so the cosine
/// term completes one cycle per `period` samples.
///
/// # Errors
///
/// Propagates solver errors; see [`LevenbergMarquardt::fit`].
pub fn fit_periodic_model<T: Float>(
    values: &[T],
    period: usize,
) -> Result<FitResult<T>, PeriodscanError> {
    let p = T::from(period).unwrap();
    let x: Vec<T> = (0..values.len())
        .map(|i| T::from(i).unwrap() / p)
        .collect();
    LevenbergMarquardt::fit(
        &x,
        values,
        &initial_guess::<T>(),
        periodic_model,
        FitOptions::default(),
    )
}

/// Residuals of the periodic model at `params` against `values`.
pub fn residuals<T: Float>(values: &[T], period: usize, params: &[T]) -> Vec<T> {
    let p = T::from(period).unwrap();
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| v - periodic_model(params, T::from(i).unwrap() / p))
        .collect()
}

/// RMS residual of the best periodic-model fit for one candidate period.
///
/// # Errors
///
/// Propagates solver errors; see [`LevenbergMarquardt::fit`].
pub fn period_fitness<T: Float>(values: &[T], period: usize) -> Result<T, PeriodscanError> {
    let fit = fit_periodic_model(values, period)?;
    let r = residuals(values, period, &fit.parameters);
    let n = T::from(r.len()).unwrap();
    let mean_sq = r.iter().fold(T::zero(), |acc, &e| acc + e * e) / n;
    Ok(mean_sq.sqrt())
}
