//! Input validation for periodscan configuration and data.
//!
//! ## Purpose
//!
//! This module provides the fail-fast validation functions shared by the
//! builders and the fitting engine. All checks run before any computation
//! begins, so a configuration error can never leave a partially computed
//! result behind.
//!
//! ## Design notes
//!
//! * Validation is fail-fast: returns on the first error encountered.
//! * Error values carry the offending numbers for debugging.
//! * Checks are ordered from cheap to expensive.
//! * Generic over `Float` types where data is involved.
//!
//! ## Validated parameters
//!
//! * **Series**: non-empty
//! * **Fit inputs**: matching lengths, more points than parameters
//! * **Period / rings**: both at least 2
//! * **Period range**: lower bound at least 2, below the upper bound
//!
//! ## Non-goals
//!
//! * This module does not transform or correct invalid inputs.
//! * This module does not perform scoring or fitting itself.
//!
//! ## Visibility
//!
//! Internal implementation detail used by the builders and the engine; not
//! part of the stable public API.

use num_traits::Float;

use crate::primitives::errors::PeriodscanError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for periodscan configuration and input data.
///
/// Static methods returning `Result<(), PeriodscanError>`, failing fast on
/// the first violation.
pub struct Validator;

impl Validator {
    /// Validate that a series carries at least one value.
    pub fn validate_series<T: Float>(series: &[T]) -> Result<(), PeriodscanError> {
        if series.is_empty() {
            return Err(PeriodscanError::EmptyInput);
        }
        Ok(())
    }

    /// Validate solver inputs: equal lengths, non-empty parameter vector,
    /// and strictly more points than parameters.
    pub fn validate_fit_inputs<T: Float>(
        x: &[T],
        y: &[T],
        num_parameters: usize,
    ) -> Result<(), PeriodscanError> {
        if num_parameters == 0 {
            return Err(PeriodscanError::EmptyInput);
        }
        if x.len() != y.len() {
            return Err(PeriodscanError::MismatchedInputs {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        if x.len() <= num_parameters {
            return Err(PeriodscanError::TooFewPoints {
                got: x.len(),
                min: num_parameters + 1,
            });
        }
        Ok(())
    }

    /// Validate a donut period (at least 2 base sectors).
    pub fn validate_period(period: usize) -> Result<(), PeriodscanError> {
        if period < 2 {
            return Err(PeriodscanError::InvalidPeriod(period));
        }
        Ok(())
    }

    /// Validate a ring count (at least 2 rings).
    pub fn validate_rings(rings: usize) -> Result<(), PeriodscanError> {
        if rings < 2 {
            return Err(PeriodscanError::InvalidRingCount(rings));
        }
        Ok(())
    }

    /// Validate a candidate period range `[min, max)`.
    pub fn validate_period_range(min: usize, max: usize) -> Result<(), PeriodscanError> {
        if min < 2 || max <= min {
            return Err(PeriodscanError::InvalidPeriodRange { min, max });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_inputs_must_outnumber_parameters() {
        let x = [0.0, 1.0, 2.0];
        assert_eq!(
            Validator::validate_fit_inputs(&x, &x, 3),
            Err(PeriodscanError::TooFewPoints { got: 3, min: 4 })
        );
        assert!(Validator::validate_fit_inputs(&x, &x, 2).is_ok());
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        assert_eq!(
            Validator::validate_fit_inputs(&[0.0, 1.0], &[0.0], 1),
            Err(PeriodscanError::MismatchedInputs { x_len: 2, y_len: 1 })
        );
    }

    #[test]
    fn period_ranges_must_be_forward_and_meaningful() {
        assert!(Validator::validate_period_range(2, 10).is_ok());
        assert!(Validator::validate_period_range(1, 10).is_err());
        assert!(Validator::validate_period_range(5, 5).is_err());
    }
}
