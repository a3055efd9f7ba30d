//! Shared error types for periodscan operations.
//!
//! ## Purpose
//!
//! This module defines the unified [`PeriodscanError`] enum covering every
//! failure the crate can surface: configuration errors (mismatched lengths,
//! too few points, invalid period or ring counts) and numerical failures
//! (singular normal-equation systems).
//!
//! ## Design notes
//!
//! * Fail-fast: configuration errors abort the whole operation before any
//!   partial computation happens.
//! * Error messages include the offending values for debugging.
//! * Degenerate-but-valid data (empty runs, `min == max` normalization) is
//!   never an error; those cases have local fallbacks in the respective
//!   modules.
//! * Non-convergence of the fitter is never an error either; the fitter
//!   returns its best-found state regardless.
//! * `Display` is implemented manually so the enum works without `std`;
//!   `std::error::Error` is provided behind the `std` feature.
//!
//! ## Visibility
//!
//! [`PeriodscanError`] is part of the public API and is the error type of
//! every fallible operation in the crate.

#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

use core::fmt;

// ============================================================================
// Error Type
// ============================================================================

/// Unified error type for all periodscan operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodscanError {
    /// Input series or parameter vector was empty.
    EmptyInput,

    /// The x and y arrays have different lengths.
    MismatchedInputs {
        /// Length of the x array.
        x_len: usize,
        /// Length of the y array.
        y_len: usize,
    },

    /// Fewer data points than the operation requires.
    TooFewPoints {
        /// Number of points provided.
        got: usize,
        /// Minimum number of points required.
        min: usize,
    },

    /// Period must be at least 2 base sectors.
    InvalidPeriod(usize),

    /// Ring count must be at least 2.
    InvalidRingCount(usize),

    /// Candidate period range is empty or starts below 2.
    InvalidPeriodRange {
        /// Inclusive lower bound of the range.
        min: usize,
        /// Exclusive upper bound of the range.
        max: usize,
    },

    /// Finite-difference delta inference requires ascending x values.
    NonAscendingX,

    /// The normal-equation system is numerically singular.
    SingularSystem,

    /// A measure name not recognized by the host protocol.
    UnknownMeasure(String),
}

impl fmt::Display for PeriodscanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "input data must not be empty"),
            Self::MismatchedInputs { x_len, y_len } => write!(
                f,
                "input arrays have different lengths: x has {}, y has {}",
                x_len, y_len
            ),
            Self::TooFewPoints { got, min } => write!(
                f,
                "too few data points: got {}, need at least {}",
                got, min
            ),
            Self::InvalidPeriod(p) => {
                write!(f, "period must be at least 2, got {}", p)
            }
            Self::InvalidRingCount(r) => {
                write!(f, "ring count must be at least 2, got {}", r)
            }
            Self::InvalidPeriodRange { min, max } => write!(
                f,
                "invalid candidate period range [{}, {}): lower bound must be \
                 at least 2 and below the upper bound",
                min, max
            ),
            Self::NonAscendingX => {
                write!(f, "input data x must be sorted by ascending values")
            }
            Self::SingularSystem => {
                write!(f, "normal-equation system has no solution")
            }
            Self::UnknownMeasure(name) => {
                write!(f, "unknown quality measure: {:?}", name)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PeriodscanError {}
