//! Dense matrices and Gaussian elimination for the normal equations.
//!
//! ## Purpose
//!
//! This module provides the small dense-matrix machinery the fitting engine
//! needs: a row-major [`Matrix`] container, a Euclidean norm helper, and
//! [`solve`], a Gaussian elimination with row pivoting used to solve the
//! lambda-augmented normal equations.
//!
//! ## Design notes
//!
//! * Matrices are tiny (parameter-count squared), so the solver favors
//!   clarity over blocking or decomposition reuse.
//! * Pivots below [`ALMOST_ZERO`] trigger a row search; when no usable row
//!   exists the system is reported singular.
//! * Generic over `Float` types to support f32 and f64.
//!
//! ## Invariants
//!
//! * `values.len() == rows * columns` at all times.
//! * `solve` never mutates its inputs; elimination runs on an augmented copy.
//!
//! ## Non-goals
//!
//! * This module does not provide general-purpose linear algebra; it exists
//!   for the fitter's square systems only.
//!
//! ## Visibility
//!
//! Internal implementation detail of the engine layer; not part of the
//! stable public API.

#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use num_traits::Float;

use crate::primitives::errors::PeriodscanError;

/// Pivot magnitude below which a value is treated as zero.
pub const ALMOST_ZERO: f64 = 1e-20;

// ============================================================================
// Matrix
// ============================================================================

/// Row-major dense matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    /// Number of rows.
    pub rows: usize,

    /// Number of columns.
    pub columns: usize,

    /// Row-major cell values, `values[r * columns + c]`.
    pub values: Vec<T>,
}

impl<T: Float> Matrix<T> {
    /// Create a zeroed matrix of the given shape.
    pub fn zeros(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            values: vec![T::zero(); rows * columns],
        }
    }

    /// Read the cell at `(row, column)`.
    #[inline]
    pub fn get(&self, row: usize, column: usize) -> T {
        self.values[row * self.columns + column]
    }

    /// Write the cell at `(row, column)`.
    #[inline]
    pub fn set(&mut self, row: usize, column: usize, value: T) {
        self.values[row * self.columns + column] = value;
    }
}

/// Euclidean norm of a slice.
pub fn norm2<T: Float>(values: &[T]) -> T {
    values
        .iter()
        .fold(T::zero(), |acc, &v| acc + v * v)
        .sqrt()
}

// ============================================================================
// Gaussian Elimination
// ============================================================================

/// Solve `a * x = b` for square `a` via Gauss-Jordan elimination with row
/// pivoting.
///
/// # Errors
///
/// Returns [`PeriodscanError::SingularSystem`] when no pivot above
/// [`ALMOST_ZERO`] can be found for some column.
pub fn solve<T: Float>(a: &Matrix<T>, b: &[T]) -> Result<Vec<T>, PeriodscanError> {
    debug_assert_eq!(a.rows, a.columns);
    debug_assert_eq!(a.rows, b.len());

    let n = a.rows;
    let threshold = T::from(ALMOST_ZERO).unwrap();

    // Augmented system [a | b], eliminated in place.
    let mut aug = Matrix::zeros(n, n + 1);
    for r in 0..n {
        for c in 0..n {
            aug.set(r, c, a.get(r, c));
        }
        aug.set(r, n, b[r]);
    }

    for i in 0..n {
        // Pivot search: swap in a lower row when the diagonal is near zero.
        if aug.get(i, i).abs() < threshold {
            let mut swapped = false;
            for r in (i + 1)..n {
                if aug.get(r, i).abs() > threshold {
                    for c in 0..=n {
                        let tmp = aug.get(i, c);
                        aug.set(i, c, aug.get(r, c));
                        aug.set(r, c, tmp);
                    }
                    swapped = true;
                    break;
                }
            }
            if !swapped {
                return Err(PeriodscanError::SingularSystem);
            }
        }

        // Normalize the pivot row.
        let pivot = aug.get(i, i);
        for c in i..=n {
            aug.set(i, c, aug.get(i, c) / pivot);
        }

        // Eliminate the column from every other row.
        for r in 0..n {
            if r == i || aug.get(r, i).abs() < threshold {
                continue;
            }
            let factor = aug.get(r, i);
            for c in i..=n {
                let updated = aug.get(r, c) - factor * aug.get(i, c);
                aug.set(r, c, updated);
            }
        }
    }

    Ok((0..n).map(|r| aug.get(r, n)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solves_a_well_conditioned_system() {
        // 2x + y = 5, x + 3y = 10 -> x = 1, y = 3
        let mut a = Matrix::zeros(2, 2);
        a.set(0, 0, 2.0);
        a.set(0, 1, 1.0);
        a.set(1, 0, 1.0);
        a.set(1, 1, 3.0);
        let x = solve(&a, &[5.0, 10.0]).unwrap();
        assert!((x[0] - 1.0).abs() < 1e-12);
        assert!((x[1] - 3.0).abs() < 1e-12);
    }

    #[test]
    fn pivots_when_the_diagonal_is_zero() {
        // First pivot is zero but the system is regular.
        let mut a = Matrix::zeros(2, 2);
        a.set(0, 0, 0.0);
        a.set(0, 1, 2.0);
        a.set(1, 0, 1.0);
        a.set(1, 1, 1.0);
        let x = solve(&a, &[4.0, 3.0]).unwrap();
        assert!((x[0] - 1.0).abs() < 1e-12);
        assert!((x[1] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn reports_singular_systems() {
        let mut a = Matrix::zeros(2, 2);
        a.set(0, 0, 1.0);
        a.set(0, 1, 2.0);
        a.set(1, 0, 2.0);
        a.set(1, 1, 4.0);
        assert_eq!(
            solve(&a, &[1.0, 2.0]),
            Err(PeriodscanError::SingularSystem)
        );
    }

    #[test]
    fn norm2_matches_hand_computation() {
        assert!((norm2(&[3.0, 4.0]) - 5.0).abs() < 1e-12);
    }
}
