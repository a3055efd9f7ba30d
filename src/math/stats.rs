//! Running statistics shared by the scoring and normalization code.
//!
//! ## Purpose
//!
//! Small statistical helpers used across scoring and normalization: min/max
//! scanning, z-normalization of distance profiles, and the ordinary
//! least-squares slope behind the trend measure.
//!
//! ## Design notes
//!
//! * All functions are generic over `Float` types.
//! * Degenerate inputs (empty slices, zero variance) are handled locally
//!   with defined fallbacks rather than errors, since such data is valid
//!   at this layer.
//!
//! ## Invariants
//!
//! * `z_normalize` output has zero mean and unit variance whenever the
//!   input variance is nonzero; a zero-variance input normalizes to zeros.
//! * `ols_slope` returns 0 when the x values carry no variance.

#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use num_traits::Float;

// ============================================================================
// Min / Max
// ============================================================================

/// Scan a slice for its minimum and maximum. Returns `None` when empty.
pub fn min_max<T: Float>(values: &[T]) -> Option<(T, T)> {
    if values.is_empty() {
        return None;
    }
    let mut min = T::infinity();
    let mut max = T::neg_infinity();
    for &v in values {
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
    }
    Some((min, max))
}

// ============================================================================
// Z-Normalization
// ============================================================================

/// Normalize a slice to zero mean and unit variance.
///
/// A zero-variance input (all values equal, or fewer than two values) maps
/// to all zeros instead of dividing by zero.
pub fn z_normalize<T: Float>(values: &[T]) -> Vec<T> {
    let n = values.len();
    if n == 0 {
        return Vec::new();
    }
    let count = T::from(n).unwrap();
    let mean = values.iter().fold(T::zero(), |a, &b| a + b) / count;
    let var = values
        .iter()
        .fold(T::zero(), |a, &b| a + (b - mean) * (b - mean))
        / count;
    let std = var.sqrt();
    if std <= T::zero() || !std.is_finite() {
        return vec![T::zero(); n];
    }
    values.iter().map(|&v| (v - mean) / std).collect()
}

// ============================================================================
// Ordinary Least Squares
// ============================================================================

/// Slope of the ordinary least-squares line through `(x, y)` pairs.
///
/// Returns 0 when fewer than two points are given or the x values are all
/// identical.
pub fn ols_slope<T: Float>(xs: &[T], ys: &[T]) -> T {
    debug_assert_eq!(xs.len(), ys.len());

    let n = xs.len();
    if n < 2 {
        return T::zero();
    }
    let count = T::from(n).unwrap();
    let mut sum_x = T::zero();
    let mut sum_y = T::zero();
    let mut sum_xy = T::zero();
    let mut sum_xx = T::zero();
    for (&x, &y) in xs.iter().zip(ys.iter()) {
        sum_x = sum_x + x;
        sum_y = sum_y + y;
        sum_xy = sum_xy + x * y;
        sum_xx = sum_xx + x * x;
    }
    let denom = count * sum_xx - sum_x * sum_x;
    if denom == T::zero() {
        return T::zero();
    }
    (count * sum_xy - sum_x * sum_y) / denom
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_max_scans_extremes() {
        assert_eq!(min_max(&[3.0, -1.0, 2.0]), Some((-1.0, 3.0)));
        assert_eq!(min_max::<f64>(&[]), None);
    }

    #[test]
    fn z_normalize_centers_and_scales() {
        let z = z_normalize(&[1.0, 2.0, 3.0, 4.0]);
        let mean: f64 = z.iter().sum::<f64>() / 4.0;
        let var: f64 = z.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / 4.0;
        assert!(mean.abs() < 1e-12);
        assert!((var - 1.0).abs() < 1e-12);
    }

    #[test]
    fn z_normalize_guards_zero_variance() {
        assert_eq!(z_normalize(&[5.0, 5.0, 5.0]), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn ols_slope_recovers_a_line() {
        let xs = [0.0, 1.0, 2.0, 3.0];
        let ys = [1.0, 3.0, 5.0, 7.0];
        assert!((ols_slope(&xs, &ys) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn ols_slope_is_positive_for_increasing_values() {
        let xs = [0.0, 1.0, 2.0, 3.0, 4.0];
        let ys = [0.5, 0.9, 2.0, 2.1, 3.5];
        assert!(ols_slope(&xs, &ys) > 0.0);
    }

    #[test]
    fn ols_slope_degenerate_x_is_zero() {
        assert_eq!(ols_slope(&[1.0, 1.0], &[2.0, 4.0]), 0.0);
    }
}
