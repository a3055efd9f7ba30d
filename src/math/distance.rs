//! Sliding-window distance profiles.
//!
//! ## Purpose
//!
//! The minimal self-distance measure compares a sector's pattern against
//! every aligned window of the full series through a distance-profile
//! primitive: `(query, series) -> one distance per alignment position`.
//! The primitive is a pluggable black box (hosts may supply an FFT-based
//! implementation such as MASS); this module provides the straightforward
//! Euclidean reference used by default.
//!
//! ## Design notes
//!
//! * O(n * m) sliding computation; adequate for the sector lengths the
//!   sampler produces.
//! * A query longer than the series yields an empty profile.
//! * Generic over `Float` types.
//!
//! ## Non-goals
//!
//! * This module does not z-normalize profiles (done by the scorer) and
//!   does not exclude trivial self-matches (also the scorer's job).

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use num_traits::Float;

// ============================================================================
// Euclidean Distance Profile
// ============================================================================

/// Euclidean distance between `query` and every aligned window of `series`.
///
/// Position `i` of the result holds the distance between `query` and
/// `series[i..i + query.len()]`. Empty when the query does not fit.
pub fn sliding_euclidean<T: Float>(query: &[T], series: &[T]) -> Vec<T> {
    let m = query.len();
    if m == 0 || m > series.len() {
        return Vec::new();
    }

    let positions = series.len() - m + 1;
    let mut profile = Vec::with_capacity(positions);
    for window in series.windows(m) {
        let mut sum = T::zero();
        for (&w, &q) in window.iter().zip(query.iter()) {
            let d = w - q;
            sum = sum + d * d;
        }
        profile.push(sum.sqrt());
    }
    profile
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_has_zero_distance() {
        let series = [1.0, 2.0, 3.0, 1.0, 2.0, 3.0];
        let profile = sliding_euclidean(&[1.0, 2.0, 3.0], &series);
        assert_eq!(profile.len(), 4);
        assert!(profile[0].abs() < 1e-12);
        assert!(profile[3].abs() < 1e-12);
        assert!(profile[1] > 0.0);
    }

    #[test]
    fn oversized_query_yields_empty_profile() {
        assert!(sliding_euclidean(&[1.0, 2.0, 3.0], &[1.0, 2.0]).is_empty());
    }
}
