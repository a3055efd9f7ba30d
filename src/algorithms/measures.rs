//! Quality measures scoring sector data.
//!
//! ## Purpose
//!
//! This module defines the closed set of quality measures and their scoring
//! functions. Each measure reduces the (possibly multi-run) data covered by
//! one interval to a single scalar: the pooled arithmetic mean, the pooled
//! ordinary least-squares trend, or the minimal self-distance of the
//! sector's pattern against the rest of the series.
//!
//! ## Design notes
//!
//! * Measures are a closed tagged variant set, not string names; dispatch
//!   happens once per sweep, never per record. [`FromStr`] accepts the
//!   host-facing protocol names (`"average"`, `"trend"`, `"mp"`).
//! * Whether a measure's bounds normalize per ring and which minimum
//!   interval width it needs are properties of the variant.
//! * The self-distance measure treats the distance-profile computation as a
//!   black-box primitive supplied by the caller;
//!   [`sliding_euclidean`](crate::math::distance::sliding_euclidean) is the
//!   in-crate default.
//!
//! ## Key concepts
//!
//! ### Minimal self-distance
//!
//! For each run, the run's distance profile against the full series is
//! computed, the region within one run-length of the run's own location is
//! excised (trivial self-matches), the remainder is z-normalized, and the
//! run's minimum taken. The sector value is the minimum across runs: low
//! values mean the pattern recurs elsewhere in the series.
//!
//! ## Invariants
//!
//! * Scoring is pure; no measure mutates its inputs.
//! * Degenerate data (empty runs, zero variance, empty post-excision
//!   profiles) produces defined fallbacks, never errors.
//!
//! ## Edge cases
//!
//! * Runs of length <= 1 make the trend and z-normalization degenerate;
//!   sweeps guard by honoring [`QualityMeasure::minimum_width`].
//! * A sector whose every run fails to produce a finite profile scores
//!   positive infinity (no recurrence evidence at all).

#[cfg(not(feature = "std"))]
use alloc::string::{String, ToString};
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::string::{String, ToString};
#[cfg(feature = "std")]
use std::vec::Vec;

use core::str::FromStr;
use num_traits::Float;

use crate::algorithms::extract::SectorData;
use crate::math::stats::{min_max, ols_slope, z_normalize};
use crate::primitives::errors::PeriodscanError;

// ============================================================================
// Quality Measure
// ============================================================================

/// The closed set of per-sector quality measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum QualityMeasure {
    /// Pooled arithmetic mean of the covered values.
    #[default]
    Mean,

    /// Pooled ordinary least-squares slope of (index, value) pairs.
    Trend,

    /// Minimal z-normalized self-distance against the full series.
    MinimalSelfDistance,
}

impl QualityMeasure {
    /// Number of measure variants; used to size per-measure tables.
    pub const COUNT: usize = 3;

    /// Dense index of the variant for per-measure tables.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Self::Mean => 0,
            Self::Trend => 1,
            Self::MinimalSelfDistance => 2,
        }
    }

    /// All variants, in table order.
    pub const ALL: [Self; Self::COUNT] =
        [Self::Mean, Self::Trend, Self::MinimalSelfDistance];

    /// Smallest interval width this measure can score meaningfully.
    ///
    /// Self-distance needs at least 3 so excision and z-normalization never
    /// degenerate; the others tolerate any non-empty interval.
    pub fn minimum_width(self) -> usize {
        match self {
            Self::MinimalSelfDistance => 3,
            _ => 1,
        }
    }

    /// Whether min/max bounds normalize per ring instead of globally.
    ///
    /// Self-distance magnitudes scale with interval width, so each ring
    /// (one width band) normalizes independently.
    pub fn per_ring_bounds(self) -> bool {
        matches!(self, Self::MinimalSelfDistance)
    }

    /// Host-facing protocol name of the variant.
    pub fn name(self) -> &'static str {
        match self {
            Self::Mean => "average",
            Self::Trend => "trend",
            Self::MinimalSelfDistance => "mp",
        }
    }

    /// Fixed legend labels, when the measure has them.
    ///
    /// Self-distance legends read ("Unique", "Recurring"); the numeric
    /// measures derive labels from their bounds instead.
    pub fn fixed_labels(self) -> Option<(&'static str, &'static str)> {
        match self {
            Self::MinimalSelfDistance => Some(("Unique", "Recurring")),
            _ => None,
        }
    }

    /// Score one sector's data with this measure.
    ///
    /// `series` and `profile` are only consulted by the self-distance
    /// measure.
    pub fn score<T, F>(self, data: &SectorData<T>, series: &[T], profile: F) -> T
    where
        T: Float,
        F: Fn(&[T], &[T]) -> Vec<T>,
    {
        match self {
            Self::Mean => mean(data),
            Self::Trend => trend(data),
            Self::MinimalSelfDistance => minimal_self_distance(data, series, profile),
        }
    }
}

impl FromStr for QualityMeasure {
    type Err = PeriodscanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "average" | "mean" => Ok(Self::Mean),
            "trend" => Ok(Self::Trend),
            "mp" | "self-distance" => Ok(Self::MinimalSelfDistance),
            other => Err(PeriodscanError::UnknownMeasure(other.to_string())),
        }
    }
}

impl core::fmt::Display for QualityMeasure {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Scoring Functions
// ============================================================================

/// Arithmetic mean over all values across all runs. Zero for empty data.
pub fn mean<T: Float>(data: &SectorData<T>) -> T {
    let mut sum = T::zero();
    let mut count = 0usize;
    for run in &data.runs {
        for &v in &run.values {
            sum = sum + v;
        }
        count += run.values.len();
    }
    if count == 0 {
        return T::zero();
    }
    sum / T::from(count).unwrap()
}

/// OLS slope of (index, value) pairs pooled across all runs.
pub fn trend<T: Float>(data: &SectorData<T>) -> T {
    let total = data.len();
    let mut xs = Vec::with_capacity(total);
    let mut ys = Vec::with_capacity(total);
    for run in &data.runs {
        for (&i, &v) in run.indices.iter().zip(run.values.iter()) {
            xs.push(T::from(i).unwrap());
            ys.push(v);
        }
    }
    ols_slope(&xs, &ys)
}

/// Minimal z-normalized self-distance of the sector against the series.
///
/// `profile` computes a distance profile `(query, series) -> distances`,
/// one per alignment position.
pub fn minimal_self_distance<T, F>(data: &SectorData<T>, series: &[T], profile: F) -> T
where
    T: Float,
    F: Fn(&[T], &[T]) -> Vec<T>,
{
    let mut global_min = T::infinity();

    for run in &data.runs {
        let len = run.values.len();
        if len == 0 {
            continue;
        }

        let mut distances = profile(&run.values, series);

        // Excise the trivial-match region within one run-length of the
        // run's own location.
        let start = run.indices[0].saturating_sub(len / 2).min(distances.len());
        let end = (start + 2 * len).min(distances.len());
        distances.drain(start..end);

        if distances.is_empty() {
            continue;
        }

        let normalized = z_normalize(&distances);
        if let Some((run_min, _)) = min_max(&normalized) {
            if run_min < global_min {
                global_min = run_min;
            }
        }
    }

    global_min
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::extract::sector_runs;
    use crate::math::distance::sliding_euclidean;
    use crate::primitives::interval::Interval;

    fn data(runs: &[&[f64]]) -> SectorData<f64> {
        let mut offset = 0;
        let runs = runs
            .iter()
            .map(|values| {
                let indices = (offset..offset + values.len()).collect();
                offset += values.len() + 2;
                crate::algorithms::extract::SectorRun {
                    values: values.to_vec(),
                    indices,
                }
            })
            .collect();
        SectorData { runs }
    }

    #[test]
    fn mean_pools_across_runs() {
        let d = data(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        assert!((mean(&d) - 3.5).abs() < 1e-12);
    }

    #[test]
    fn mean_of_empty_data_is_zero() {
        assert_eq!(mean(&SectorData::<f64> { runs: Vec::new() }), 0.0);
    }

    #[test]
    fn trend_is_positive_for_increasing_values() {
        let d = data(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        assert!(trend(&d) > 0.0);
    }

    #[test]
    fn trend_is_negative_for_decreasing_values() {
        let d = data(&[&[6.0, 5.0], &[4.0, 3.0]]);
        assert!(trend(&d) < 0.0);
    }

    #[test]
    fn planted_recurrence_lowers_the_score() {
        // A spike motif over an otherwise flat-ish background. Planting an
        // exact copy of the motif far away from the scored sector must make
        // the sector look recurring, i.e. drop its score.
        let mut series: Vec<f64> = [
            0.0, 10.0, 0.0, 5.0, 5.5, 4.5, //
            4.8, 5.2, 5.0, 5.4, 4.6, 5.1, //
            4.9, 5.3, 4.7, 5.2, 4.8, 5.5, //
            5.1, 4.9, 5.3, 4.7, 5.4, 5.0,
        ]
        .to_vec();
        let period = 6;
        let interval = Interval::new(0, 2);

        let data = sector_runs(&series, interval, period);
        let without = minimal_self_distance(&data, &series, sliding_euclidean::<f64>);

        series[15] = 0.0;
        series[16] = 10.0;
        series[17] = 0.0;
        let data = sector_runs(&series, interval, period);
        let with_copy = minimal_self_distance(&data, &series, sliding_euclidean::<f64>);

        assert!(with_copy < without - 0.5, "{} vs {}", with_copy, without);
    }

    #[test]
    fn self_distance_of_empty_data_is_infinite() {
        let d = SectorData::<f64> { runs: Vec::new() };
        assert!(minimal_self_distance(&d, &[1.0, 2.0], sliding_euclidean::<f64>).is_infinite());
    }

    #[test]
    fn measure_names_round_trip() {
        for measure in QualityMeasure::ALL {
            assert_eq!(measure.name().parse::<QualityMeasure>().unwrap(), measure);
        }
        assert!(matches!(
            "bogus".parse::<QualityMeasure>(),
            Err(PeriodscanError::UnknownMeasure(_))
        ));
    }

    #[test]
    fn variant_properties() {
        assert_eq!(QualityMeasure::MinimalSelfDistance.minimum_width(), 3);
        assert_eq!(QualityMeasure::Mean.minimum_width(), 1);
        assert!(QualityMeasure::MinimalSelfDistance.per_ring_bounds());
        assert!(!QualityMeasure::Trend.per_ring_bounds());
    }
}
