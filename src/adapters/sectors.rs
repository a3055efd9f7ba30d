//! The sector sweep: progressive scoring of every candidate interval.
//!
//! ## Purpose
//!
//! This module drives an entire quality-measure analysis: it walks the
//! progressive sampling schedule over all candidate intervals, extracts
//! each interval's data from the series, scores it with the configured
//! measure, and yields one [`SectorQuality`] record per interval.
//!
//! ## Design notes
//!
//! * The sweep is a plain `Iterator`: callers pull records at their own
//!   pace and cancel by dropping the iterator. Long-running analyses stay
//!   interruptible without any cross-thread signaling.
//! * Records stream in breadth-first schedule order, so a consumer that
//!   renders them incrementally covers the whole grid early and refines
//!   over time.
//! * The sampler's minimum width defaults to the measure's own floor and
//!   can only be raised, never lowered below it.
//! * The self-distance profile primitive is pluggable so hosts can swap
//!   the quadratic baseline for an indexed implementation.
//!
//! ## Invariants
//!
//! * Every record's interval is valid for the configured period and at
//!   least the measure's minimum width wide.
//! * Exhausting the sweep visits every admissible interval exactly once.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use num_traits::Float;

use crate::algorithms::geometry::RingScheme;
use crate::algorithms::measures::QualityMeasure;
use crate::algorithms::sampler::ProgressiveSampler;
use crate::algorithms::{extract, measures};
use crate::engine::output::SectorQuality;
use crate::engine::validator::Validator;
use crate::math::distance::sliding_euclidean;
use crate::primitives::errors::PeriodscanError;

// ============================================================================
// Builder
// ============================================================================

/// Fluent configuration for one sector sweep.
///
/// ```
/// use periodscan::adapters::sectors::SectorSweepBuilder;
/// use periodscan::algorithms::measures::QualityMeasure;
///
/// let series: Vec<f64> = (0..24).map(|i| (i % 6) as f64).collect();
/// let sweep = SectorSweepBuilder::new(series, 6, 3)
///     .measure(QualityMeasure::Mean)
///     .build()
///     .unwrap();
/// let records: Vec<_> = sweep.collect();
/// assert!(!records.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct SectorSweepBuilder<T> {
    series: Vec<T>,
    period: usize,
    rings: usize,
    measure: QualityMeasure,
    minimum_width: Option<usize>,
}

impl<T: Float> SectorSweepBuilder<T> {
    /// Start configuring a sweep over `series` with the given donut layout.
    pub fn new(series: Vec<T>, period: usize, rings: usize) -> Self {
        Self {
            series,
            period,
            rings,
            measure: QualityMeasure::default(),
            minimum_width: None,
        }
    }

    /// Select the quality measure to score with.
    pub fn measure(mut self, measure: QualityMeasure) -> Self {
        self.measure = measure;
        self
    }

    /// Raise the minimum interval width above the measure's own floor.
    pub fn minimum_width(mut self, width: usize) -> Self {
        self.minimum_width = Some(width);
        self
    }

    /// Validate the configuration and build the sweep with the default
    /// distance-profile primitive.
    ///
    /// # Errors
    ///
    /// `EmptyInput` for an empty series, `InvalidPeriod` / `InvalidRingCount`
    /// for degenerate layouts.
    pub fn build(self) -> Result<SectorSweep<T>, PeriodscanError> {
        self.build_with_profile(sliding_euclidean as fn(&[T], &[T]) -> Vec<T>)
    }

    /// Validate the configuration and build the sweep with a custom
    /// distance-profile primitive for the self-distance measure.
    pub fn build_with_profile<P>(self, profile: P) -> Result<SectorSweep<T, P>, PeriodscanError>
    where
        P: Fn(&[T], &[T]) -> Vec<T>,
    {
        Validator::validate_series(&self.series)?;
        Validator::validate_period(self.period)?;
        Validator::validate_rings(self.rings)?;

        let scheme = RingScheme::new(self.period, self.rings)?;
        let floor = self.measure.minimum_width();
        let minimum_width = self.minimum_width.map_or(floor, |w| w.max(floor));
        let sampler = ProgressiveSampler::new(scheme, minimum_width);

        Ok(SectorSweep {
            series: self.series,
            period: self.period,
            measure: self.measure,
            sampler,
            profile,
        })
    }
}

// ============================================================================
// Sweep
// ============================================================================

/// A running sector sweep; yields one record per sampled interval.
pub struct SectorSweep<T, P = fn(&[T], &[T]) -> Vec<T>> {
    series: Vec<T>,
    period: usize,
    measure: QualityMeasure,
    sampler: ProgressiveSampler,
    profile: P,
}

impl<T, P> SectorSweep<T, P> {
    /// The measure this sweep scores with.
    pub fn measure(&self) -> QualityMeasure {
        self.measure
    }

    /// The donut layout this sweep samples.
    pub fn scheme(&self) -> &RingScheme {
        self.sampler.scheme()
    }

    /// Revolutions the underlying schedule has completed so far.
    pub fn completed_round_trips(&self) -> usize {
        self.sampler.completed_round_trips
    }
}

impl<T, P> Iterator for SectorSweep<T, P>
where
    T: Float,
    P: Fn(&[T], &[T]) -> Vec<T>,
{
    type Item = SectorQuality<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let interval = self.sampler.next_interval()?;
        let data = extract::sector_runs(&self.series, interval, self.period);
        let value = self.measure.score(&data, &self.series, &self.profile);
        Some(SectorQuality {
            start: interval.start,
            end: interval.end,
            measure: self.measure,
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[cfg(not(feature = "std"))]
    use alloc::vec;

    fn ramp(len: usize) -> Vec<f64> {
        (0..len).map(|i| i as f64).collect()
    }

    #[test]
    fn visits_every_admissible_interval_exactly_once() {
        // period 4, minimum width 1: 4 starts x 3 widths = 12 intervals.
        let sweep = SectorSweepBuilder::new(ramp(16), 4, 2).build().unwrap();
        let records: Vec<_> = sweep.collect();
        assert_eq!(records.len(), 12);

        let mut seen: Vec<(usize, usize)> = records.iter().map(|r| (r.start, r.end)).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), 12);
    }

    #[test]
    fn scores_carry_the_configured_measure() {
        let sweep = SectorSweepBuilder::new(ramp(8), 4, 2)
            .measure(QualityMeasure::Trend)
            .build()
            .unwrap();
        for record in sweep {
            assert_eq!(record.measure, QualityMeasure::Trend);
        }
    }

    #[test]
    fn mean_records_match_direct_scoring() {
        // Repeating 0,1,2,3: the interval (1, 2) covers every occurrence of
        // base sectors 1 and 2.
        let series: Vec<f64> = (0..16).map(|i| (i % 4) as f64).collect();
        let mut sweep = SectorSweepBuilder::new(series, 4, 2).build().unwrap();
        let record = sweep.find(|r| r.start == 1 && r.end == 2).unwrap();
        assert_eq!(record.value, 1.5);
    }

    #[test]
    fn self_distance_raises_the_width_floor() {
        // period 5, floor 3: only widths 3 and 4 remain, 5 starts each.
        let sweep = SectorSweepBuilder::new(ramp(20), 5, 2)
            .measure(QualityMeasure::MinimalSelfDistance)
            .build()
            .unwrap();
        let records: Vec<_> = sweep.collect();
        assert_eq!(records.len(), 10);
    }

    #[test]
    fn explicit_minimum_width_cannot_undercut_the_measure_floor() {
        let sweep = SectorSweepBuilder::new(ramp(20), 5, 2)
            .measure(QualityMeasure::MinimalSelfDistance)
            .minimum_width(1)
            .build()
            .unwrap();
        assert_eq!(sweep.count(), 10);
    }

    #[test]
    fn empty_series_is_rejected() {
        let result = SectorSweepBuilder::new(Vec::<f64>::new(), 4, 2).build();
        assert_eq!(result.err(), Some(PeriodscanError::EmptyInput));
    }

    #[test]
    fn degenerate_layouts_are_rejected() {
        assert_eq!(
            SectorSweepBuilder::new(vec![1.0], 1, 2).build().err(),
            Some(PeriodscanError::InvalidPeriod(1))
        );
        assert_eq!(
            SectorSweepBuilder::new(vec![1.0], 4, 1).build().err(),
            Some(PeriodscanError::InvalidRingCount(1))
        );
    }

    #[test]
    fn custom_profile_is_used_for_self_distance() {
        let sweep = SectorSweepBuilder::new(ramp(20), 5, 2)
            .measure(QualityMeasure::MinimalSelfDistance)
            .build_with_profile(|query: &[f64], series: &[f64]| {
                crate::math::distance::sliding_euclidean(query, series)
            })
            .unwrap();
        assert_eq!(sweep.count(), 10);
    }
}
