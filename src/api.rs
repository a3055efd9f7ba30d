//! Layer 7: API
//!
//! Public surface of the crate.
//!
//! This layer re-exports the stable types and entry points under one flat
//! namespace and adds the two convenience functions most hosts want: a
//! fully-collected sector analysis and a best-period search.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API <- You are here
//!   |
//! Layer 6: Adapters
//!   |
//! Layer 5: Evaluation (aggregate, colorize)
//!   |
//! Layer 4: Engine (solver, fitness, validator, output)
//!   |
//! Layer 3: Algorithms (geometry, sampler, extract, measures, model)
//!   |
//! Layer 2: Math (linalg, stats, distance)
//!   |
//! Layer 1: Primitives (errors, interval)
//! ```

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use num_traits::Float;

pub use crate::adapters::batch::{BatchedExt, Batches, DEFAULT_BATCH_CAPACITY};
pub use crate::adapters::periods::{PeriodSweep, PeriodSweepBuilder};
pub use crate::adapters::sectors::{SectorSweep, SectorSweepBuilder};
pub use crate::algorithms::geometry::RingScheme;
pub use crate::algorithms::measures::QualityMeasure;
pub use crate::algorithms::sampler::ProgressiveSampler;
pub use crate::engine::fitness::{fit_periodic_model, period_fitness, residuals};
pub use crate::engine::output::{FitResult, PeriodFitness, SectorQuality};
pub use crate::engine::solver::{FitOptions, LevenbergMarquardt};
pub use crate::evaluation::aggregate::{QualityGrid, IDLE_COLOR};
pub use crate::evaluation::colorize::{TwoToneColor, TwoToneColoring};
pub use crate::primitives::errors::PeriodscanError;
pub use crate::primitives::interval::{GridPos, Interval};

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, PeriodscanError>;

/// Run a complete sector analysis and return the populated grid.
///
/// Streams every record of the configured sweep into a [`QualityGrid`];
/// hosts that want progressive rendering should drive the sweep and grid
/// themselves instead.
pub fn analyze_sectors<T: Float>(
    series: Vec<T>,
    period: usize,
    rings: usize,
    measure: QualityMeasure,
) -> Result<QualityGrid<T>> {
    let sweep = SectorSweepBuilder::new(series, period, rings)
        .measure(measure)
        .build()?;
    let mut grid = QualityGrid::new(sweep.scheme().clone());
    for record in sweep {
        grid.add_record(record);
    }
    Ok(grid)
}

/// Find the candidate period with the lowest fitness in `[min, max)`.
///
/// Candidates whose fit fails are skipped; an error is returned only when
/// the configuration itself is invalid or every candidate fails.
pub fn best_period<T: Float>(series: Vec<T>, min_period: usize, max_period: usize) -> Result<PeriodFitness<T>> {
    let sweep = PeriodSweepBuilder::new(series, min_period, max_period).build()?;
    let mut best: Option<PeriodFitness<T>> = None;
    let mut last_error = None;
    for candidate in sweep {
        match candidate {
            Ok(result) => {
                if best.map_or(true, |b| result.fitness < b.fitness) {
                    best = Some(result);
                }
            }
            Err(e) => last_error = Some(e),
        }
    }
    match best {
        Some(result) => Ok(result),
        None => Err(last_error.unwrap_or(PeriodscanError::EmptyInput)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::model::periodic_model;

    #[test]
    fn analyze_sectors_populates_the_outermost_ring() {
        let series: Vec<f64> = (0..24).map(|i| (i % 4) as f64).collect();
        let grid = analyze_sectors(series, 4, 2, QualityMeasure::Mean).unwrap();
        let idx = QualityMeasure::Mean.index();
        let outer = &grid.rings()[1];
        assert!(outer.cells.iter().any(|c| !c.contributions[idx].is_empty()));
        assert!(outer.minima[idx].is_some());
    }

    #[test]
    fn best_period_finds_the_generating_period() {
        let truth = [1.0, 0.0, 2.0, 0.0, 0.0];
        let series: Vec<f64> = (0..70)
            .map(|i| periodic_model(&truth, i as f64 / 7.0))
            .collect();
        let best = best_period(series, 2, 12).unwrap();
        assert_eq!(best.period, 7);
    }

    #[test]
    fn configuration_errors_propagate() {
        assert!(analyze_sectors(Vec::<f64>::new(), 4, 2, QualityMeasure::Mean).is_err());
        assert!(best_period([1.0f64, 2.0].to_vec(), 9, 3).is_err());
    }
}
