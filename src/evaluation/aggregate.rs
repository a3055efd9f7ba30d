//! Incremental aggregation of sector scores into the donut grid.
//!
//! ## Purpose
//!
//! This module accumulates the stream of [`SectorQuality`] records coming
//! out of a sector sweep into the donut grid defined by a [`RingScheme`]:
//! each record lands in exactly one cell, where its value joins that cell's
//! contribution list and updates the running mean representative. Value
//! bounds are tracked alongside so cells can be normalized for coloring at
//! any point of the stream.
//!
//! ## Key concepts
//!
//! ### Representative values
//!
//! A cell can receive several records per measure (different intervals of
//! the same width mapping to the same sector). Its representative is the
//! arithmetic mean over all contributions received so far.
//!
//! ### Bound scope
//!
//! Measures whose magnitudes are only comparable among intervals of
//! similar width keep one `(min, max)` pair per ring; all other measures
//! share one global pair, mirrored into every ring so normalization reads
//! uniformly.
//!
//! ## Invariants
//!
//! * Bounds only widen: a recorded minimum never increases and a recorded
//!   maximum never decreases, including across sign changes and zero.
//! * A cell with no contributions for a measure colors as idle and never
//!   participates in normalization.
//!
//! ## Non-goals
//!
//! * This module does not score sectors (see `algorithms::measures`) and
//!   does not pick color scales (interpolators are passed in).

#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::string::String;
#[cfg(feature = "std")]
use std::vec::Vec;

use num_traits::Float;

use crate::algorithms::geometry::RingScheme;
use crate::algorithms::measures::QualityMeasure;
use crate::engine::output::SectorQuality;
use crate::primitives::interval::Interval;

/// Fill for cells that have not received any contribution yet.
pub const IDLE_COLOR: &str = "#e0e0e0";

// ============================================================================
// Cells and Rings
// ============================================================================

/// One donut cell: per-measure contributions and their running means.
#[derive(Debug, Clone)]
pub struct GridCell<T> {
    /// All values recorded for this cell, one list per measure.
    pub contributions: [Vec<T>; QualityMeasure::COUNT],

    /// Mean of the contributions, per measure; `None` until the first
    /// record arrives.
    pub representatives: [Option<T>; QualityMeasure::COUNT],
}

impl<T: Float> Default for GridCell<T> {
    fn default() -> Self {
        Self {
            contributions: core::array::from_fn(|_| Vec::new()),
            representatives: [None; QualityMeasure::COUNT],
        }
    }
}

impl<T: Float> GridCell<T> {
    fn add(&mut self, measure: QualityMeasure, value: T) {
        let idx = measure.index();
        self.contributions[idx].push(value);
        let sum = self.contributions[idx]
            .iter()
            .fold(T::zero(), |acc, &v| acc + v);
        self.representatives[idx] = Some(sum / T::from(self.contributions[idx].len()).unwrap());
    }

    /// Color for one measure given the normalization bounds of its ring.
    fn color<F: Fn(T) -> String>(
        &self,
        measure: QualityMeasure,
        min: T,
        max: T,
        interpolate: &F,
    ) -> String {
        let idx = measure.index();
        let representative = match self.representatives[idx] {
            Some(v) => v,
            None => return String::from(IDLE_COLOR),
        };
        if min == max {
            return interpolate(T::zero());
        }
        interpolate((representative - min) / (max - min))
    }
}

/// One ring of cells plus the bounds used to normalize them.
#[derive(Debug, Clone)]
pub struct GridRing<T> {
    /// Cells of this ring, in sector order.
    pub cells: Vec<GridCell<T>>,

    /// Smallest value recorded under this ring's scope, per measure.
    pub minima: [Option<T>; QualityMeasure::COUNT],

    /// Largest value recorded under this ring's scope, per measure.
    pub maxima: [Option<T>; QualityMeasure::COUNT],
}

impl<T: Float> GridRing<T> {
    fn new(sectors: usize) -> Self {
        let mut cells = Vec::with_capacity(sectors);
        cells.resize_with(sectors, GridCell::default);
        Self {
            cells,
            minima: [None; QualityMeasure::COUNT],
            maxima: [None; QualityMeasure::COUNT],
        }
    }

    fn widen_bounds(&mut self, measure: QualityMeasure, value: T) {
        let idx = measure.index();
        self.minima[idx] = Some(match self.minima[idx] {
            Some(current) => current.min(value),
            None => value,
        });
        self.maxima[idx] = Some(match self.maxima[idx] {
            Some(current) => current.max(value),
            None => value,
        });
    }
}

// ============================================================================
// Quality Grid
// ============================================================================

/// The full donut grid: one accumulation target per analysis session.
#[derive(Debug, Clone)]
pub struct QualityGrid<T> {
    scheme: RingScheme,
    rings: Vec<GridRing<T>>,
}

impl<T: Float> QualityGrid<T> {
    /// Build an empty grid over the given layout.
    pub fn new(scheme: RingScheme) -> Self {
        let rings = scheme
            .sectors_per_ring
            .iter()
            .map(|&sectors| GridRing::new(sectors))
            .collect();
        Self { scheme, rings }
    }

    /// The layout this grid accumulates into.
    pub fn scheme(&self) -> &RingScheme {
        &self.scheme
    }

    /// The accumulated rings, innermost first.
    pub fn rings(&self) -> &[GridRing<T>] {
        &self.rings
    }

    /// Fold one sector score into its donut cell and widen the bounds of
    /// every ring in the measure's scope.
    pub fn add_record(&mut self, record: SectorQuality<T>) {
        let interval = Interval::new(record.start, record.end);
        let (pos, _width) = self.scheme.position(interval);
        self.rings[pos.ring].cells[pos.sector].add(record.measure, record.value);

        if record.measure.per_ring_bounds() {
            self.rings[pos.ring].widen_bounds(record.measure, record.value);
        } else {
            for ring in &mut self.rings {
                ring.widen_bounds(record.measure, record.value);
            }
        }
    }

    /// Render the grid for one measure: one color string per cell, rings
    /// innermost first.
    ///
    /// Cells without contributions render as [`IDLE_COLOR`]. Degenerate
    /// bounds (`min == max`) render every populated cell at the bottom of
    /// the scale.
    pub fn color_grid<F: Fn(T) -> String>(
        &self,
        measure: QualityMeasure,
        interpolate: F,
    ) -> Vec<Vec<String>> {
        let idx = measure.index();
        self.rings
            .iter()
            .map(|ring| {
                let min = ring.minima[idx].unwrap_or_else(T::zero);
                let max = ring.maxima[idx].unwrap_or_else(T::zero);
                ring.cells
                    .iter()
                    .map(|cell| cell.color(measure, min, max, &interpolate))
                    .collect()
            })
            .collect()
    }

    /// Legend labels for the extremes of one measure's scale.
    ///
    /// Measures with fixed semantics use their canonical pair; numeric
    /// measures format the innermost ring's bounds, falling back to
    /// ("Low", "High") while the bounds are unset, zero, or not a number.
    pub fn bound_labels(&self, measure: QualityMeasure) -> (String, String) {
        if let Some((low, high)) = measure.fixed_labels() {
            return (String::from(low), String::from(high));
        }

        let idx = measure.index();
        let min = self.rings[0].minima[idx];
        let max = self.rings[0].maxima[idx];
        match (min, max) {
            (Some(min), Some(max))
                if min != T::zero()
                    && max != T::zero()
                    && !min.is_nan()
                    && !max.is_nan() =>
            {
                (
                    format!("{:.2}", min.to_f64().unwrap_or(f64::NAN)),
                    format!("{:.2}", max.to_f64().unwrap_or(f64::NAN)),
                )
            }
            _ => (String::from("Low"), String::from("High")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(period: usize, rings: usize) -> QualityGrid<f64> {
        QualityGrid::new(RingScheme::new(period, rings).unwrap())
    }

    fn record(start: usize, end: usize, measure: QualityMeasure, value: f64) -> SectorQuality<f64> {
        SectorQuality {
            start,
            end,
            measure,
            value,
        }
    }

    fn label_ramp(t: f64) -> String {
        format!("c{:.2}", t)
    }

    #[test]
    fn records_land_in_their_donut_cell() {
        let mut grid = grid(4, 2);
        // Width-0 interval: outermost ring.
        grid.add_record(record(1, 1, QualityMeasure::Mean, 5.0));
        let ring = &grid.rings()[1];
        let idx = QualityMeasure::Mean.index();
        assert_eq!(ring.cells[1].contributions[idx], [5.0]);
        assert_eq!(ring.cells[1].representatives[idx], Some(5.0));
    }

    #[test]
    fn representative_is_the_mean_regardless_of_arrival_order() {
        let mut forward = grid(4, 2);
        let mut backward = grid(4, 2);
        for &v in &[1.0, 2.0, 6.0] {
            forward.add_record(record(0, 0, QualityMeasure::Mean, v));
        }
        for &v in &[6.0, 2.0, 1.0] {
            backward.add_record(record(0, 0, QualityMeasure::Mean, v));
        }
        let idx = QualityMeasure::Mean.index();
        assert_eq!(forward.rings()[1].cells[0].representatives[idx], Some(3.0));
        assert_eq!(backward.rings()[1].cells[0].representatives[idx], Some(3.0));
    }

    #[test]
    fn global_bounds_reach_every_ring() {
        let mut grid = grid(4, 2);
        grid.add_record(record(0, 0, QualityMeasure::Mean, -2.0));
        grid.add_record(record(0, 2, QualityMeasure::Mean, 7.0));
        let idx = QualityMeasure::Mean.index();
        for ring in grid.rings() {
            assert_eq!(ring.minima[idx], Some(-2.0));
            assert_eq!(ring.maxima[idx], Some(7.0));
        }
    }

    #[test]
    fn per_ring_bounds_stay_in_their_ring() {
        let mut grid = grid(4, 2);
        // Width 0 -> outermost ring, width 2 -> innermost.
        grid.add_record(record(0, 0, QualityMeasure::MinimalSelfDistance, 1.0));
        grid.add_record(record(0, 2, QualityMeasure::MinimalSelfDistance, 9.0));
        let idx = QualityMeasure::MinimalSelfDistance.index();
        assert_eq!(grid.rings()[1].maxima[idx], Some(1.0));
        assert_eq!(grid.rings()[0].maxima[idx], Some(9.0));
        assert_eq!(grid.rings()[0].minima[idx], Some(9.0));
    }

    #[test]
    fn bounds_only_widen() {
        let mut grid = grid(4, 2);
        grid.add_record(record(0, 0, QualityMeasure::Trend, -1.0));
        grid.add_record(record(1, 1, QualityMeasure::Trend, 0.0));
        grid.add_record(record(2, 2, QualityMeasure::Trend, 0.5));
        let idx = QualityMeasure::Trend.index();
        assert_eq!(grid.rings()[0].minima[idx], Some(-1.0));
        assert_eq!(grid.rings()[0].maxima[idx], Some(0.5));
    }

    #[test]
    fn empty_cells_color_idle_and_populated_cells_normalize() {
        let mut grid = grid(4, 2);
        grid.add_record(record(0, 0, QualityMeasure::Mean, 0.0));
        grid.add_record(record(2, 2, QualityMeasure::Mean, 10.0));
        let colors = grid.color_grid(QualityMeasure::Mean, label_ramp);
        // Outermost ring: sectors 0 and 2 populated, 1 and 3 idle.
        assert_eq!(colors[1][0], "c0.00");
        assert_eq!(colors[1][2], "c1.00");
        assert_eq!(colors[1][1], IDLE_COLOR);
        assert_eq!(colors[1][3], IDLE_COLOR);
        // Innermost ring has no contributions at all.
        assert_eq!(colors[0][0], IDLE_COLOR);
    }

    #[test]
    fn degenerate_bounds_render_flat() {
        let mut grid = grid(4, 2);
        grid.add_record(record(0, 0, QualityMeasure::Mean, 4.0));
        let colors = grid.color_grid(QualityMeasure::Mean, label_ramp);
        assert_eq!(colors[1][0], "c0.00");
    }

    #[test]
    fn self_distance_labels_are_fixed() {
        let grid = grid(4, 2);
        assert_eq!(
            grid.bound_labels(QualityMeasure::MinimalSelfDistance),
            (String::from("Unique"), String::from("Recurring"))
        );
    }

    #[test]
    fn numeric_labels_format_the_innermost_bounds() {
        let mut grid = grid(4, 2);
        assert_eq!(
            grid.bound_labels(QualityMeasure::Mean),
            (String::from("Low"), String::from("High"))
        );
        grid.add_record(record(0, 0, QualityMeasure::Mean, 1.25));
        grid.add_record(record(1, 1, QualityMeasure::Mean, 8.5));
        assert_eq!(
            grid.bound_labels(QualityMeasure::Mean),
            (String::from("1.25"), String::from("8.50"))
        );
    }
}
