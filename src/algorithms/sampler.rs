//! Progressive breadth-first interval sampler.
//!
//! ## Purpose
//!
//! This module enumerates every valid circular interval of a period in an
//! order designed for live, interruptible analysis: round-robin across all
//! grid cells, ascending width within each cell. Each full sweep around the
//! grid yields one new (increasingly wide) sample per cell that still has
//! candidates, so a consumer that stops early is left with a representative,
//! monotonically improving picture instead of one exhaustively drained cell.
//!
//! ## Design notes
//!
//! * Candidates are precomputed up front: every `(start, size)` combination
//!   with `start, size in [0, period)`, filtered by the minimum width.
//! * The grid is a flat arena of per-cell queues; cells never reference
//!   each other, and each queue is sorted ascending by width with stable
//!   ties (insertion order).
//! * Bucketing goes through [`RingScheme::position`], the same mapping the
//!   aggregator uses.
//! * The cursor starts on the outermost ring and walks inward, wrapping
//!   back to the outermost ring once it passes ring 0.
//!
//! ## Invariants
//!
//! * The multiset of intervals served over a full drain equals exactly the
//!   candidate set with `width >= minimum_width`.
//! * Within one full cursor revolution no cell is served more than once.
//! * `is_finished` holds iff every cell queue is empty.
//! * `completed_round_trips` increments exactly once per revolution that
//!   passes through ring 0 downward.
//!
//! ## Non-goals
//!
//! * This module does not score intervals (see `algorithms::measures`) and
//!   does not decide when sampling stops; consumers drop the iterator.

#[cfg(not(feature = "std"))]
use alloc::collections::VecDeque;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::collections::VecDeque;
#[cfg(feature = "std")]
use std::vec::Vec;

use crate::algorithms::geometry::RingScheme;
use crate::primitives::interval::Interval;

// ============================================================================
// Progressive Sampler
// ============================================================================

/// Breadth-first-by-width enumerator of all valid circular intervals.
#[derive(Debug, Clone)]
pub struct ProgressiveSampler {
    scheme: RingScheme,
    /// Per-cell candidate queues, outer index = ring, inner = sector.
    grid: Vec<Vec<VecDeque<Interval>>>,
    current_ring: usize,
    current_sector: usize,
    /// Completed full revolutions of the ring cursor.
    pub completed_round_trips: usize,
}

impl ProgressiveSampler {
    /// Precompute and bucket every candidate interval of the scheme's
    /// period, discarding those narrower than `minimum_width`.
    pub fn new(scheme: RingScheme, minimum_width: usize) -> Self {
        let period = scheme.period;

        let mut grid: Vec<Vec<VecDeque<Interval>>> = scheme
            .sectors_per_ring
            .iter()
            .map(|&sectors| (0..sectors).map(|_| VecDeque::new()).collect())
            .collect();

        // Collect candidates per cell, remembering widths for the sort.
        let mut staged: Vec<Vec<Vec<(usize, Interval)>>> = scheme
            .sectors_per_ring
            .iter()
            .map(|&sectors| (0..sectors).map(|_| Vec::new()).collect())
            .collect();

        for start in 0..period {
            for size in 0..period {
                let interval = Interval::new(start, (start + size) % period);
                let (pos, width) = scheme.position(interval);
                if width < minimum_width {
                    continue;
                }
                staged[pos.ring][pos.sector].push((width, interval));
            }
        }

        for (ring, cells) in staged.into_iter().enumerate() {
            for (sector, mut candidates) in cells.into_iter().enumerate() {
                candidates.sort_by_key(|&(width, _)| width);
                grid[ring][sector] = candidates
                    .into_iter()
                    .map(|(_, interval)| interval)
                    .collect();
            }
        }

        let outermost = scheme.rings - 1;
        Self {
            scheme,
            grid,
            current_ring: outermost,
            current_sector: 0,
            completed_round_trips: 0,
        }
    }

    /// The layout this sampler enumerates.
    pub fn scheme(&self) -> &RingScheme {
        &self.scheme
    }

    /// True once every cell's queue is empty.
    pub fn is_finished(&self) -> bool {
        self.grid
            .iter()
            .all(|ring| ring.iter().all(|cell| cell.is_empty()))
    }

    /// Serve the smallest-width remaining interval of the next non-empty
    /// cell, then advance the cursor past it. `None` once finished.
    pub fn next_interval(&mut self) -> Option<Interval> {
        if self.is_finished() {
            return None;
        }
        while self.grid[self.current_ring][self.current_sector].is_empty() {
            self.step();
        }
        let interval = self.grid[self.current_ring][self.current_sector].pop_front();
        self.step();
        interval
    }

    /// Advance the cursor one cell: next sector, then inward one ring on
    /// sector overflow, wrapping back to the outermost ring past ring 0.
    fn step(&mut self) {
        self.current_sector += 1;
        if self.current_sector >= self.scheme.sectors_per_ring[self.current_ring] {
            self.current_sector = 0;
            if self.current_ring == 0 {
                self.current_ring = self.scheme.rings - 1;
                self.completed_round_trips += 1;
            } else {
                self.current_ring -= 1;
            }
        }
    }
}

impl Iterator for ProgressiveSampler {
    type Item = Interval;

    fn next(&mut self) -> Option<Interval> {
        self.next_interval()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(feature = "std"))]
    use alloc::vec::Vec;

    fn sampler(period: usize, rings: usize, minimum_width: usize) -> ProgressiveSampler {
        let scheme = RingScheme::new(period, rings).unwrap();
        ProgressiveSampler::new(scheme, minimum_width)
    }

    #[test]
    fn drain_serves_the_exact_candidate_multiset() {
        let period = 6;
        let mut served: Vec<Interval> = sampler(period, 3, 2).collect();

        let mut expected = Vec::new();
        for start in 0..period {
            for size in 0..period {
                let interval = Interval::new(start, (start + size) % period);
                if interval.width(period) >= 2 {
                    expected.push(interval);
                }
            }
        }

        let key = |i: &Interval| (i.start, i.end);
        served.sort_by_key(key);
        expected.sort_by_key(key);
        assert_eq!(served, expected);
    }

    #[test]
    fn no_cell_serves_twice_within_one_revolution() {
        let mut s = sampler(8, 4, 1);
        let scheme = s.scheme().clone();

        while !s.is_finished() {
            let trip = s.completed_round_trips;
            let mut seen = Vec::new();
            while s.completed_round_trips == trip {
                match s.next_interval() {
                    Some(interval) => {
                        let (pos, _) = scheme.position(interval);
                        assert!(!seen.contains(&pos), "cell served twice in one pass");
                        seen.push(pos);
                    }
                    None => return,
                }
            }
        }
    }

    #[test]
    fn widths_ascend_within_each_cell() {
        let mut s = sampler(10, 4, 1);
        let scheme = s.scheme().clone();
        let mut last_width: Vec<Vec<usize>> = scheme
            .sectors_per_ring
            .iter()
            .map(|&n| (0..n).map(|_| 0).collect())
            .collect();

        while let Some(interval) = s.next_interval() {
            let (pos, width) = scheme.position(interval);
            assert!(width >= last_width[pos.ring][pos.sector]);
            last_width[pos.ring][pos.sector] = width;
        }
    }

    #[test]
    fn finishes_exactly_when_all_cells_are_empty() {
        let mut s = sampler(4, 2, 1);
        let mut count = 0;
        while s.next_interval().is_some() {
            count += 1;
        }
        assert!(s.is_finished());
        assert!(s.next_interval().is_none());
        // period=4: 16 combinations, 4 of width 0 filtered out.
        assert_eq!(count, 12);
    }

    #[test]
    fn minimum_width_filters_candidates() {
        let total: usize = sampler(5, 3, 3).count();
        // Widths 3 and 4 survive, 5 starts each.
        assert_eq!(total, 10);
    }

    #[test]
    fn round_trips_count_cursor_revolutions() {
        let mut s = sampler(4, 2, 1);
        assert_eq!(s.completed_round_trips, 0);
        // 5 cells in the grid; serving 12 intervals forces several wraps.
        for _ in 0..12 {
            s.next_interval();
        }
        assert!(s.completed_round_trips >= 2);
    }
}
