//! Donut-grid geometry: mapping circular intervals to grid cells.
//!
//! ## Purpose
//!
//! This module defines [`RingScheme`], the immutable period/ring-count layout
//! of an analysis session, and its deterministic mapping from an arbitrary
//! circular interval to one donut-grid cell.
//!
//! ## Design notes
//!
//! * Interval **width** selects the radial ring: wide intervals map to the
//!   inner, coarse rings and narrow ones to the outer, fine rings.
//! * The interval **midpoint** selects the angular sector within the ring.
//! * All index arithmetic is integral, so the mapping is exact, total, and
//!   deterministic; `round` is half-up like the rounding the layout was
//!   designed against.
//! * The sampler (bucketing candidates) and the aggregator (folding scored
//!   records) must share this exact function or their grids diverge; both
//!   take a `RingScheme`.
//!
//! ## Invariants
//!
//! * `sectors_per_ring[0] == 1`, `sectors_per_ring[rings - 1] == period`,
//!   and the counts are non-decreasing with the ring index.
//! * Every interval maps to exactly one cell; intervals of equal width map
//!   to cells on the same ring.
//!
//! ## Visibility
//!
//! [`RingScheme`] is part of the public API; an analysis session builds it
//! once and shares it across sampler and aggregator.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use crate::primitives::errors::PeriodscanError;
use crate::primitives::interval::{GridPos, Interval};

// ============================================================================
// Ring Scheme
// ============================================================================

/// Immutable donut layout for one analysis session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RingScheme {
    /// Number of base sectors in one period.
    pub period: usize,

    /// Number of concentric rings.
    pub rings: usize,

    /// Angular sector count per ring, innermost first.
    pub sectors_per_ring: Vec<usize>,
}

impl RingScheme {
    /// Build the layout for `period` base sectors and `rings` rings.
    ///
    /// Ring `i` gets `floor(1 + i/(rings-1) * (period-1))` sectors: one
    /// full-circle cell on the innermost ring, `period` cells on the
    /// outermost.
    ///
    /// # Errors
    ///
    /// `InvalidPeriod` when `period < 2`, `InvalidRingCount` when
    /// `rings < 2`.
    pub fn new(period: usize, rings: usize) -> Result<Self, PeriodscanError> {
        if period < 2 {
            return Err(PeriodscanError::InvalidPeriod(period));
        }
        if rings < 2 {
            return Err(PeriodscanError::InvalidRingCount(rings));
        }

        let sectors_per_ring = (0..rings)
            .map(|i| 1 + i * (period - 1) / (rings - 1))
            .collect();

        Ok(Self {
            period,
            rings,
            sectors_per_ring,
        })
    }

    /// Map an interval onto its donut cell; also returns the width that
    /// selected the ring.
    ///
    /// The ring is `rings - 1 - floor(width/period * rings)` and the sector
    /// is `min(spr - 1, round(offset_start/period * spr))` where
    /// `offset_start` is the wrapped interval midpoint.
    pub fn position(&self, interval: Interval) -> (GridPos, usize) {
        let width = interval.width(self.period);

        let ring = self.rings - 1 - width * self.rings / self.period;

        // Midpoint of the interval, wrapped back into [0, period).
        let offset_start = (interval.start + width / 2) % self.period;

        let spr = self.sectors_per_ring[ring];
        // Half-up rounding of offset_start / period * spr in integers.
        let rounded = (2 * offset_start * spr + self.period) / (2 * self.period);
        let sector = rounded.min(spr - 1);

        (GridPos { ring, sector }, width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sector_counts_span_one_to_period() {
        for (period, rings) in [(4, 2), (7, 3), (24, 6), (12, 12)] {
            let scheme = RingScheme::new(period, rings).unwrap();
            assert_eq!(scheme.sectors_per_ring[0], 1);
            assert_eq!(scheme.sectors_per_ring[rings - 1], period);
            for w in scheme.sectors_per_ring.windows(2) {
                assert!(w[0] <= w[1]);
            }
        }
    }

    #[test]
    fn rejects_degenerate_layouts() {
        assert_eq!(
            RingScheme::new(1, 4),
            Err(PeriodscanError::InvalidPeriod(1))
        );
        assert_eq!(
            RingScheme::new(4, 1),
            Err(PeriodscanError::InvalidRingCount(1))
        );
    }

    #[test]
    fn width_zero_lands_on_the_outermost_ring() {
        // period=4, rings=2 gives sectors_per_ring = [1, 4]; interval (0,0)
        // has width 0 -> ring 1, sector round(0/4*4) = 0.
        let scheme = RingScheme::new(4, 2).unwrap();
        let (pos, width) = scheme.position(Interval::new(0, 0));
        assert_eq!(width, 0);
        assert_eq!(pos, GridPos { ring: 1, sector: 0 });
    }

    #[test]
    fn full_width_lands_on_the_innermost_ring() {
        let scheme = RingScheme::new(8, 4).unwrap();
        let (pos, width) = scheme.position(Interval::new(3, 2));
        assert_eq!(width, 7);
        assert_eq!(pos.ring, 0);
        assert_eq!(pos.sector, 0);
    }

    #[test]
    fn mapping_is_deterministic_and_total() {
        let scheme = RingScheme::new(9, 4).unwrap();
        for start in 0..9 {
            for end in 0..9 {
                let interval = Interval::new(start, end);
                let (a, wa) = scheme.position(interval);
                let (b, wb) = scheme.position(interval);
                assert_eq!(a, b);
                assert_eq!(wa, wb);
                assert!(a.ring < scheme.rings);
                assert!(a.sector < scheme.sectors_per_ring[a.ring]);
            }
        }
    }

    #[test]
    fn equal_widths_share_a_ring() {
        let scheme = RingScheme::new(10, 5).unwrap();
        let (a, _) = scheme.position(Interval::new(0, 3));
        let (b, _) = scheme.position(Interval::new(6, 9));
        let (c, _) = scheme.position(Interval::new(8, 1));
        assert_eq!(a.ring, b.ring);
        assert_eq!(b.ring, c.ring);
    }
}
