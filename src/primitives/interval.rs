//! Circular intervals and donut-grid coordinates.
//!
//! ## Purpose
//!
//! This module defines the two coordinate types the rest of the crate is
//! built on: [`Interval`], a circular `(start, end)` range over `[0, period)`
//! walked forward with wraparound, and [`GridPos`], the `(ring, sector)`
//! address of one donut-grid cell.
//!
//! ## Key concepts
//!
//! ### Circular width
//!
//! The width of an interval is its forward walking distance,
//! `mod(end - start, period)`, always in `[0, period)`. The degenerate
//! `start == end` case has width 0 and conceptually denotes a full-period
//! interval; the sampler only produces it as width 0.
//!
//! ## Invariants
//!
//! * `start` and `end` are both in `[0, period)` for the period they are
//!   used with; the types do not carry the period themselves.
//! * `width` is total and deterministic for any `(start, end, period)`.
//!
//! ## Non-goals
//!
//! * This module does not map intervals to grid cells (see
//!   `algorithms::geometry`).

// ============================================================================
// Modular Arithmetic
// ============================================================================

/// Mathematical modulo that is non-negative for negative operands.
#[inline]
pub fn mod_floor(n: isize, m: isize) -> isize {
    ((n % m) + m) % m
}

// ============================================================================
// Interval
// ============================================================================

/// A circular `(start, end)` range over `[0, period)`, walked forward from
/// `start` to `end` inclusive, wrapping modulo the period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    /// First base sector covered.
    pub start: usize,

    /// Last base sector covered (inclusive).
    pub end: usize,
}

impl Interval {
    /// Create an interval from its endpoints.
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Circular walking distance from `start` to `end` under `period`.
    #[inline]
    pub fn width(&self, period: usize) -> usize {
        mod_floor(self.end as isize - self.start as isize, period as isize) as usize
    }
}

// ============================================================================
// Grid Coordinates
// ============================================================================

/// Address of one donut-grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPos {
    /// Ring index, 0 = innermost, `rings - 1` = outermost.
    pub ring: usize,

    /// Angular sector index within the ring.
    pub sector: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mod_floor_wraps_negatives() {
        assert_eq!(mod_floor(-1, 7), 6);
        assert_eq!(mod_floor(7, 7), 0);
        assert_eq!(mod_floor(13, 7), 6);
    }

    #[test]
    fn width_wraps_around_the_period() {
        assert_eq!(Interval::new(2, 5).width(7), 3);
        assert_eq!(Interval::new(5, 2).width(7), 4);
        assert_eq!(Interval::new(3, 3).width(7), 0);
    }
}
