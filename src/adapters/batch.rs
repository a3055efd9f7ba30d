//! Batching adaptor for streaming sweep output.
//!
//! ## Purpose
//!
//! Hosts that forward sweep records over a channel or process boundary
//! amortize per-message overhead by shipping records in groups. This
//! module provides [`Batches`], an iterator adaptor that buffers any
//! sweep's items into `Vec` batches of a configured capacity, and the
//! [`BatchedExt`] extension trait that hangs it off every iterator.
//!
//! ## Invariants
//!
//! * Every batch except possibly the last holds exactly `capacity` items.
//! * The final short batch is flushed; no item is dropped.
//! * Item order is preserved across batch boundaries.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

/// Batch size used by the sweep entry points when none is configured.
pub const DEFAULT_BATCH_CAPACITY: usize = 50;

// ============================================================================
// Adaptor
// ============================================================================

/// Iterator adaptor yielding `Vec` groups of the underlying items.
#[derive(Debug, Clone)]
pub struct Batches<I> {
    inner: I,
    capacity: usize,
}

impl<I: Iterator> Batches<I> {
    /// Wrap `inner`, grouping its items into batches of `capacity`.
    pub fn new(inner: I, capacity: usize) -> Self {
        debug_assert!(capacity > 0);
        Self { inner, capacity }
    }
}

impl<I: Iterator> Iterator for Batches<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut batch = Vec::with_capacity(self.capacity);
        while batch.len() < self.capacity {
            match self.inner.next() {
                Some(item) => batch.push(item),
                None => break,
            }
        }
        if batch.is_empty() {
            None
        } else {
            Some(batch)
        }
    }
}

// ============================================================================
// Extension Trait
// ============================================================================

/// Adds `.batches(capacity)` to every iterator.
pub trait BatchedExt: Iterator + Sized {
    /// Group this iterator's items into `Vec` batches of `capacity`.
    fn batches(self, capacity: usize) -> Batches<Self> {
        Batches::new(self, capacity)
    }
}

impl<I: Iterator> BatchedExt for I {}

#[cfg(test)]
mod tests {
    use super::*;
    #[cfg(not(feature = "std"))]
    use alloc::vec;

    #[test]
    fn full_batches_then_a_short_tail() {
        let batches: Vec<Vec<u32>> = (0..7).batches(3).collect();
        assert_eq!(batches, vec![vec![0, 1, 2], vec![3, 4, 5], vec![6]]);
    }

    #[test]
    fn exact_multiples_produce_no_empty_tail() {
        let batches: Vec<Vec<u32>> = (0..6).batches(3).collect();
        assert_eq!(batches.len(), 2);
    }

    #[test]
    fn empty_input_yields_nothing() {
        let mut batches = core::iter::empty::<u32>().batches(4);
        assert_eq!(batches.next(), None);
    }

    #[test]
    fn order_is_preserved() {
        let flattened: Vec<u32> = (0..10)
            .batches(DEFAULT_BATCH_CAPACITY)
            .flatten()
            .collect();
        assert_eq!(flattened, (0..10).collect::<Vec<u32>>());
    }
}
