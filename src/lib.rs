//! Progressive donut-grid analysis of periodic time series.
//!
//! ## Purpose
//!
//! `periodscan` maps variable-width circular sub-ranges ("sectors") of a
//! periodic series onto a fixed radial grid (a donut of concentric rings,
//! each subdivided into angular sectors), scores each sector with a quality
//! measure, and fits a parametric periodic model for detrending and
//! period-goodness scoring.
//!
//! ## Design notes
//!
//! * All numerics are generic over [`num_traits::Float`] (f32/f64).
//! * Sweeps are pull-based iterators: pure, synchronous, and cancellable by
//!   simply dropping them. Batching is a consumer-side buffering policy.
//! * The crate performs no I/O and owns no rendering surface; colors are
//!   produced through caller-supplied interpolation functions.
//! * Supports both `std` and `no_std` (with `alloc`) environments.
//! * The optional `parallel` feature enables a rayon-backed period sweep.
//!
//! ## Key concepts
//!
//! ### Donut grid
//!
//! A period P and ring count R define, for ring i, `floor(1 + i/(R-1)*(P-1))`
//! sectors. Interval width selects the ring (wide intervals land on inner,
//! coarse rings); the interval midpoint selects the sector within it.
//!
//! ### Progressive sampling
//!
//! Candidate intervals are enumerated breadth-first: one (increasingly wide)
//! interval per grid cell per revolution, so an interrupted sweep still
//! leaves a representative picture behind.
//!
//! ### Quality measures
//!
//! Three per-sector scores over the (possibly wrapped, multi-run) covered
//! data: arithmetic mean, OLS trend, and minimal self-distance against the
//! full series.
//!
//! ### Periodic model
//!
//! `f(x) = (a + b*x) + (c + d*x)*cos(2*pi*x + e)`, fit by a damped
//! Gauss-Newton (Levenberg-Marquardt) solver; the RMS residual of the fit
//! scores a candidate period.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API        (builders, re-exports)
//!   |
//! Layer 6: Adapters   (sector sweep, period sweep, batching)
//!   |
//! Layer 5: Evaluation (aggregate, colorize)
//!   |
//! Layer 4: Engine     (solver, fitness, validator, output)
//!   |
//! Layer 3: Algorithms (geometry, sampler, extract, measures, model)
//!   |
//! Layer 2: Math       (linalg, stats, distance)
//!   |
//! Layer 1: Primitives (errors, interval)
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

/// Layer 1: core building blocks and types.
pub mod primitives;

/// Layer 2: pure mathematical functions.
pub mod math;

/// Layer 3: core donut-grid and scoring algorithms.
pub mod algorithms;

/// Layer 4: fitting engine, validation, output types.
pub mod engine;

/// Layer 5: accumulation and color normalization.
pub mod evaluation;

/// Layer 6: sweep adapters.
pub mod adapters;

/// Layer 7: public API surface.
pub mod api;

/// Convenience re-exports of the stable public surface.
pub mod prelude {
    pub use crate::api::*;
}
