//! Layer 3: Algorithms
//!
//! Core donut-grid and scoring algorithms.
//!
//! This layer implements the deterministic geometry mapping, the progressive
//! interval sampler, sector data extraction, the quality measures, and the
//! periodic model function. It contains the "business logic" of periodscan
//! but is orchestrated by the engine and adapter layers.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   |
//! Layer 6: Adapters
//!   |
//! Layer 5: Evaluation (aggregate, colorize)
//!   |
//! Layer 4: Engine (solver, fitness, validator, output)
//!   |
//! Layer 3: Algorithms <- You are here
//!   |
//! Layer 2: Math (linalg, stats, distance)
//!   |
//! Layer 1: Primitives (errors, interval)
//! ```

/// Donut-grid geometry.
///
/// Provides:
/// - `RingScheme` period/ring-count layout
/// - Deterministic interval-to-cell mapping
pub mod geometry;

/// Progressive breadth-first interval sampler.
///
/// Provides:
/// - Exhaustive candidate precomputation
/// - Round-robin, ascending-width traversal
/// - Anytime-interruptible iteration
pub mod sampler;

/// Sector data extraction.
///
/// Provides:
/// - Wrap-aware splitting of an interval's coverage into index runs
pub mod extract;

/// Quality measures.
///
/// Provides:
/// - The closed `QualityMeasure` variant set
/// - Mean, trend, and minimal self-distance scoring
pub mod measures;

/// Parametric periodic model.
///
/// Provides:
/// - The five-parameter trend + seasonal model function
/// - Default initial parameter guess
pub mod model;
