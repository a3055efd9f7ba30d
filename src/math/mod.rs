//! Layer 2: Math
//!
//! Pure mathematical functions.
//!
//! This layer provides the pure mathematical building blocks used throughout
//! periodscan:
//! - Dense linear solves for the normal equations
//! - Running statistics (min/max, z-normalization, OLS slope)
//! - A sliding-window distance-profile reference implementation
//!
//! These are reusable mathematical routines with no algorithm-specific logic.
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
//! Layer 3: Algorithms (geometry, sampler, extract, measures, model)
//!   |
//! Layer 2: Math <- You are here
//!   |
//! Layer 1: Primitives (errors, interval)
//! ```

/// Dense matrices and Gaussian elimination.
///
/// Provides:
/// - Row-major `Matrix` storage
/// - `solve` with row pivoting for near-zero pivots
/// - Euclidean norm helpers
pub mod linalg;

/// Running statistics.
///
/// Provides:
/// - Min/max scanning
/// - Z-normalization (zero mean, unit variance)
/// - Ordinary least-squares slope
pub mod stats;

/// Sliding-window distance profiles.
///
/// Provides:
/// - Reference Euclidean distance-profile computation
/// - One distance per alignment position of a query against a series
pub mod distance;
