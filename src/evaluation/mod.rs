//! Layer 5: Evaluation
//!
//! Aggregation and presentation of computed scores.
//!
//! This layer turns raw per-sector scores into displayable state: the
//! donut-grid accumulator with its normalization bounds, and the two-tone
//! colorizer that maps normalized values to color pairs.
//!
//! # Module Organization
//!
//! - **aggregate**: `QualityGrid` accumulation, bounds, colors, labels
//! - **colorize**: Two-tone pseudo coloring and ramp sampling
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   |
//! Layer 6: Adapters
//!   |
//! Layer 5: Evaluation <- You are here
//!   |
//! Layer 4: Engine (solver, fitness, validator, output)
//!   |
//! Layer 3: Algorithms (geometry, sampler, extract, measures, model)
//!   |
//! Layer 2: Math (linalg, stats, distance)
//!   |
//! Layer 1: Primitives (errors, interval)
//! ```

/// Donut-grid score aggregation.
///
/// Provides:
/// - Incremental accumulation of sector records into grid cells
/// - Per-ring and global normalization bounds
/// - Color-grid rendering and legend labels
pub mod aggregate;

/// Two-tone pseudo coloring.
///
/// Provides:
/// - Discretized ramps with interval borders
/// - Value-to-color-pair blending
/// - Discrete color array sampling
pub mod colorize;
