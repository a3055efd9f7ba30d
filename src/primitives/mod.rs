//! Layer 1: Primitives
//!
//! Core building blocks and types.
//!
//! This layer provides the primitive abstractions and data types used
//! throughout the crate. It has zero internal dependencies within the crate.
//!
//! # Module Organization
//!
//! - **errors**: Shared error types (PeriodscanError)
//! - **interval**: Circular intervals and donut-grid coordinates
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
//! Layer 2: Math (linalg, stats, distance)
//!   |
//! Layer 1: Primitives <- You are here
//! ```

/// Shared error types.
///
/// Provides:
/// - Unified `PeriodscanError` enum
/// - Specific error variants for configuration and numerical failures
pub mod errors;

/// Circular intervals and grid coordinates.
///
/// Provides:
/// - The `Interval` type over `[0, period)`
/// - Wrapping width computation
/// - `GridPos` donut cell coordinates
pub mod interval;
