//! Layer 6: Adapters
//!
//! Streaming sweep drivers over the engine and algorithms.
//!
//! This layer packages whole analyses as pull-based iterators: the sector
//! sweep scoring every candidate interval in progressive order, the period
//! sweep ranking candidate periods by model fit, and the batching adaptor
//! that groups either stream for transport.
//!
//! # Module Organization
//!
//! - **sectors**: Progressive per-interval quality scoring
//! - **periods**: Candidate-period fitness ranking
//! - **batch**: Fixed-capacity batching of any sweep's output
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   |
//! Layer 6: Adapters <- You are here
//!   |
//! Layer 5: Evaluation (aggregate, colorize)
//!   |
//! Layer 4: Engine (solver, fitness, validator, output)
//!   |
//! Layer 3: Algorithms (geometry, sampler, extract, measures, model)
//!   |
//! Layer 2: Math (linalg, stats, distance)
//!   |
//! Layer 1: Primitives (errors, interval)
//! ```

/// Sector sweep.
///
/// Provides:
/// - Builder-configured progressive scoring of all candidate intervals
/// - Pluggable distance-profile primitive for the self-distance measure
pub mod sectors;

/// Period sweep.
///
/// Provides:
/// - Per-candidate periodic-model fitness over a period range
/// - Optional rayon-parallel execution behind the `parallel` feature
pub mod periods;

/// Transport batching.
///
/// Provides:
/// - The `Batches` adaptor and `BatchedExt` extension trait
/// - The default batch capacity shared by sweep consumers
pub mod batch;
