//! Layer 4: Engine
//!
//! Fitting engine, validation, and output types.
//!
//! This layer hosts the damped Gauss-Newton (Levenberg-Marquardt) solver,
//! the shared fail-fast validation rules, the structured output records, and
//! the periodic-model fitting routines built on top of the solver.
//!
//! # Module Organization
//!
//! - **solver**: Generic Levenberg-Marquardt nonlinear least squares
//! - **fitness**: Periodic-model fitting, residuals, period fitness
//! - **validator**: Input and configuration validation rules
//! - **output**: Structured result and record types
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
//! Layer 4: Engine <- You are here
//!   |
//! Layer 3: Algorithms (geometry, sampler, extract, measures, model)
//!   |
//! Layer 2: Math (linalg, stats, distance)
//!   |
//! Layer 1: Primitives (errors, interval)
//! ```

/// Generic damped Gauss-Newton solver.
///
/// Provides:
/// - Finite-difference Jacobians (forward, switching to central)
/// - Damping back-off with gain-ratio step acceptance
/// - Convergence detection on gradient, reduced chi-square, and step size
pub mod solver;

/// Periodic-model fitting routines.
///
/// Provides:
/// - Model parameter estimation over `x = index / period`
/// - Residual sequences for detrending
/// - RMS-residual period fitness
pub mod fitness;

/// Validation utilities.
///
/// Provides:
/// - Checks for data consistency (lengths, point counts)
/// - Configuration bound validation
/// - Shared validation logic for all adapters
pub mod validator;

/// Output types.
///
/// Provides:
/// - The `FitResult` container
/// - `SectorQuality` and `PeriodFitness` batch records
pub mod output;
