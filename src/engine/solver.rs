//! Generic damped Gauss-Newton (Levenberg-Marquardt) solver.
//!
//! ## Purpose
//!
//! This module implements the nonlinear least-squares engine used to fit
//! the periodic model: given `x`, `y`, a model function and an initial
//! parameter vector, it finds parameters minimizing the sum of squared
//! residuals.
//!
//! ## Design notes
//!
//! * The Jacobian is built by finite differences: forward by default,
//!   switching to central differences once the step direction has
//!   stabilized (damping beyond 1e15 while the largest parameter step
//!   stays below 1e10) to improve accuracy near convergence.
//! * Each iteration solves the lambda-augmented normal equations
//!   `(J'J + lambda*I) h = J'r` by Gaussian elimination with row pivoting;
//!   the damping is added to a copy of the diagonal, never accumulated.
//! * Steps are accepted when the actual-to-predicted reduction ratio
//!   exceeds a small threshold; rejected steps revert the parameters and
//!   grow the damping, terminating with the last accepted state once the
//!   damping exceeds its ceiling.
//! * Optional per-parameter `[min, max]` clamps are applied after every
//!   step.
//!
//! ## Key concepts
//!
//! ### Damping
//!
//! `lambda` blends Gauss-Newton and gradient-descent behavior: large
//! damping approximates gradient descent with a short step, small damping
//! approaches the pure Gauss-Newton step.
//!
//! ### Convergence
//!
//! Checked only after iteration 2 and only on accepted steps: gradient norm
//! below 1e-4, reduced chi-square below 1e-12, or maximum parameter step
//! below 1e-8. A configurable iteration cap (default 40x parameter count)
//! bounds the loop unconditionally.
//!
//! ## Invariants
//!
//! * Non-convergence is not an error: the solver always returns its best
//!   accepted state with the iteration count.
//! * Structural failures (mismatched lengths, too few points, singular
//!   augmented system, non-ascending x during delta inference) abort with
//!   an error and produce no partial result.
//!
//! ## Non-goals
//!
//! * This module knows nothing about the periodic model; see
//!   `engine::fitness` for the model-specific entry points.
//! * No analytic Jacobians; models are opaque functions.

#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use num_traits::Float;

use crate::engine::output::FitResult;
use crate::engine::validator::Validator;
use crate::math::linalg::{norm2, solve, Matrix};
use crate::primitives::errors::PeriodscanError;

// ============================================================================
// Options
// ============================================================================

/// Configuration for one Levenberg-Marquardt fit.
#[derive(Debug, Clone)]
pub struct FitOptions<T> {
    /// Initial damping value.
    pub damping: T,

    /// Per-parameter finite-difference step sizes; inferred from the mean
    /// x spacing when `None`.
    pub parameter_deltas: Option<Vec<T>>,

    /// Iteration cap; defaults to 40x the parameter count when `None`.
    pub max_iterations: Option<usize>,

    /// Optional per-parameter lower bounds, applied after each step.
    pub min: Option<Vec<T>>,

    /// Optional per-parameter upper bounds, applied after each step.
    pub max: Option<Vec<T>>,
}

impl<T: Float> Default for FitOptions<T> {
    fn default() -> Self {
        Self {
            damping: T::from(LevenbergMarquardt::DEFAULT_DAMPING).unwrap(),
            parameter_deltas: None,
            max_iterations: None,
            min: None,
            max: None,
        }
    }
}

impl<T: Float> FitOptions<T> {
    /// Set the initial damping.
    pub fn damping(mut self, damping: T) -> Self {
        self.damping = damping;
        self
    }

    /// Set one finite-difference step size for every parameter.
    pub fn delta(mut self, delta: T, num_parameters: usize) -> Self {
        self.parameter_deltas = Some(vec![delta; num_parameters]);
        self
    }

    /// Set the iteration cap.
    pub fn max_iterations(mut self, cap: usize) -> Self {
        self.max_iterations = Some(cap);
        self
    }

    /// Clamp parameters to `[min, max]` element-wise after every step.
    pub fn bounds(mut self, min: Vec<T>, max: Vec<T>) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }
}

// ============================================================================
// Solver
// ============================================================================

/// Damped Gauss-Newton nonlinear least-squares solver.
pub struct LevenbergMarquardt;

impl LevenbergMarquardt {
    // ========================================================================
    // Constants
    // ========================================================================

    /// Default initial damping.
    pub const DEFAULT_DAMPING: f64 = 2.0;

    /// Minimum gain ratio for accepting a step.
    const EPSILON_STEP: f64 = 0.1;

    /// Gradient-norm convergence threshold.
    const EPSILON_GRADIENT: f64 = 1e-4;

    /// Maximum-parameter-step convergence threshold.
    const EPSILON_PARAMETERS: f64 = 1e-8;

    /// Reduced chi-square convergence threshold.
    const EPSILON_CHI2_RED: f64 = 1e-12;

    /// Damping growth factor on rejected steps.
    const DAMPING_STEP_UP: f64 = 8.0;

    /// Damping shrink divisor on accepted steps.
    const DAMPING_STEP_DOWN: f64 = 9.0;

    /// Damping floor after shrinking.
    const LAMBDA_FLOOR: f64 = 1e-20;

    /// Damping ceiling; exceeding it terminates with the last accepted state.
    const LAMBDA_CEILING: f64 = 1e25;

    /// Damping level beyond which central differences may engage.
    const CENTRAL_SWITCH_LAMBDA: f64 = 1e15;

    /// Step magnitude below which central differences may engage.
    const CENTRAL_SWITCH_STEP: f64 = 1e10;

    /// Mean x spacing below which the inferred delta scales with the data.
    const AUTO_DELTA_SPACING: f64 = 1e-6;

    /// Inferred finite-difference step for ordinarily spaced data.
    const AUTO_DELTA_DEFAULT: f64 = 1e-8;

    // ========================================================================
    // Entry Point
    // ========================================================================

    /// Fit `model(params, x)` to `(x, y)` starting from `initial`.
    ///
    /// # Errors
    ///
    /// * [`PeriodscanError::MismatchedInputs`] when `x` and `y` differ in
    ///   length.
    /// * [`PeriodscanError::TooFewPoints`] when there are not more points
    ///   than parameters.
    /// * [`PeriodscanError::NonAscendingX`] when delta inference meets
    ///   descending x values.
    /// * [`PeriodscanError::SingularSystem`] when the augmented normal
    ///   equations cannot be solved.
    pub fn fit<T, M>(
        x: &[T],
        y: &[T],
        initial: &[T],
        model: M,
        options: FitOptions<T>,
    ) -> Result<FitResult<T>, PeriodscanError>
    where
        T: Float,
        M: Fn(&[T], T) -> T,
    {
        Validator::validate_fit_inputs(x, y, initial.len())?;

        let num_points = x.len();
        let num_params = initial.len();
        let deltas = Self::resolve_deltas(x, num_params, options.parameter_deltas)?;
        let max_iterations = options.max_iterations.unwrap_or(40 * num_params);

        let mut state = FitState::new(x, y, num_params);
        let mut params: Vec<T> = initial.to_vec();
        state.evaluate(&model, &params);
        state.relinearize(&model, &params, &deltas);

        let mut chi2 = state.chi2();
        let mut lambda = options.damping;
        let lambda_floor = T::from(Self::LAMBDA_FLOOR).unwrap();
        let lambda_ceiling = T::from(Self::LAMBDA_CEILING).unwrap();
        let step_up = T::from(Self::DAMPING_STEP_UP).unwrap();
        let step_down = T::from(Self::DAMPING_STEP_DOWN).unwrap();

        let mut converged = false;
        let mut iteration = 0usize;

        while !converged && iteration < max_iterations {
            iteration += 1;

            let h = state.parameter_step(lambda)?;

            let params_old = params.clone();
            for (i, step) in h.iter().enumerate() {
                params[i] = params[i] + *step;
                if let Some(min) = &options.min {
                    if params[i] < min[i] {
                        params[i] = min[i];
                    }
                }
                if let Some(max) = &options.max {
                    if params[i] > max[i] {
                        params[i] = max[i];
                    }
                }
            }

            let y_old = state.y_hat.clone();
            state.evaluate(&model, &params);
            let chi2_old = chi2;
            chi2 = state.chi2();

            let h_max = h.iter().fold(T::zero(), |acc, &s| acc.max(s.abs()));
            if h_max < T::from(Self::CENTRAL_SWITCH_STEP).unwrap()
                && lambda > T::from(Self::CENTRAL_SWITCH_LAMBDA).unwrap()
            {
                state.central_differences = true;
            }

            let rho = (chi2_old - chi2) / state.rho_denominator(&h, lambda);
            if rho > T::from(Self::EPSILON_STEP).unwrap() {
                // Accepted: re-linearize at the new parameters.
                state.relinearize(&model, &params, &deltas);
                lambda = (lambda / step_down).max(lambda_floor);
            } else {
                // Rejected: revert and retry with stronger damping.
                params = params_old;
                state.y_hat = y_old;
                chi2 = chi2_old;
                if lambda >= lambda_ceiling {
                    break;
                }
                lambda = lambda * step_up;
                continue;
            }

            if iteration <= 2 {
                continue;
            }
            if norm2(&state.gradient) < T::from(Self::EPSILON_GRADIENT).unwrap() {
                converged = true;
            } else if chi2 / T::from(num_points - num_params).unwrap()
                < T::from(Self::EPSILON_CHI2_RED).unwrap()
            {
                converged = true;
            } else if h_max < T::from(Self::EPSILON_PARAMETERS).unwrap() {
                converged = true;
            }
        }

        Ok(FitResult {
            parameters: params,
            error: chi2,
            iterations: iteration,
        })
    }

    /// Resolve per-parameter finite-difference step sizes.
    ///
    /// Explicit deltas win; otherwise the mean x spacing decides between a
    /// data-scaled step (very dense x) and the fixed default.
    fn resolve_deltas<T: Float>(
        x: &[T],
        num_params: usize,
        explicit: Option<Vec<T>>,
    ) -> Result<Vec<T>, PeriodscanError> {
        if let Some(deltas) = explicit {
            debug_assert_eq!(deltas.len(), num_params);
            return Ok(deltas);
        }
        let span = x[x.len() - 1] - x[0];
        let average = span / T::from(x.len()).unwrap();
        if average < T::zero() {
            return Err(PeriodscanError::NonAscendingX);
        }
        let delta = if average < T::from(Self::AUTO_DELTA_SPACING).unwrap() {
            average / T::from(100.0).unwrap()
        } else {
            T::from(Self::AUTO_DELTA_DEFAULT).unwrap()
        };
        Ok(vec![delta; num_params])
    }
}

// ============================================================================
// Iteration State
// ============================================================================

/// Working buffers of one fit: model evaluations, Jacobian, and the normal
/// equations.
struct FitState<'a, T> {
    x: &'a [T],
    y: &'a [T],
    /// Current model output per point.
    y_hat: Vec<T>,
    jacobian: Matrix<T>,
    /// `J'J`, without any damping on the diagonal.
    normal: Matrix<T>,
    /// `J'r`, the gradient of the objective.
    gradient: Vec<T>,
    /// Switch to central differences near convergence.
    central_differences: bool,
}

impl<'a, T: Float> FitState<'a, T> {
    fn new(x: &'a [T], y: &'a [T], num_params: usize) -> Self {
        Self {
            x,
            y,
            y_hat: vec![T::zero(); x.len()],
            jacobian: Matrix::zeros(x.len(), num_params),
            normal: Matrix::zeros(num_params, num_params),
            gradient: vec![T::zero(); num_params],
            central_differences: false,
        }
    }

    /// Evaluate the model at every x into `y_hat`.
    fn evaluate<M: Fn(&[T], T) -> T>(&mut self, model: &M, params: &[T]) {
        for (i, &xi) in self.x.iter().enumerate() {
            self.y_hat[i] = model(params, xi);
        }
    }

    /// Sum of squared residuals of the current `y_hat`.
    fn chi2(&self) -> T {
        self.y
            .iter()
            .zip(self.y_hat.iter())
            .fold(T::zero(), |acc, (&yi, &fi)| {
                let r = yi - fi;
                acc + r * r
            })
    }

    /// Rebuild the Jacobian and the normal equations at `params`.
    fn relinearize<M: Fn(&[T], T) -> T>(&mut self, model: &M, params: &[T], deltas: &[T]) {
        self.update_jacobian(model, params, deltas);
        self.update_normal();
        self.update_gradient();
    }

    /// Finite-difference Jacobian, one column per parameter.
    fn update_jacobian<M: Fn(&[T], T) -> T>(&mut self, model: &M, params: &[T], deltas: &[T]) {
        let num_params = params.len();
        let half = T::from(0.5).unwrap();

        let mut shifted: Vec<T> = params.to_vec();
        for j in 0..num_params {
            let delta = deltas[j];
            for (i, &xi) in self.x.iter().enumerate() {
                shifted[j] = params[j] + delta;
                let y_right = model(&shifted, xi);
                let derivative = if self.central_differences {
                    shifted[j] = params[j] - delta;
                    let y_left = model(&shifted, xi);
                    half * (y_right - y_left) / delta
                } else {
                    (y_right - self.y_hat[i]) / delta
                };
                self.jacobian.set(i, j, derivative);
            }
            shifted[j] = params[j];
        }
    }

    /// `normal = J'J`.
    fn update_normal(&mut self) {
        let p = self.normal.rows;
        for i in 0..p {
            for j in 0..p {
                let mut sum = T::zero();
                for k in 0..self.jacobian.rows {
                    sum = sum + self.jacobian.get(k, i) * self.jacobian.get(k, j);
                }
                self.normal.set(i, j, sum);
            }
        }
    }

    /// `gradient = J'(y - y_hat)`.
    fn update_gradient(&mut self) {
        for j in 0..self.gradient.len() {
            let mut sum = T::zero();
            for k in 0..self.jacobian.rows {
                sum = sum + self.jacobian.get(k, j) * (self.y[k] - self.y_hat[k]);
            }
            self.gradient[j] = sum;
        }
    }

    /// Solve `(J'J + lambda*I) h = J'r` on a copy of the normal matrix.
    fn parameter_step(&self, lambda: T) -> Result<Vec<T>, PeriodscanError> {
        let mut augmented = self.normal.clone();
        for i in 0..augmented.rows {
            let d = augmented.get(i, i) + lambda;
            augmented.set(i, i, d);
        }
        solve(&augmented, &self.gradient)
    }

    /// Predicted-reduction denominator of the gain ratio:
    /// `|sum h_i (lambda*h_i + g_i)|`.
    fn rho_denominator(&self, h: &[T], lambda: T) -> T {
        h.iter()
            .zip(self.gradient.iter())
            .fold(T::zero(), |acc, (&hi, &gi)| acc + hi * (lambda * hi + gi))
            .abs()
    }
}
