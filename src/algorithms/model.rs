//! The five-parameter periodic model.
//!
//! ## Purpose
//!
//! Defines the parametric model fitted to a periodic series:
//!
//! ```text
//! f(x) = (a + b*x) + (c + d*x) * cos(2*pi*x + e)
//! ```
//!
//! where `x = index / period`. The linear part `(a + b*x)` captures the
//! global trend, the cosine part a seasonal oscillation whose amplitude may
//! itself drift linearly, and `e` the phase.
//!
//! ## Design notes
//!
//! * The model is an ordinary function matching the solver's
//!   `Fn(&[T], T) -> T` shape; the solver knows nothing about it.
//! * The default initial guess `[1, 0, 1, 0, 0]` assumes unit offset and
//!   seasonal amplitude with no drift and zero phase.

use num_traits::Float;

/// Parameter count of the periodic model.
pub const PERIODIC_PARAMS: usize = 5;

/// Evaluate the periodic model at `x` for parameters `[a, b, c, d, e]`.
pub fn periodic_model<T: Float>(params: &[T], x: T) -> T {
    debug_assert_eq!(params.len(), PERIODIC_PARAMS);
    let (a, b, c, d, e) = (params[0], params[1], params[2], params[3], params[4]);
    let tau = T::from(core::f64::consts::TAU).unwrap();
    (a + b * x) + (c + d * x) * (tau * x + e).cos()
}

/// Default initial parameter guess for fitting the periodic model.
pub fn initial_guess<T: Float>() -> [T; PERIODIC_PARAMS] {
    [T::one(), T::zero(), T::one(), T::zero(), T::zero()]
}
