//! Two-tone pseudo coloring for quality grids.
//!
//! ## Purpose
//!
//! This module discretizes a continuous color ramp into a small set of
//! stops and maps scalar values to a pair of adjacent stops plus a blend
//! ratio. Rendering two tones per cell instead of one continuous color
//! lets a display encode a value at higher resolution than a flat fill.
//!
//! ## Key concepts
//!
//! ### Interval borders
//!
//! A colorizer built with `n` intervals carries `n + 1` stops at borders
//! `0, 1/n, ..., 1`. A value normalizes to `t` in `[0, 1]`, lands in the
//! interval whose borders enclose `t`, and blends its two stop colors by
//! the position of `t` inside that interval.
//!
//! ### Zero-centered mode
//!
//! For signed measures the midpoint of the ramp is anchored at zero: `t`
//! becomes `0.5 + 0.5 * |v| / max(|min|, |max|)` signed by the value, so
//! equal magnitudes of either sign sit symmetrically around the middle
//! stop.
//!
//! ## Invariants
//!
//! * Values at or beyond the upper bound pin to the last stop with the
//!   blend ratio of a degenerate interval forced to 0.
//! * A value exactly on a border belongs to the interval starting there
//!   (ratio 0), except at the very last border.
//!
//! ## Non-goals
//!
//! * This module does not choose color scales; ramps arrive as opaque
//!   `Fn(T) -> String` interpolators.

#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::string::String;
#[cfg(feature = "std")]
use std::vec::Vec;

use num_traits::Float;

// ============================================================================
// Two-Tone Color
// ============================================================================

/// One colorized value: two adjacent ramp stops and a blend position.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoToneColor<T> {
    /// Stop at the lower border of the matched interval.
    pub color_a: String,

    /// Stop at the upper border of the matched interval.
    pub color_b: String,

    /// Position of the value inside the interval, in `[0, 1]`.
    pub ratio: T,
}

// ============================================================================
// Colorizer
// ============================================================================

/// Maps scalar values onto a discretized two-tone ramp.
#[derive(Debug, Clone)]
pub struct TwoToneColoring<T> {
    min: T,
    max: T,
    zero_centered: bool,
    colors: Vec<String>,
    interval_borders: Vec<T>,
}

impl<T: Float> TwoToneColoring<T> {
    /// Build a colorizer with the default ramp orientation: inverted stops
    /// (high values map to the start of the ramp) and linear normalization.
    pub fn new<F>(min: T, max: T, intervals: usize, interpolate: F) -> Self
    where
        F: Fn(T) -> String,
    {
        Self::with_options(min, max, intervals, interpolate, true, false)
    }

    /// Build a colorizer with explicit orientation and centering options.
    pub fn with_options<F>(
        min: T,
        max: T,
        intervals: usize,
        interpolate: F,
        inverse: bool,
        zero_centered: bool,
    ) -> Self
    where
        F: Fn(T) -> String,
    {
        let n = T::from(intervals).unwrap();
        let mut colors = Vec::with_capacity(intervals + 1);
        let mut interval_borders = Vec::with_capacity(intervals + 1);
        for i in 0..=intervals {
            let position = T::from(i).unwrap() / n;
            let t = if inverse { T::one() - position } else { position };
            colors.push(interpolate(t));
            interval_borders.push(position);
        }
        Self {
            min,
            max,
            zero_centered,
            colors,
            interval_borders,
        }
    }

    /// Color a value: normalize it into `[0, 1]`, locate its interval, and
    /// blend the interval's two stops.
    pub fn blend(&self, value: T) -> TwoToneColor<T> {
        let mut t = (value - self.min) / (self.max - self.min);
        if self.zero_centered {
            let max_span = self.min.abs().max(self.max.abs());
            let radius = value.abs() / max_span;
            let half = T::from(0.5).unwrap();
            t = if value < T::zero() {
                half - radius * half
            } else {
                half + radius * half
            };
        }

        let last = self.interval_borders.len() - 1;
        let mut interval = (0usize, 0usize);
        if t >= T::one() {
            interval = (last, last);
        }
        for i in 0..last {
            if self.interval_borders[i] <= t && self.interval_borders[i + 1] >= t {
                interval = (i, i + 1);
            }
        }

        let width = self.interval_borders[interval.1] - self.interval_borders[interval.0];
        let ratio = if width > T::zero() {
            (t - self.interval_borders[interval.0]) / width
        } else {
            T::zero()
        };

        TwoToneColor {
            color_a: self.colors[interval.0].clone(),
            color_b: self.colors[interval.1].clone(),
            ratio,
        }
    }
}

// ============================================================================
// Ramp Helpers
// ============================================================================

/// Sample a continuous interpolator into a discrete color array.
///
/// Positions are spread over `[start, end]` in `data_length` equal steps,
/// in reverse when requested.
pub fn create_colors_array<T, F>(
    data_length: usize,
    start: T,
    end: T,
    reverse: bool,
    interpolate: F,
) -> Vec<String>
where
    T: Float,
    F: Fn(T) -> String,
{
    let step = (end - start) / T::from(data_length).unwrap();
    (0..data_length)
        .map(|i| {
            let offset = T::from(i).unwrap() * step;
            let position = if reverse { end - offset } else { start + offset };
            interpolate(position)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    #[cfg(not(feature = "std"))]
    use alloc::format;
    #[cfg(not(feature = "std"))]
    use alloc::vec;

    /// Readable stand-in for a real color scale.
    fn label_ramp(t: f64) -> String {
        format!("c{:.2}", t)
    }

    #[test]
    fn builds_one_more_stop_than_intervals() {
        let coloring = TwoToneColoring::with_options(0.0, 1.0, 4, label_ramp, false, false);
        assert_eq!(coloring.colors.len(), 5);
        assert_eq!(coloring.colors[0], "c0.00");
        assert_eq!(coloring.colors[4], "c1.00");
    }

    #[test]
    fn inverse_reverses_the_stop_order() {
        let coloring = TwoToneColoring::new(0.0, 1.0, 2, label_ramp);
        assert_eq!(coloring.colors, vec!["c1.00", "c0.50", "c0.00"]);
    }

    #[test]
    fn midpoint_blends_between_its_interval_stops() {
        let coloring = TwoToneColoring::with_options(0.0, 10.0, 2, label_ramp, false, false);
        let tone = coloring.blend(2.5);
        assert_eq!(tone.color_a, "c0.00");
        assert_eq!(tone.color_b, "c0.50");
        assert!((tone.ratio - 0.5).abs() < 1e-12);
    }

    #[test]
    fn minimum_starts_the_first_interval_and_maximum_ends_the_last() {
        let coloring = TwoToneColoring::with_options(2.0, 6.0, 4, label_ramp, false, false);
        let low = coloring.blend(2.0);
        assert_eq!(low.color_a, "c0.00");
        assert_eq!(low.ratio, 0.0);
        let high = coloring.blend(6.0);
        // t == 1 matches the final interval with full blend.
        assert_eq!(high.color_a, "c0.75");
        assert_eq!(high.color_b, "c1.00");
        assert_eq!(high.ratio, 1.0);
    }

    #[test]
    fn values_above_the_maximum_pin_to_the_last_stop() {
        let coloring = TwoToneColoring::with_options(0.0, 1.0, 4, label_ramp, false, false);
        let tone = coloring.blend(7.0);
        assert_eq!(tone.color_a, "c1.00");
        assert_eq!(tone.color_b, "c1.00");
        assert_eq!(tone.ratio, 0.0);
    }

    #[test]
    fn border_values_start_their_interval_with_ratio_zero() {
        let coloring = TwoToneColoring::with_options(0.0, 1.0, 4, label_ramp, false, false);
        let tone = coloring.blend(0.25);
        assert_eq!(tone.color_a, "c0.25");
        assert_eq!(tone.color_b, "c0.50");
        assert_eq!(tone.ratio, 0.0);
    }

    #[test]
    fn zero_centered_maps_sign_symmetric_values_around_the_middle() {
        let coloring = TwoToneColoring::with_options(-4.0, 2.0, 4, label_ramp, false, true);
        let positive = coloring.blend(2.0);
        let negative = coloring.blend(-2.0);
        // +2 at half the span above center, -2 at half the span below.
        assert_eq!(positive.color_a, "c0.75");
        assert_eq!(negative.color_a, "c0.25");
        assert!((positive.ratio - 0.0).abs() < 1e-12);
    }

    #[test]
    fn ramp_sampling_reverses_on_request() {
        let forward = create_colors_array(3, 0.0, 0.9, false, label_ramp);
        let reversed = create_colors_array(3, 0.0, 0.9, true, label_ramp);
        assert_eq!(forward, vec!["c0.00", "c0.30", "c0.60"]);
        assert_eq!(reversed, vec!["c0.90", "c0.60", "c0.30"]);
    }
}
