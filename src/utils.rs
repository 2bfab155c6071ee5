//! Common numeric utilities used across the crate.

use ndarray::Array1;

// =============================================================================
// Decimal Rounding
// =============================================================================

/// Round `value` to `precision` decimal places, ties to even.
///
/// If scaling by `10^precision` overflows, the value is returned unchanged:
/// at that magnitude there are no fractional digits left to round.
#[inline]
pub fn round_to_precision(value: f64, precision: u32) -> f64 {
    let scale = 10f64.powi(precision as i32);
    let scaled = value * scale;
    if !scaled.is_finite() || !scale.is_finite() {
        return value;
    }
    // `+ 0.0` folds a rounded `-0.0` into `0.0`.
    scaled.round_ties_even() / scale + 0.0
}

/// Round every element of `values` in place.
pub fn round_in_place(values: &mut Array1<f64>, precision: u32) {
    values.mapv_inplace(|v| round_to_precision(v, precision));
}

/// Convergence threshold for a given precision: `10^(-precision)`.
#[inline]
pub fn precision_threshold(precision: u32) -> f64 {
    10f64.powi(-(precision as i32))
}
