//! Seeded synthetic experiments.
//!
//! Every generator returns rows in the input-file layout: one row per input
//! feature, followed by the label row. Values are rounded to two decimals,
//! as they would be when written to a CSV by hand.

use rand::prelude::*;

use crate::utils::round_to_precision;

/// Uniform noise in `[-amplitude / 2, amplitude / 2)`.
fn noise(rng: &mut StdRng, amplitude: f64) -> f64 {
    amplitude * (rng.r#gen::<f64>() - 0.5)
}

fn two_decimals(rows: &mut [Vec<f64>]) {
    for value in rows.iter_mut().flatten() {
        *value = round_to_precision(*value, 2);
    }
}

/// Exact line `y = intercept + slope·x` on `n_samples` points centered on zero.
///
/// No noise, so any solver should recover the coefficients.
pub fn linear_univariate(n_samples: usize, intercept: f64, slope: f64) -> Vec<Vec<f64>> {
    let center = n_samples.saturating_sub(1) as f64 / 2.0;
    let x: Vec<f64> = (0..n_samples).map(|i| i as f64 - center).collect();
    let y = x.iter().map(|&x| intercept + slope * x).collect();
    vec![x, y]
}

/// Noisy paraboloid `z = 0.15 + x²/5 - 0.12x + y²/7 - 0.08y` sampled on a jittered
/// 8×8 grid over `[-8, 6]²`.
pub fn quadratic_bivariate(seed: u64) -> Vec<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let paraboloid = |x: f64, y: f64| 0.15 + x * x / 5.0 - 0.12 * x + y * y / 7.0 - 0.08 * y;

    let mut rows = vec![Vec::with_capacity(64); 3];
    for i in (-8..8).step_by(2).map(f64::from) {
        for j in (-8..8).step_by(2).map(f64::from) {
            rows[0].push(i + noise(&mut rng, 2.0));
            rows[1].push(j + noise(&mut rng, 2.0));
            rows[2].push(paraboloid(i, j) + noise(&mut rng, 2.0));
        }
    }
    two_decimals(&mut rows);
    rows
}

/// Three periodic features over `t ∈ [-7, 7)` with a label that is linear
/// in the first two: `y = f(t) - g(t) + noise`.
pub fn linear_trivariate(seed: u64) -> Vec<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut rows = vec![Vec::with_capacity(700); 4];

    for t in (-350..350).map(|i| f64::from(i) * 0.02) {
        let f = |rng: &mut StdRng| 10.0 * (0.5 * (1.1 * t).sin() + noise(rng, 0.2) + 3.0);
        let g = |rng: &mut StdRng| 10.0 * (0.6 * (0.9 * t).cos() + noise(rng, 0.2) - 5.0);
        let h = |rng: &mut StdRng| {
            10.0 * (-(t - 6.5).abs().powf(2.5) / 250.0 + noise(rng, 0.2) + 10.0)
        };

        rows[0].push(f(&mut rng));
        rows[1].push(g(&mut rng));
        rows[2].push(h(&mut rng));
        let y = f(&mut rng) - g(&mut rng) + 25.0 * noise(&mut rng, 0.2);
        rows[3].push(y);
    }
    two_decimals(&mut rows);
    rows
}

/// A noisy torus-like curve over `t ∈ [-17.5, 17.5)`; the label is twice the
/// third feature plus noise.
pub fn quadratic_trivariate(seed: u64) -> Vec<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut rows = vec![Vec::with_capacity(700); 4];

    for t in (-350..350).map(|i| f64::from(i) * 0.05) {
        let radius = 10.0 + 2.0 * (5.0 * t).cos();
        rows[0].push(radius * t.cos() + noise(&mut rng, 1.0));
        rows[1].push((5.0 * t).sin() + noise(&mut rng, 1.0));
        rows[2].push(radius * t.sin() + noise(&mut rng, 1.0));
        let y = 2.0 * (radius * t.sin() + noise(&mut rng, 1.0)) + 2.0 * noise(&mut rng, 1.0);
        rows[3].push(y);
    }
    two_decimals(&mut rows);
    rows
}
