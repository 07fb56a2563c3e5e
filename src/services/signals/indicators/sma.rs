//! Rolling arithmetic mean.

/// Trailing mean over `window` values.
///
/// Position `i` is defined only when every value in `i + 1 - window ..= i`
/// is defined, so leading positions stay `None` until the window fills.
pub fn rolling_mean(values: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if window == 0 {
        return out;
    }

    for i in (window - 1)..values.len() {
        let sum: Option<f64> = values[i + 1 - window..=i].iter().copied().sum();
        out[i] = sum.map(|s| s / window as f64);
    }

    out
}
