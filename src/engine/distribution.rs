use super::constants::MAX_ONESIDED_LEN;
use super::error::Error;
use crate::model::charge::Distribution;

/// Discretizes a continuous (mean, std) pair into a normalized distribution
/// over `round(mean) ± onesided_len`.
///
/// Charge states below zero are dropped from the window, so the result is
/// shorter than `2 * onesided_len + 1` only for low means. A zero `std`
/// puts all probability on `round(mean)`.
///
/// `onesided_len` must lie in `0..=MAX_ONESIDED_LEN`.
pub fn build(mean: f64, std: f64, onesided_len: i32) -> Result<Distribution, Error> {
    if !mean.is_finite() || mean < 0.0 || mean > f64::from(i32::MAX) {
        return Err(Error::InvalidDistribution(format!(
            "mean charge state must be a non-negative finite number, got {mean}"
        )));
    }
    if !std.is_finite() || std < 0.0 {
        return Err(Error::InvalidDistribution(format!(
            "standard deviation must be a non-negative finite number, got {std}"
        )));
    }
    if !(0..=MAX_ONESIDED_LEN).contains(&onesided_len) {
        return Err(Error::InvalidDistribution(format!(
            "window half-width must be between 0 and {MAX_ONESIDED_LEN}, got {onesided_len}"
        )));
    }

    let center = mean.round() as i64;
    let lo = (center - i64::from(onesided_len)).max(0);
    let hi = center + i64::from(onesided_len);
    if hi > i64::from(i32::MAX) {
        return Err(Error::InvalidDistribution(format!(
            "charge-state window [{lo}, {hi}] exceeds the representable range"
        )));
    }

    let charge_states: Vec<i32> = (lo as i32..=hi as i32).collect();
    let weights = gaussian_weights(&charge_states, mean, std, center as i32);

    let total: f64 = weights.iter().sum();
    let probabilities = weights.into_iter().map(|w| w / total).collect();

    Ok(Distribution {
        charge_states,
        probabilities,
    })
}

fn gaussian_weights(charge_states: &[i32], mean: f64, std: f64, center: i32) -> Vec<f64> {
    let two_var = 2.0 * std * std;
    if two_var == 0.0 {
        return charge_states
            .iter()
            .map(|&q| if q == center { 1.0 } else { 0.0 })
            .collect();
    }

    // Exponents are shifted by the nearest state's so the peak weight is 1
    // and narrow widths cannot underflow the whole window to zero.
    let sq_dist = |q: i32| {
        let d = f64::from(q) - mean;
        d * d
    };
    let nearest = charge_states
        .iter()
        .map(|&q| sq_dist(q))
        .fold(f64::INFINITY, f64::min);

    charge_states
        .iter()
        .map(|&q| (-(sq_dist(q) - nearest) / two_var).exp())
        .collect()
}
