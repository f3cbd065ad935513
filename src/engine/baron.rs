use super::error::Error;
use super::params::Coefficients;
use crate::model::charge::ChargeStateStats;

/// Maps a projectile and its reduced velocity to equilibrium charge-state
/// statistics.
///
/// Implementations must be pure: identical input gives identical output.
pub trait ChargeStateModel: Send + Sync {
    fn stats(&self, atomic_number: i32, reduced_velocity: f64) -> Result<ChargeStateStats, Error>;
}

/// Baron semi-empirical model for heavy ions stripped in carbon foils.
///
/// ```text
/// q̄ = Z · (1 − exp(−k₁ · x · Z^(−k₂)))
/// d = c_d · sqrt(q̄ · (1 − q̄/Z))
/// ```
///
/// `x` is the ion velocity in Bohr units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaronModel {
    coefficients: Coefficients,
}

impl BaronModel {
    pub fn new(coefficients: Coefficients) -> Self {
        Self { coefficients }
    }

    pub fn coefficients(&self) -> &Coefficients {
        &self.coefficients
    }
}

impl Default for BaronModel {
    fn default() -> Self {
        Self::new(*super::params::get_default_coefficients())
    }
}

impl ChargeStateModel for BaronModel {
    fn stats(&self, atomic_number: i32, reduced_velocity: f64) -> Result<ChargeStateStats, Error> {
        if atomic_number <= 0 {
            return Err(Error::InvalidChargeState(format!(
                "atomic number must be positive, got {atomic_number}"
            )));
        }
        if reduced_velocity.is_nan() || reduced_velocity < 0.0 {
            return Err(Error::InvalidChargeState(format!(
                "reduced velocity must be non-negative, got {reduced_velocity}"
            )));
        }

        let Coefficients {
            k1,
            k2,
            width_scale,
        } = self.coefficients;
        let z = f64::from(atomic_number);

        // 1 − q̄/Z, kept separate so the width never sees rounding below zero.
        let neutral_fraction = (-k1 * reduced_velocity * z.powf(-k2)).exp();
        let mean = z * (1.0 - neutral_fraction);
        let std = width_scale * (mean * neutral_fraction).sqrt();

        log::debug!("Z={atomic_number} x={reduced_velocity:.6} -> mean={mean:.4}, std={std:.4}");

        Ok(ChargeStateStats { mean, std })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    // x for 4.2 MeV/u at 931.5 MeV rest energy.
    const LINAC3_X: f64 = 12.969_347;

    #[test]
    fn lead_at_linac3_energy() {
        let stats = BaronModel::default().stats(82, LINAC3_X).unwrap();
        assert!(approx_eq(stats.mean, 54.686, 1e-2));
        assert!(approx_eq(stats.std, 2.134, 1e-2));
    }

    #[test]
    fn mean_bounded_by_atomic_number() {
        let model = BaronModel::default();
        for z in 1..=100 {
            for x in [0.0, 0.5, 5.0, LINAC3_X, 50.0, 137.0] {
                let stats = model.stats(z, x).unwrap();
                assert!(stats.mean >= 0.0);
                assert!(stats.mean <= f64::from(z));
                assert!(stats.std >= 0.0);
            }
        }
    }

    #[test]
    fn mean_strictly_increases_with_velocity() {
        let model = BaronModel::default();
        let xs = [0.1, 0.5, 1.0, 2.0, 5.0, 10.0, 20.0];
        let means: Vec<f64> = xs
            .iter()
            .map(|&x| model.stats(92, x).unwrap().mean)
            .collect();
        for pair in means.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn limits_at_zero_and_high_velocity() {
        let model = BaronModel::default();

        let at_rest = model.stats(50, 0.0).unwrap();
        assert_eq!(at_rest.mean, 0.0);
        assert_eq!(at_rest.std, 0.0);

        let fast = model.stats(50, 1.0e4).unwrap();
        assert_eq!(fast.mean, 50.0);
        assert_eq!(fast.std, 0.0);
    }

    #[test]
    fn width_peaks_near_half_stripping() {
        let model = BaronModel::new(Coefficients {
            k1: 1.0,
            k2: 0.0,
            width_scale: 1.0,
        });
        // With k2 = 0, q̄ = Z/2 at x = ln 2.
        let half = model.stats(40, std::f64::consts::LN_2).unwrap();
        assert!(approx_eq(half.mean, 20.0, 1e-12));
        assert!(approx_eq(half.std, 10.0_f64.sqrt(), 1e-12));

        let below = model.stats(40, 0.2).unwrap();
        let above = model.stats(40, 2.0).unwrap();
        assert!(half.std > below.std);
        assert!(half.std > above.std);
    }

    #[test]
    fn rejects_invalid_inputs() {
        let model = BaronModel::default();
        assert!(matches!(
            model.stats(0, 1.0),
            Err(Error::InvalidChargeState(_))
        ));
        assert!(matches!(
            model.stats(-3, 1.0),
            Err(Error::InvalidChargeState(_))
        ));
        assert!(matches!(
            model.stats(82, -0.1),
            Err(Error::InvalidChargeState(_))
        ));
        assert!(matches!(
            model.stats(82, f64::NAN),
            Err(Error::InvalidChargeState(_))
        ));
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let model = BaronModel::default();
        let a = model.stats(26, 7.3).unwrap();
        let b = model.stats(26, 7.3).unwrap();
        assert_eq!(a.mean.to_bits(), b.mean.to_bits());
        assert_eq!(a.std.to_bits(), b.std.to_bits());
    }
}
