//! Configuration for charge-state calculations.
//!
//! [`ModelConfig`] selects the model coefficients and the reference beam
//! used by the single-argument queries
//! ([`ChargeState::mean_charge_state`](super::ChargeState::mean_charge_state)
//! and [`ChargeState::std_charge_state`](super::ChargeState::std_charge_state)).

use super::constants::{DEFAULT_ENERGY_PER_NUCLEON, DEFAULT_ONESIDED_LEN, DEFAULT_REST_ENERGY};

/// Main configuration of a [`ChargeState`](super::ChargeState) calculator.
///
/// # Examples
///
/// ```
/// use charge_state::{ChargeState, ModelConfig};
///
/// // Reference beam of 10 MeV/u instead of the LINAC3 default.
/// let config = ModelConfig {
///     energy_per_nucleon: 10.0,
///     ..Default::default()
/// };
/// let calc = ChargeState::new(&config)?;
/// let mean = calc.mean_charge_state(82)?;
/// assert!(mean > 0.0 && mean < 82.0);
/// # Ok::<(), charge_state::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    /// Custom model coefficients in TOML format.
    ///
    /// If `None`, uses the embedded `default.coefficients.toml`.
    pub coefficients: Option<String>,

    /// Kinetic energy per nucleon of the reference beam (MeV/u).
    pub energy_per_nucleon: f64,

    /// Rest energy per nucleon of the reference beam (MeV).
    pub rest_energy: f64,

    /// Default half-width of distribution windows.
    pub onesided_len: i32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            coefficients: None,
            energy_per_nucleon: DEFAULT_ENERGY_PER_NUCLEON,
            rest_energy: DEFAULT_REST_ENERGY,
            onesided_len: DEFAULT_ONESIDED_LEN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = ModelConfig::default();
        assert!(config.coefficients.is_none());
        assert_eq!(config.energy_per_nucleon, 4.2);
        assert_eq!(config.rest_energy, 931.5);
        assert_eq!(config.onesided_len, 5);
    }
}
