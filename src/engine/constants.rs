//! Physical constants used by the kinematics conversion and the default
//! model coefficients (CODATA 2018).

/// Speed of light in vacuum (m/s).
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// Fine-structure constant α.
pub const FINE_STRUCTURE: f64 = 7.297_352_569_3e-3;

/// Bohr velocity v₀ = αc (m/s), about 2.1877 × 10⁶ m/s.
pub const BOHR_VELOCITY: f64 = FINE_STRUCTURE * SPEED_OF_LIGHT;

/// Prefactor of the Baron mean-charge fit when velocity is given as β = v/c.
pub const BARON_K1_BETA: f64 = 83.275;

/// Baron prefactor rescaled to velocities in Bohr units (x = β/α).
pub const BARON_K1: f64 = BARON_K1_BETA * FINE_STRUCTURE;

/// Exponent of the atomic-number scaling in the mean-charge fit.
pub const BARON_K2: f64 = 0.447;

/// Scale of the binomial-like width d = c_d·sqrt(q̄(1 − q̄/Z)).
pub const BARON_WIDTH_SCALE: f64 = 0.5;

/// Kinetic energy per nucleon of the CERN LINAC3 beam (MeV/u).
pub const DEFAULT_ENERGY_PER_NUCLEON: f64 = 4.2;

/// Rest energy per nucleon used with [`DEFAULT_ENERGY_PER_NUCLEON`] (MeV).
pub const DEFAULT_REST_ENERGY: f64 = 931.5;

/// Default half-width of the distribution window, in charge states.
pub const DEFAULT_ONESIDED_LEN: i32 = 5;

/// Largest accepted half-width. Windows hold at most `2 * 10_000 + 1`
/// states, far wider than any ion's charge-state range.
pub const MAX_ONESIDED_LEN: i32 = 10_000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bohr_velocity_matches_reference() {
        assert!((BOHR_VELOCITY - 2.187_691_263e6).abs() < 1.0);
    }

    #[test]
    fn rescaled_prefactor_matches_embedded_value() {
        assert!((BARON_K1 - 0.607_687_035).abs() < 1e-8);
    }
}
