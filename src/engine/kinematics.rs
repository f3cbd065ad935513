use super::constants::{BOHR_VELOCITY, SPEED_OF_LIGHT};
use super::error::Error;
use crate::model::beam::Kinematics;

/// Kinetic-to-rest energy ratio t = T/E₀ after validating both inputs.
fn energy_ratio(kinematics: &Kinematics) -> Result<f64, Error> {
    let Kinematics {
        energy_per_nucleon: energy,
        rest_energy,
    } = *kinematics;

    if !energy.is_finite() || energy <= 0.0 {
        return Err(Error::invalid_kinematics(
            energy,
            rest_energy,
            format!("energy per nucleon must be a positive number, got {energy}"),
        ));
    }
    if !rest_energy.is_finite() || rest_energy <= 0.0 {
        return Err(Error::invalid_kinematics(
            energy,
            rest_energy,
            format!("rest energy must be a positive number, got {rest_energy}"),
        ));
    }

    Ok(energy / rest_energy)
}

/// Relativistic Lorentz factor γ = 1 + T/E₀ for kinetic energy `T` and rest
/// energy `E₀` per nucleon.
///
/// Saturates to infinity when T/E₀ overflows `f64`.
pub fn lorentz_factor(kinematics: &Kinematics) -> Result<f64, Error> {
    let gamma = 1.0 + energy_ratio(kinematics)?;
    if gamma.is_nan() || gamma < 1.0 {
        return Err(Error::invalid_kinematics(
            kinematics.energy_per_nucleon,
            kinematics.rest_energy,
            format!("non-physical Lorentz factor {gamma}"),
        ));
    }

    Ok(gamma)
}

/// Speed as a fraction of the speed of light.
///
/// Evaluated as β = sqrt(t(t + 2)) / (1 + t) with t = T/E₀, which equals
/// sqrt(1 − 1/γ²) but keeps full precision for slow ions where 1/γ² rounds
/// to 1 (t below about 1e-16). β is zero only when t underflows to zero,
/// and one when t overflows.
pub fn beta(kinematics: &Kinematics) -> Result<f64, Error> {
    let t = energy_ratio(kinematics)?;
    if t.is_infinite() {
        return Ok(1.0);
    }
    Ok((t.sqrt() * (t + 2.0).sqrt() / (1.0 + t)).min(1.0))
}

/// Ion velocity in Bohr-velocity units, x = βc / v₀.
pub fn reduced_velocity(kinematics: &Kinematics) -> Result<f64, Error> {
    let beta = beta(kinematics)?;
    let x = beta * SPEED_OF_LIGHT / BOHR_VELOCITY;

    log::debug!(
        "kinematics T={} MeV/u E0={} MeV -> beta={beta:.6}, x={x:.6}",
        kinematics.energy_per_nucleon,
        kinematics.rest_energy
    );

    Ok(x)
}
