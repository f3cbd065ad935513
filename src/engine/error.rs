//! Error types for charge-state calculations.
//!
//! Every validation failure in the engine maps to one variant here, so a
//! caller can tell a bad element choice from a bad energy or a bad window
//! without parsing messages.

use thiserror::Error;

use crate::model::types::{MAX_ATOMIC_NUMBER, MIN_ATOMIC_NUMBER};

/// Errors that can occur while computing charge-state statistics.
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to parse a custom coefficient TOML document.
    #[error("failed to parse model coefficients: {0}")]
    ParameterParse(#[from] toml::de::Error),

    /// Coefficient document parsed but holds unusable values.
    #[error("invalid model coefficient '{name}' = {value}: {detail}")]
    InvalidCoefficient {
        /// Coefficient key.
        name: &'static str,
        /// Offending value.
        value: f64,
        /// Description of the problem.
        detail: String,
    },

    /// Atomic number outside the reference element table.
    #[error(
        "atomic number {atomic_number} is not supported (expected {}..={})",
        MIN_ATOMIC_NUMBER,
        MAX_ATOMIC_NUMBER
    )]
    NotFound {
        /// The rejected atomic number.
        atomic_number: i32,
    },

    /// Non-positive or non-finite energy, or a non-physical Lorentz factor.
    #[error("invalid beam kinematics: {detail}")]
    InvalidKinematics {
        /// Kinetic energy per nucleon (MeV/u) as given.
        energy_per_nucleon: f64,
        /// Rest energy (MeV) as given.
        rest_energy: f64,
        /// Description of the problem.
        detail: String,
    },

    /// Non-positive atomic number or negative reduced velocity reached the
    /// charge-state model.
    #[error("invalid charge-state model input: {0}")]
    InvalidChargeState(String),

    /// Negative spread, negative window half-width or unusable mean.
    #[error("invalid distribution request: {0}")]
    InvalidDistribution(String),
}

impl Error {
    /// Creates a [`NotFound`](Error::NotFound) error.
    pub fn not_found(atomic_number: i32) -> Self {
        Self::NotFound { atomic_number }
    }

    /// Creates an [`InvalidKinematics`](Error::InvalidKinematics) error.
    ///
    /// # Arguments
    ///
    /// * `energy_per_nucleon` — Kinetic energy per nucleon as given (MeV/u)
    /// * `rest_energy` — Rest energy as given (MeV)
    /// * `details` — Description of the problem
    pub fn invalid_kinematics(
        energy_per_nucleon: f64,
        rest_energy: f64,
        details: impl Into<String>,
    ) -> Self {
        Self::InvalidKinematics {
            energy_per_nucleon,
            rest_energy,
            detail: details.into(),
        }
    }

    /// Creates an [`InvalidCoefficient`](Error::InvalidCoefficient) error.
    pub fn invalid_coefficient(name: &'static str, value: f64, details: impl Into<String>) -> Self {
        Self::InvalidCoefficient {
            name,
            value,
            detail: details.into(),
        }
    }
}
