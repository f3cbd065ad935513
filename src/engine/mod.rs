mod baron;
mod config;
mod constants;
mod distribution;
mod elements;
mod error;
mod kinematics;
mod params;
mod summary;

pub use baron::{BaronModel, ChargeStateModel};
pub use config::ModelConfig;
pub use constants::{
    BARON_K1, BARON_K1_BETA, BARON_K2, BARON_WIDTH_SCALE, BOHR_VELOCITY, DEFAULT_ENERGY_PER_NUCLEON,
    DEFAULT_ONESIDED_LEN, DEFAULT_REST_ENERGY, FINE_STRUCTURE, MAX_ONESIDED_LEN, SPEED_OF_LIGHT,
};
pub use distribution::build as build_distribution;
pub use elements::lookup;
pub use error::Error;
pub use kinematics::{beta, lorentz_factor, reduced_velocity};
pub use params::{Coefficients, get_default_coefficients, load_coefficients};
pub use summary::summarize;

use crate::model::beam::Kinematics;
use crate::model::charge::{ChargeStateStats, Distribution, SummaryTable};
use crate::model::types::Element;

/// Charge-state calculator: a model plus a reference beam.
///
/// The single-argument queries evaluate at the reference beam; the others
/// take explicit kinematics.
#[derive(Debug, Clone)]
pub struct ChargeState<M = BaronModel> {
    model: M,
    reference: Kinematics,
    onesided_len: i32,
}

impl ChargeState<BaronModel> {
    pub fn new(config: &ModelConfig) -> Result<Self, Error> {
        let coefficients = load_coefficients(config.coefficients.as_deref())?;
        Ok(Self::from_parts(
            BaronModel::new(coefficients),
            Kinematics::new(config.energy_per_nucleon, config.rest_energy),
            config.onesided_len,
        ))
    }
}

impl Default for ChargeState<BaronModel> {
    fn default() -> Self {
        Self::from_parts(
            BaronModel::default(),
            Kinematics::new(DEFAULT_ENERGY_PER_NUCLEON, DEFAULT_REST_ENERGY),
            DEFAULT_ONESIDED_LEN,
        )
    }
}

impl<M: ChargeStateModel> ChargeState<M> {
    pub fn from_parts(model: M, reference: Kinematics, onesided_len: i32) -> Self {
        Self {
            model,
            reference,
            onesided_len,
        }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn reference_kinematics(&self) -> Kinematics {
        self.reference
    }

    pub fn onesided_len(&self) -> i32 {
        self.onesided_len
    }

    pub fn element(&self, atomic_number: i32) -> Result<Element, Error> {
        lookup(atomic_number)
    }

    /// Mean and spread for `atomic_number` at an explicit beam energy.
    pub fn stats_at(
        &self,
        atomic_number: i32,
        energy_per_nucleon: f64,
        rest_energy: f64,
    ) -> Result<ChargeStateStats, Error> {
        let element = lookup(atomic_number)?;
        let x = reduced_velocity(&Kinematics::new(energy_per_nucleon, rest_energy))?;
        self.model.stats(i32::from(element.atomic_number()), x)
    }

    /// Mean and spread for `atomic_number` at the reference beam.
    pub fn stats(&self, atomic_number: i32) -> Result<ChargeStateStats, Error> {
        self.stats_at(
            atomic_number,
            self.reference.energy_per_nucleon,
            self.reference.rest_energy,
        )
    }

    pub fn mean_charge_state(&self, atomic_number: i32) -> Result<f64, Error> {
        self.stats(atomic_number).map(|s| s.mean)
    }

    pub fn std_charge_state(&self, atomic_number: i32) -> Result<f64, Error> {
        self.stats(atomic_number).map(|s| s.std)
    }

    /// Distribution over `round(mean) ± dist_onesided_len` for one
    /// projectile at the given beam energy.
    pub fn charge_state_distribution(
        &self,
        atomic_number: i32,
        energy: f64,
        e0: f64,
        dist_onesided_len: i32,
    ) -> Result<Distribution, Error> {
        let stats = self.stats_at(atomic_number, energy, e0)?;
        distribution::build(stats.mean, stats.std, dist_onesided_len)
    }

    /// Distribution at the reference beam with the configured half-width.
    pub fn distribution(&self, atomic_number: i32) -> Result<Distribution, Error> {
        self.charge_state_distribution(
            atomic_number,
            self.reference.energy_per_nucleon,
            self.reference.rest_energy,
            self.onesided_len,
        )
    }

    pub fn summary_table(&self, energy: f64, e0: f64) -> Result<SummaryTable, Error> {
        summarize(&self.model, &Kinematics::new(energy, e0))
    }
}

fn default_calculator() -> ChargeState {
    ChargeState::default()
}

/// Mean charge state of `atomic_number` at the default beam
/// (4.2 MeV/u, 931.5 MeV) with the embedded coefficients.
pub fn mean_charge_state(atomic_number: i32) -> Result<f64, Error> {
    default_calculator().mean_charge_state(atomic_number)
}

/// Charge-state spread of `atomic_number` at the default beam.
pub fn std_charge_state(atomic_number: i32) -> Result<f64, Error> {
    default_calculator().std_charge_state(atomic_number)
}

pub fn charge_state_distribution(
    atomic_number: i32,
    energy: f64,
    e0: f64,
    dist_onesided_len: i32,
) -> Result<Distribution, Error> {
    default_calculator().charge_state_distribution(atomic_number, energy, e0, dist_onesided_len)
}

pub fn summary_table(energy: f64, e0: f64) -> Result<SummaryTable, Error> {
    default_calculator().summary_table(energy, e0)
}
