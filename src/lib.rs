//! Equilibrium charge-state distributions of heavy ion beams after passing
//! through a stripper (carbon foil or residual gas).
//!
//! The calculation follows the semi-empirical model of Baron et al.,
//! *Charge exchange of very heavy ions in carbon foils and in the residual
//! gas of GANIL cyclotrons*, Nucl. Instr. Meth. A 328 (1993) 177.
//!
//! # Features
//!
//! - **Kinematics** — Kinetic energy per nucleon and rest energy to a
//!   reduced velocity in Bohr units
//! - **Charge-state model** — Mean equilibrium charge and its spread from
//!   the atomic number and the reduced velocity
//! - **Distributions** — Normalized probabilities over a window of integer
//!   charge states around the mean
//! - **Summary tables** — Mean and spread for every supported element at
//!   one beam energy, evaluated in parallel
//!
//! # Quick Start
//!
//! ```
//! use charge_state::{charge_state_distribution, mean_charge_state, summary_table};
//! use charge_state::Error;
//!
//! // Lead at the CERN LINAC3 energy (4.2 MeV/u, 931.5 MeV rest energy)
//! let mean = mean_charge_state(82)?;
//! assert!(mean > 54.0 && mean < 55.5);
//!
//! // Eleven charge states centered on round(mean)
//! let dist = charge_state_distribution(82, 4.2, 931.5, 5)?;
//! assert_eq!(dist.charge_states, (50..=60).collect::<Vec<_>>());
//! let total: f64 = dist.probabilities.iter().sum();
//! assert!((total - 1.0).abs() < 1e-9);
//! assert_eq!(dist.most_probable(), Some(55));
//!
//! // One row per element, ascending atomic number
//! let table = summary_table(4.2, 931.5)?;
//! assert_eq!(table.len(), 100);
//! assert_eq!(table[81].symbol, "Pb");
//!
//! // Invalid input surfaces as a typed error
//! assert!(matches!(mean_charge_state(0), Err(Error::NotFound { .. })));
//! assert!(matches!(
//!     charge_state_distribution(50, -1.0, 931.5, 5),
//!     Err(Error::InvalidKinematics { .. })
//! ));
//! # Ok::<(), Error>(())
//! ```
//!
//! # Module Organization
//!
//! - [`ChargeState`] — Calculator holding a model and a reference beam
//! - [`ModelConfig`] — Coefficient file and reference beam selection
//! - [`ChargeStateModel`] — Trait for replaceable charge-state models
//! - [`BaronModel`] — Default model with the published constants
//!
//! # Data Types
//!
//! - [`Element`] — Projectile element (H through Fm)
//! - [`Kinematics`] — Beam energy per nucleon and rest energy
//! - [`ChargeStateStats`] — Mean charge state and spread
//! - [`Distribution`] — Charge states with aligned probabilities
//! - [`SummaryRow`] — Per-element mean and spread

mod engine;
mod model;

pub use model::beam::Kinematics;
pub use model::charge::{ChargeStateStats, Distribution, SummaryRow, SummaryTable};
pub use model::types::{Element, MAX_ATOMIC_NUMBER, MIN_ATOMIC_NUMBER, ParseElementError};

pub use engine::{
    BARON_K1, BARON_K1_BETA, BARON_K2, BARON_WIDTH_SCALE, BOHR_VELOCITY, BaronModel, ChargeState,
    ChargeStateModel, Coefficients, DEFAULT_ENERGY_PER_NUCLEON, DEFAULT_ONESIDED_LEN,
    DEFAULT_REST_ENERGY, FINE_STRUCTURE, MAX_ONESIDED_LEN, ModelConfig, SPEED_OF_LIGHT, beta,
    build_distribution, charge_state_distribution, get_default_coefficients, load_coefficients,
    lookup, lorentz_factor, mean_charge_state, reduced_velocity, std_charge_state, summarize,
    summary_table,
};

pub use engine::Error;
