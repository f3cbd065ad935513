//! Core data structures of the charge-state calculator.
//!
//! - [`types`] – Reference table of projectile elements (H through Fm).
//! - [`beam`] – Beam kinematics of a single query.
//! - [`charge`] – Computed statistics, distributions and summary rows.
//!
//! Everything except the element table is computed per query and never
//! shared between queries.

pub mod beam;
pub mod charge;
pub mod types;
