/// Beam kinematics for a single query: kinetic energy per nucleon (MeV/u)
/// and rest energy per nucleon (MeV).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kinematics {
    pub energy_per_nucleon: f64,
    pub rest_energy: f64,
}

impl Kinematics {
    pub fn new(energy_per_nucleon: f64, rest_energy: f64) -> Self {
        Self {
            energy_per_nucleon,
            rest_energy,
        }
    }
}
