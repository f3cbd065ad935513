use anyhow::Result;

use charge_state::ModelConfig;

use crate::cli::{BeamOptions, ModelOptions};
use crate::io::read_text;

pub fn build_model_config(
    beam: &BeamOptions,
    model: &ModelOptions,
    onesided_len: i32,
) -> Result<ModelConfig> {
    let coefficients = model
        .coefficients
        .as_deref()
        .map(read_text)
        .transpose()?;

    if let Some(path) = &model.coefficients {
        log::info!("using model coefficients from {}", path.display());
    }

    Ok(ModelConfig {
        coefficients,
        energy_per_nucleon: beam.energy,
        rest_energy: beam.rest_energy,
        onesided_len,
    })
}
