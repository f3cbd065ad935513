use rayon::prelude::*;

use super::baron::ChargeStateModel;
use super::error::Error;
use super::kinematics::reduced_velocity;
use crate::model::beam::Kinematics;
use crate::model::charge::{SummaryRow, SummaryTable};
use crate::model::types::Element;

/// Evaluates `model` for every supported element at one beam kinematics.
///
/// Rows come back ordered by atomic number.
pub fn summarize<M>(model: &M, kinematics: &Kinematics) -> Result<SummaryTable, Error>
where
    M: ChargeStateModel + ?Sized,
{
    let x = reduced_velocity(kinematics)?;

    let mut rows = Element::all()
        .par_iter()
        .map(|&element| -> Result<SummaryRow, Error> {
            let stats = model.stats(i32::from(element.atomic_number()), x)?;
            log::trace!("{element}: mean={:.3} std={:.3}", stats.mean, stats.std);
            Ok(SummaryRow::new(element, stats))
        })
        .collect::<Result<SummaryTable, Error>>()?;

    rows.sort_by_key(|row| row.atomic_number);

    log::debug!(
        "summarized {} elements at T={} MeV/u, E0={} MeV",
        rows.len(),
        kinematics.energy_per_nucleon,
        kinematics.rest_energy
    );

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::baron::BaronModel;
    use crate::model::charge::ChargeStateStats;

    struct FailsAbove(i32);

    impl ChargeStateModel for FailsAbove {
        fn stats(&self, atomic_number: i32, _x: f64) -> Result<ChargeStateStats, Error> {
            if atomic_number > self.0 {
                Err(Error::InvalidChargeState(format!("Z={atomic_number}")))
            } else {
                Ok(ChargeStateStats {
                    mean: 0.0,
                    std: 0.0,
                })
            }
        }
    }

    #[test]
    fn one_row_per_element_in_order() {
        let rows = summarize(&BaronModel::default(), &Kinematics::new(4.2, 931.5)).unwrap();
        assert_eq!(rows.len(), Element::all().len());
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.atomic_number as usize, i + 1);
            assert!(row.mean > 0.0 && row.mean < f64::from(row.atomic_number));
        }
        assert_eq!(rows[81].symbol, "Pb");
    }

    #[test]
    fn matches_direct_model_evaluation() {
        let model = BaronModel::default();
        let kin = Kinematics::new(10.0, 931.5);
        let rows = summarize(&model, &kin).unwrap();
        let x = reduced_velocity(&kin).unwrap();
        let direct = model.stats(92, x).unwrap();
        assert_eq!(rows[91].mean.to_bits(), direct.mean.to_bits());
        assert_eq!(rows[91].std.to_bits(), direct.std.to_bits());
    }

    #[test]
    fn propagates_model_errors() {
        let result = summarize(&FailsAbove(50), &Kinematics::new(4.2, 931.5));
        assert!(matches!(result, Err(Error::InvalidChargeState(_))));
    }

    #[test]
    fn propagates_kinematics_errors() {
        let result = summarize(&BaronModel::default(), &Kinematics::new(-1.0, 931.5));
        assert!(matches!(result, Err(Error::InvalidKinematics { .. })));
    }
}
