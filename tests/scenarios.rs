//! Integration tests: reference beams and custom model setups.

use charge_state::{
    ChargeState, ChargeStateModel, ChargeStateStats, Error, Kinematics, ModelConfig,
    charge_state_distribution, lookup, mean_charge_state, summary_table,
};

#[test]
fn lead_at_linac3() {
    let dist = charge_state_distribution(82, 4.2, 931.5, 5).unwrap();
    let mean = mean_charge_state(82).unwrap();

    assert!(mean > 0.0 && mean < 82.0);
    assert!((mean - 54.69).abs() < 0.05, "mean {mean}");
    assert_eq!(dist.len(), 11);
    assert_eq!(dist.charge_states, (50..=60).collect::<Vec<_>>());
    assert_eq!(dist.most_probable(), Some(55));

    let total: f64 = dist.probabilities.iter().sum();
    assert!((total - 1.0).abs() < 1e-9);

    let percent: f64 = dist.percentages().iter().sum();
    assert!((percent - 100.0).abs() < 1e-6);
}

#[test]
fn lead_spread_is_a_few_charge_states() {
    let calc: ChargeState = ChargeState::default();
    let stats = calc.stats(82).unwrap();
    assert!(stats.std > 1.5 && stats.std < 3.0, "std {}", stats.std);
}

#[test]
fn summary_covers_every_element_in_order() {
    let table = summary_table(4.2, 931.5).unwrap();
    assert_eq!(table.len(), 100);
    assert!(table.windows(2).all(|w| w[0].atomic_number < w[1].atomic_number));
    assert_eq!(table[0].symbol, "H");
    assert_eq!(table[99].name, "Fermium");

    let calc: ChargeState = ChargeState::default();
    for row in &table {
        let z = i32::from(row.atomic_number);
        let stats = calc.stats(z).unwrap();
        assert_eq!(row.mean, stats.mean);
        assert_eq!(row.std, stats.std);
        assert_eq!(row.symbol, lookup(z).unwrap().symbol());
    }
}

#[test]
fn summary_rejects_bad_beams() {
    assert!(matches!(
        summary_table(-4.2, 931.5),
        Err(Error::InvalidKinematics { .. })
    ));
}

#[test]
fn configured_reference_beam_is_used() {
    let config = ModelConfig {
        energy_per_nucleon: 100.0,
        onesided_len: 2,
        ..Default::default()
    };
    let calc = ChargeState::new(&config).unwrap();

    let fast = calc.mean_charge_state(82).unwrap();
    assert!(fast > mean_charge_state(82).unwrap());

    let dist = calc.distribution(82).unwrap();
    assert_eq!(dist.len(), 5);
}

#[test]
fn coefficient_file_overrides_defaults() {
    let config = ModelConfig {
        coefficients: Some("[model]\nk2 = 0.5\n".to_string()),
        ..Default::default()
    };
    let calc = ChargeState::new(&config).unwrap();
    assert_eq!(calc.model().coefficients().k2, 0.5);

    // A larger exponent suppresses ionization of heavy ions
    assert!(calc.mean_charge_state(82).unwrap() < mean_charge_state(82).unwrap());
}

#[test]
fn malformed_coefficient_file_is_a_parse_error() {
    let config = ModelConfig {
        coefficients: Some("[model\nk1 = ".to_string()),
        ..Default::default()
    };
    assert!(matches!(
        ChargeState::new(&config),
        Err(Error::ParameterParse(_))
    ));
}

#[test]
fn replacement_model_goes_through_the_same_pipeline() {
    struct FullyStripped;

    impl ChargeStateModel for FullyStripped {
        fn stats(&self, atomic_number: i32, _x: f64) -> Result<ChargeStateStats, Error> {
            Ok(ChargeStateStats {
                mean: f64::from(atomic_number),
                std: 0.0,
            })
        }
    }

    let calc = ChargeState::from_parts(FullyStripped, Kinematics::new(4.2, 931.5), 1);
    let dist = calc.distribution(8).unwrap();
    assert_eq!(dist.charge_states, vec![7, 8, 9]);
    assert_eq!(dist.probabilities, vec![0.0, 1.0, 0.0]);

    let table = calc.summary_table(4.2, 931.5).unwrap();
    assert!(table.iter().all(|row| row.mean == f64::from(row.atomic_number)));

    assert!(matches!(calc.stats(0), Err(Error::NotFound { .. })));
}
