//! Equilibrium curves for several ideal pairs.

use sw_core::units::{atm, degc, kpa, to_degc};
use sw_props::Substance;
use sw_vle::{ConstantVolatility, EquilibriumModel, RaoultBinary, VleError};

const PAIRS: [(Substance, Substance); 4] = [
    (Substance::Benzene, Substance::Toluene),
    (Substance::NHexane, Substance::NHeptane),
    (Substance::Toluene, Substance::OXylene),
    (Substance::Methanol, Substance::Water),
];

#[test]
fn curves_lie_above_diagonal_and_are_monotone() {
    for (light, heavy) in PAIRS {
        let model = RaoultBinary::new(light, heavy, atm(1.0)).unwrap();
        let curve = model.sample_curve(41).unwrap();
        for w in curve.windows(2) {
            assert!(w[1].x >= w[0].x, "{}", model.describe());
            assert!(w[1].y >= w[0].y, "{}", model.describe());
        }
        for p in &curve {
            assert!(p.y >= p.x - 1e-12, "{}: {:?}", model.describe(), p);
            assert!(p.temperature.is_some());
        }
    }
}

#[test]
fn bubble_temperature_matches_parametric_point() {
    let model = RaoultBinary::new(Substance::NHexane, Substance::NHeptane, atm(1.0)).unwrap();
    let point = model.point_at_temperature(degc(85.0)).unwrap();
    let tb = model.bubble_temperature(point.x).unwrap();
    assert!((to_degc(tb) - 85.0).abs() < 1e-8);
    let td = model.dew_temperature(point.y).unwrap();
    assert!((to_degc(td) - 85.0).abs() < 1e-8);
}

#[test]
fn lower_pressure_widens_separation() {
    let high = RaoultBinary::new(Substance::Benzene, Substance::Toluene, atm(1.0)).unwrap();
    let low = RaoultBinary::new(Substance::Benzene, Substance::Toluene, kpa(30.0)).unwrap();
    assert!(low.mean_relative_volatility() > high.mean_relative_volatility());
    assert!(low.y_from_x(0.3).unwrap() > high.y_from_x(0.3).unwrap());
}

#[test]
fn constant_alpha_approximates_ideal_curve() {
    let raoult = RaoultBinary::new(Substance::Benzene, Substance::Toluene, atm(1.0)).unwrap();
    let approx = ConstantVolatility::new(raoult.mean_relative_volatility()).unwrap();
    for x in [0.1, 0.3, 0.5, 0.7, 0.9] {
        let y_exact = raoult.y_from_x(x).unwrap();
        let y_approx = approx.y_from_x(x).unwrap();
        assert!((y_exact - y_approx).abs() < 0.02, "x = {x}: {y_exact} vs {y_approx}");
    }
}

#[test]
fn models_are_usable_as_trait_objects() {
    let models: Vec<Box<dyn EquilibriumModel>> = vec![
        Box::new(ConstantVolatility::new(2.5).unwrap()),
        Box::new(RaoultBinary::new(Substance::Benzene, Substance::Toluene, atm(1.0)).unwrap()),
    ];
    for m in &models {
        let y = m.y_from_x(0.5).unwrap();
        assert!(y > 0.5 && y < 1.0, "{}", m.describe());
    }
}

#[test]
fn compositions_outside_unit_interval_rejected() {
    let model = RaoultBinary::new(Substance::Benzene, Substance::Toluene, atm(1.0)).unwrap();
    assert!(matches!(
        model.y_from_x(1.5),
        Err(VleError::InvalidCompositionRange { .. })
    ));
    assert!(matches!(
        model.bubble_temperature(f64::NAN),
        Err(VleError::InvalidCompositionRange { .. })
    ));
}
