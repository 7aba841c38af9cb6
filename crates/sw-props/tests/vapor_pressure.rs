//! Vapor pressure and boiling point checks against handbook values.
//!
//! Handbook normal boiling points and vapor pressures are reproduced to the
//! accuracy of a four-significant-figure Antoine fit.

use sw_core::units::{atm, degc, kpa, mmhg, to_degc, to_mmhg};
use sw_props::{Substance, boiling_point, parse_quantity, Quantity};

#[test]
fn benzene_toluene_at_90c() {
    // Geankoplis-style textbook values at 90 °C
    let p_b = to_mmhg(Substance::Benzene.psat(degc(90.0)));
    let p_t = to_mmhg(Substance::Toluene.psat(degc(90.0)));
    assert!((p_b - 1021.0).abs() < 5.0, "P_benzene = {p_b}");
    assert!((p_t - 406.7).abs() < 3.0, "P_toluene = {p_t}");
}

#[test]
fn water_boiling_point_falls_with_pressure() {
    let at_sea_level = Substance::Water.boiling_point(atm(1.0)).unwrap();
    let at_altitude = Substance::Water.boiling_point(kpa(70.0)).unwrap();
    assert!(at_altitude < at_sea_level);
    assert!((to_degc(at_altitude) - 90.0).abs() < 1.0);
}

#[test]
fn round_trip_for_every_substance() {
    for sub in Substance::ALL {
        let antoine = sub.antoine();
        let t0 = 0.5 * (antoine.t_min_c + antoine.t_max_c);
        let p = mmhg(antoine.psat_mmhg(t0));
        let t = boiling_point(antoine, p, None).unwrap();
        assert!((to_degc(t) - t0).abs() < 1e-6, "{sub}: {} vs {t0}", to_degc(t));
    }
}

#[test]
fn parsed_inputs_feed_the_evaluator() {
    let t = parse_quantity("176F", Quantity::Temperature).unwrap();
    let p = Substance::Benzene.psat(sw_core::units::k(t));
    assert!((to_mmhg(p) - 760.0).abs() < 5.0);
}
