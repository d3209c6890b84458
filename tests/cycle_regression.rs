//! 사이클 성능 기준 결과 회귀 테스트.
use gas_turbine_performance::turbine::{sweep, SweepRange};
use gas_turbine_performance::{
    evaluate_cycle, evaluate_cycle_detailed, DesignParameters, Fahrenheit,
};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.9} got {actual:.9} (diff {diff:.3e}, tol {rel_tol})"
    );
}

fn assert_tuple(actual: (f64, f64, f64, f64), expected: (f64, f64, f64, f64)) {
    assert_close("nth", actual.0, expected.0, 1e-9);
    assert_close("HR", actual.1, expected.1, 1e-9);
    assert_close("Pt", actual.2, expected.2, 1e-9);
    assert_close("SFC", actual.3, expected.3, 1e-9);
}

#[test]
fn reference_run_at_90f() {
    let r = evaluate_cycle(Fahrenheit(90.0), &DesignParameters::default());
    assert_tuple(
        r.as_tuple(),
        (
            33.545_118_340_085_594,
            10_731.814_875_424_327,
            152.116_683_581_109_3,
            576_564.054_339_009_2,
        ),
    );
}

#[test]
fn envelope_edges_are_finite_and_pinned() {
    let d = DesignParameters::default();
    let cold = evaluate_cycle(Fahrenheit(60.0), &d);
    let hot = evaluate_cycle(Fahrenheit(100.0), &d);
    assert!(cold.is_finite() && hot.is_finite());
    assert_tuple(
        cold.as_tuple(),
        (
            33.704_977_941_133_58,
            10_680.914_867_493_675,
            153.149_479_933_999_94,
            572_675.871_024_343_2,
        ),
    );
    assert_tuple(
        hot.as_tuple(),
        (
            33.535_584_574_249_8,
            10_734.865_802_113_523,
            152.055_089_291_370_28,
            576_797.608_201_504_5,
        ),
    );
}

#[test]
fn net_power_falls_across_default_sweep() {
    let series = sweep(&DesignParameters::default(), &SweepRange::default());
    assert_eq!(series.len(), 41);
    assert!(series.is_power_non_increasing());
    let powers = series.net_powers();
    assert!(powers[0] > powers[40]);
}

#[test]
fn evaporative_cooler_uses_fixed_wet_bulb() {
    let st = evaluate_cycle_detailed(Fahrenheit(98.0), &DesignParameters::default());
    assert_close("T1", st.compressor_inlet.value(), 97.92, 1e-12);
    assert_close("nc", st.compressor.efficiency, 0.946, 1e-9);
}

#[test]
fn zero_fuel_flow_gives_unbounded_sfc() {
    let d = DesignParameters {
        fuel_flow: 0.0,
        ..DesignParameters::default()
    };
    let r = evaluate_cycle(Fahrenheit(90.0), &d);
    assert!(!r.sfc.is_finite(), "sfc={}", r.sfc);
    assert!(!r.thermal_efficiency_pct.is_finite());
}

#[test]
fn negative_discharge_pressure_gives_nan() {
    let d = DesignParameters {
        discharge_pressure_psi: -10.0,
        ..DesignParameters::default()
    };
    let r = evaluate_cycle(Fahrenheit(90.0), &d);
    assert!(r.thermal_efficiency_pct.is_nan());
    assert!(r.net_power_mw.is_nan());
}

#[test]
fn sub_atmospheric_discharge_yields_negative_net_power() {
    let d = DesignParameters {
        discharge_pressure_psi: 10.0,
        ..DesignParameters::default()
    };
    let r = evaluate_cycle(Fahrenheit(90.0), &d);
    assert!(r.net_power_mw < 0.0, "Pt={}", r.net_power_mw);
}
