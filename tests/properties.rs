//! 물성 다항식 기준점 회귀 테스트.
use approx::assert_relative_eq;
use gas_turbine_performance::{density, specific_heat, Fahrenheit};
use proptest::prelude::*;

#[test]
fn density_at_freezing_point() {
    // Ta = 273.15 K
    assert_relative_eq!(
        density(Fahrenheit(32.0), Fahrenheit(32.0)),
        0.082_279_104_044_124_92,
        max_relative = 1e-12
    );
}

#[test]
fn specific_heat_at_freezing_point() {
    let ta: f64 = 273.15;
    let fit = 1.1788 - 2.8765e-3 * ta + 1.8105e-5 * ta.powi(2) - 5.1e-8 * ta.powi(3)
        + 5.4e-11 * ta.powi(4);
    let cp = specific_heat(Fahrenheit(32.0), Fahrenheit(32.0));
    assert_relative_eq!(cp, fit / 4.1868, max_relative = 1e-12);
    assert_relative_eq!(cp, 0.240_074_227_614_915_76, max_relative = 1e-12);
}

#[test]
fn compressor_span_reference_points() {
    assert_relative_eq!(
        specific_heat(Fahrenheit(80.0), Fahrenheit(700.0)),
        0.279_931_402_201_585_4,
        max_relative = 1e-12
    );
}

#[test]
fn extrapolation_is_unchecked() {
    // 보정 범위 밖(Ta ≈ 631 K)에서는 음의 밀도가 그대로 나온다.
    let rho = density(Fahrenheit(60.0), Fahrenheit(1200.0));
    assert!(rho.is_finite());
    assert_relative_eq!(rho, -0.880_047_017_101_367_6, max_relative = 1e-10);
}

proptest! {
    #[test]
    fn density_is_symmetric(t1 in -100.0f64..2000.0, t2 in -100.0f64..2000.0) {
        let a = density(Fahrenheit(t1), Fahrenheit(t2));
        let b = density(Fahrenheit(t2), Fahrenheit(t1));
        prop_assert!((a - b).abs() <= 1e-12 * a.abs().max(1.0));
    }

    #[test]
    fn specific_heat_is_symmetric(t1 in -100.0f64..2000.0, t2 in -100.0f64..2000.0) {
        let a = specific_heat(Fahrenheit(t1), Fahrenheit(t2));
        let b = specific_heat(Fahrenheit(t2), Fahrenheit(t1));
        prop_assert!((a - b).abs() <= 1e-12 * a.abs().max(1.0));
    }
}
