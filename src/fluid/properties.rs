//! 평균 절대온도의 다항식 근사로 작동유체 밀도/비열을 구한다.
//!
//! 두 경계 온도(°F)를 켈빈으로 바꾼 뒤 산술 평균 `Ta` 에서 다항식을 평가한다.
//! 보정 범위를 벗어난 `Ta` 에 대해서도 범위 검사 없이 외삽 값을 돌려준다.
//! 수치상으로는 그럴듯하지만 물리적으로 검증되지 않은 값이므로 호출 측에서 범위를 관리해야 한다.

use crate::units::{Fahrenheit, Kelvin};

/// 밀도 다항식 계수 a0..a3 (결과 kg/m³, Ta 는 K).
const DENSITY_COEFFS: [f64; 4] = [8.78552, -7.54226e-2, 2.69671e-4, -3.42800e-7];

/// 비열 다항식 계수 a0..a4 (결과 kJ/kg·K, Ta 는 K).
const SPECIFIC_HEAT_COEFFS: [f64; 5] = [1.1788, -2.8765e-3, 1.8105e-5, -5.1000e-8, 5.4000e-11];

/// kg/m³ → lb/ft³
pub const KG_M3_TO_LB_FT3: f64 = 0.062428;

/// kJ/kg·K → BTU/lb·°F
pub const KJ_PER_KCAL: f64 = 4.1868;

/// 두 온도의 켈빈 평균.
pub fn mean_kelvin(t1: Fahrenheit, t2: Fahrenheit) -> Kelvin {
    Kelvin::mean(t1.to_kelvin(), t2.to_kelvin())
}

/// 낮은 차수부터 나열된 계수로 다항식을 평가한다 (Horner).
fn polynomial(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, c| acc * x + c)
}

/// 평균 온도에서의 밀도 [lb/ft³].
pub fn density(t1: Fahrenheit, t2: Fahrenheit) -> f64 {
    let ta = mean_kelvin(t1, t2).value();
    polynomial(&DENSITY_COEFFS, ta) * KG_M3_TO_LB_FT3
}

/// 평균 온도에서의 정압비열 [BTU/lb·°F].
pub fn specific_heat(t1: Fahrenheit, t2: Fahrenheit) -> f64 {
    let ta = mean_kelvin(t1, t2).value();
    polynomial(&SPECIFIC_HEAT_COEFFS, ta) / KJ_PER_KCAL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horner_matches_expanded_form() {
        let x = 300.0;
        let expanded = 8.78552 - 7.54226e-2 * x + 2.69671e-4 * x * x - 3.428e-7 * x * x * x;
        assert!((polynomial(&DENSITY_COEFFS, x) - expanded).abs() < 1e-12);
    }

    #[test]
    fn only_mean_temperature_matters() {
        let a = density(Fahrenheit(50.0), Fahrenheit(150.0));
        let b = density(Fahrenheit(100.0), Fahrenheit(100.0));
        assert!((a - b).abs() < 1e-12);
    }

    #[test]
    fn specific_heat_near_air_at_ambient() {
        let cp = specific_heat(Fahrenheit(80.0), Fahrenheit(80.0));
        assert!(cp > 0.23 && cp < 0.25, "cp={cp}");
    }
}
