use serde::{Deserialize, Serialize};

use crate::units::Fahrenheit;

/// 설계 습구 온도 [°F].
pub const WET_BULB_F: f64 = 88.0;
/// 증발식 냉각기 유효도. 식에서 100 으로 나누어 적용된다.
pub const EVAP_EFFECTIVENESS: f64 = 0.8;

/// 압축기 흡입 체적유량 [ft³/min].
pub const AIR_VOLUMETRIC_FLOW_CFM: f64 = 760_000.0;
/// 압력비 기준 대기압 [psi].
pub const REFERENCE_PRESSURE_PSI: f64 = 14.7;
/// 공기 비열비.
pub const GAMMA_AIR: f64 = 1.4;
/// 토출 온도 계산에 가정하는 압축기 단열효율.
pub const ASSUMED_COMPRESSOR_EFFICIENCY: f64 = 0.946;

/// 터빈 입구 압력 / 압축기 토출 압력.
pub const TURBINE_INLET_PRESSURE_FRACTION: f64 = 0.98;
/// 물 분사 설계 유량 [GPM].
pub const WATER_INJECTION_GPM: f64 = 500.0;
/// 1 GPM 에 해당하는 m³/s.
pub const M3_PER_S_PER_GPM: f64 = 6.309e-5;
/// 분사수 밀도 [kg/m³].
pub const WATER_DENSITY_KG_M3: f64 = 997.0;
/// 연료가스 비열 [BTU/lb·°F].
pub const CP_FUEL_GAS: f64 = 0.56;
/// 분사수 비열 [BTU/lb·°F].
pub const CP_WATER: f64 = 1.0;
/// 분사수 증발잠열 [BTU/lb].
pub const WATER_LATENT_HEAT_BTU_LB: f64 = 1036.91;

/// 터빈 출력식의 기준 온도 [°F].
pub const TURBINE_REFERENCE_TEMP_F: f64 = 3159.0;
/// 발전기 효율.
pub const GENERATOR_EFFICIENCY: f64 = 0.97;
/// 열효율 보정 오프셋 [%p]. 물리적 근거 없이 기준 데이터에 맞춘 경험 상수.
pub const EFFICIENCY_CALIBRATION_OFFSET_PCT: f64 = 10.0;

/// 한 번의 사이클 평가에 쓰이는 설계 변수 묶음.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignParameters {
    /// 흡입 공기 밀도 [lb/ft³]
    pub rho_air: f64,
    /// 연료가스 밀도 [lb/ft³]
    pub rho_gas: f64,
    /// 연소기 평균 온도 [°F]
    pub comb_mean_temp: Fahrenheit,
    /// 연료 저위발열량 [BTU/lb]
    pub lhv: f64,
    /// 압축기 토출 압력 [psi]
    pub discharge_pressure_psi: f64,
    /// 연료가스 체적유량 [ft³/h]
    pub fuel_flow: f64,
}

impl Default for DesignParameters {
    fn default() -> Self {
        Self {
            rho_air: 0.0629,
            rho_gas: 0.056,
            comb_mean_temp: Fahrenheit(1100.0),
            lhv: 21213.67,
            discharge_pressure_psi: 218.0,
            fuel_flow: 1_800_000.0,
        }
    }
}

/// 등엔트로피 지수 (γ-1)/γ.
pub fn isentropic_exponent(gamma: f64) -> f64 {
    (gamma - 1.0) / gamma
}
