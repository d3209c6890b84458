use crate::fluid::specific_heat;
use crate::units::energy::BTU_PER_HOUR_PER_MW;
use crate::units::{Fahrenheit, Rankine, COMPRESSOR_WORK_RANKINE_OFFSET};

use super::design::{
    isentropic_exponent, AIR_VOLUMETRIC_FLOW_CFM, ASSUMED_COMPRESSOR_EFFICIENCY, GAMMA_AIR,
    REFERENCE_PRESSURE_PSI,
};

/// 압축 단계 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompressorState {
    /// 흡입 공기 질량유량 [lb/s]
    pub air_mass_flow: f64,
    /// 압력비 p2/p_ref
    pub pressure_ratio: f64,
    /// 토출 온도 T2 [°F]
    pub discharge_temp: Fahrenheit,
    /// 실제 압축 효율 nc
    pub efficiency: f64,
    /// cp(T1, T2) [BTU/lb·°F]
    pub cp_air: f64,
    /// 압축기 소요동력 Wc [MW]
    pub work_mw: f64,
}

/// 공기 밀도와 설계 체적유량으로 질량유량 [lb/s] 을 구한다.
pub fn air_mass_flow(rho_air: f64) -> f64 {
    rho_air * AIR_VOLUMETRIC_FLOW_CFM / 60.0
}

/// 압축 과정을 계산한다.
///
/// 토출 온도는 가정 효율로 구하고, 실제 효율과 소요동력은 그 온도 상승과 cp(T1, T2) 로 다시 구한다.
/// 압력비가 1 이하이면 온도 상승이 음수가 되어 동력도 물리적 의미를 잃는다.
pub fn compress(inlet: Fahrenheit, rho_air: f64, discharge_pressure_psi: f64) -> CompressorState {
    let m_air = air_mass_flow(rho_air);
    let rp = discharge_pressure_psi / REFERENCE_PRESSURE_PSI;
    let ideal_rise = rp.powf(isentropic_exponent(GAMMA_AIR)) - 1.0;

    let t1 = inlet.value();
    let t1_r = inlet.to_rankine().value();
    let rpa = ideal_rise / ASSUMED_COMPRESSOR_EFFICIENCY;
    let discharge = Rankine(t1_r * (1.0 + rpa)).to_fahrenheit();

    let nc = (ideal_rise * t1_r) / (discharge.value() - t1);
    let cp_air = specific_heat(inlet, discharge);
    let t1_work_r = inlet
        .to_rankine_with_offset(COMPRESSOR_WORK_RANKINE_OFFSET)
        .value();
    let work_mw =
        m_air * 3600.0 * cp_air * t1_work_r * ideal_rise / (nc * BTU_PER_HOUR_PER_MW);

    CompressorState {
        air_mass_flow: m_air,
        pressure_ratio: rp,
        discharge_temp: discharge,
        efficiency: nc,
        cp_air,
        work_mw,
    }
}
