use crate::units::{btu_per_hour_to_mw, Fahrenheit};

use super::design::{
    isentropic_exponent, GAMMA_AIR, REFERENCE_PRESSURE_PSI, TURBINE_REFERENCE_TEMP_F,
};

/// 팽창 단계 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpanderState {
    /// 터빈 효율 nt
    pub efficiency: f64,
    /// 터빈 총출력 Pturb [MW]
    pub gross_power_mw: f64,
}

/// 연소기 평균 온도와 분사 후 온도의 절대온도비로 터빈 효율을 구한다.
pub fn turbine_efficiency(
    comb_mean_temp: Fahrenheit,
    quenched_temp: Fahrenheit,
    turbine_inlet_pressure_psi: f64,
) -> f64 {
    (1.0 - comb_mean_temp.to_rankine().value() / quenched_temp.to_rankine().value())
        / (1.0 - (REFERENCE_PRESSURE_PSI / turbine_inlet_pressure_psi))
}

/// 팽창 과정을 계산한다. total_mass_flow 는 공기+연료+물 합계.
pub fn expand(
    comb_mean_temp: Fahrenheit,
    quenched_temp: Fahrenheit,
    turbine_inlet_pressure_psi: f64,
    total_mass_flow: f64,
    cp_mix: f64,
) -> ExpanderState {
    let nt = turbine_efficiency(comb_mean_temp, quenched_temp, turbine_inlet_pressure_psi);
    let reference_r = Fahrenheit(TURBINE_REFERENCE_TEMP_F).to_rankine().value();
    let pressure_term = 1.0
        - (REFERENCE_PRESSURE_PSI / turbine_inlet_pressure_psi)
            .powf(isentropic_exponent(GAMMA_AIR));
    let gross =
        btu_per_hour_to_mw(total_mass_flow * 3600.0 * cp_mix * nt * reference_r * pressure_term);
    ExpanderState {
        efficiency: nt,
        gross_power_mw: gross,
    }
}
