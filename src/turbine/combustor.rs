use crate::units::{Fahrenheit, Rankine};

use super::design::{
    isentropic_exponent, CP_FUEL_GAS, CP_WATER, GAMMA_AIR, M3_PER_S_PER_GPM,
    REFERENCE_PRESSURE_PSI, TURBINE_INLET_PRESSURE_FRACTION, WATER_DENSITY_KG_M3,
    WATER_INJECTION_GPM, WATER_LATENT_HEAT_BTU_LB,
};

/// 연소 및 물 분사 단계 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CombustorState {
    /// 연료 질량유량 [lb/s]
    pub fuel_mass_flow: f64,
    /// 분사수 질량유량 (m³/s × kg/m³ 규약)
    pub water_mass_flow: f64,
    /// 터빈 입구 압력 [psi]
    pub turbine_inlet_pressure_psi: f64,
    /// 분사 전 터빈 입구 온도 T3 [°F]
    pub firing_temp: Fahrenheit,
    /// 공기+연료+물 혼합 비열
    pub cp_mix: f64,
    /// 공기+연료 연소가스 비열
    pub cp_comb: f64,
    /// 물 분사 후 온도 T3_c [°F]
    pub quenched_temp: Fahrenheit,
}

/// 연료가스 밀도와 체적유량 [ft³/h] 으로 질량유량 [lb/s] 을 구한다.
pub fn fuel_mass_flow(rho_gas: f64, fuel_flow: f64) -> f64 {
    rho_gas * fuel_flow / (60.0 * 60.0)
}

/// 설계 GPM 과 물 밀도로 분사수 질량유량을 구한다.
pub fn water_mass_flow() -> f64 {
    WATER_INJECTION_GPM * M3_PER_S_PER_GPM * WATER_DENSITY_KG_M3
}

/// 질량유량 가중 평균 비열.
pub fn blended_cp(streams: &[(f64, f64)]) -> f64 {
    let (heat, mass) = streams
        .iter()
        .fold((0.0, 0.0), |(h, m), (cp, flow)| (h + cp * flow, m + flow));
    heat / mass
}

/// 연소기 평균 온도에서 터빈 입구 온도를 구하고 물 분사에 의한 온도 강하를 반영한다.
pub fn combust(
    comb_mean_temp: Fahrenheit,
    discharge_pressure_psi: f64,
    air_mass_flow: f64,
    cp_air: f64,
    rho_gas: f64,
    fuel_flow: f64,
) -> CombustorState {
    let m_gas = fuel_mass_flow(rho_gas, fuel_flow);
    let pit = TURBINE_INLET_PRESSURE_FRACTION * discharge_pressure_psi;
    let expansion = (pit / REFERENCE_PRESSURE_PSI).powf(isentropic_exponent(GAMMA_AIR));
    let t3 = Rankine(comb_mean_temp.to_rankine().value() * expansion).to_fahrenheit();

    let m_water = water_mass_flow();
    let cp_mix = blended_cp(&[
        (cp_air, air_mass_flow),
        (CP_FUEL_GAS, m_gas),
        (CP_WATER, m_water),
    ]);
    let cp_comb = blended_cp(&[(cp_air, air_mass_flow), (CP_FUEL_GAS, m_gas)]);

    let quench = m_water * WATER_LATENT_HEAT_BTU_LB / ((air_mass_flow + m_gas) * cp_comb);
    let t3_c = Fahrenheit(t3.value() - quench);

    CombustorState {
        fuel_mass_flow: m_gas,
        water_mass_flow: m_water,
        turbine_inlet_pressure_psi: pit,
        firing_temp: t3,
        cp_mix,
        cp_comb,
        quenched_temp: t3_c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_of_single_stream_is_identity() {
        assert!((blended_cp(&[(0.24, 47.8)]) - 0.24).abs() < 1e-12);
    }

    #[test]
    fn water_injection_lowers_firing_temperature() {
        let st = combust(Fahrenheit(1100.0), 218.0, 796.73, 0.245, 0.056, 1_800_000.0);
        assert!(st.quenched_temp < st.firing_temp);
        assert!((st.fuel_mass_flow - 28.0).abs() < 1e-9);
        assert!((st.water_mass_flow - 31.450365).abs() < 1e-6);
    }
}
