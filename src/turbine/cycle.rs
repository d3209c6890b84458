//! 증발식 입구 냉각기가 달린 단순 사이클 가스터빈의 정상상태 성능 계산.
//!
//! 냉각 → 압축 → 연소/물 분사 → 팽창 → 효율/열소비율/SFC 순서의 단일 파이프라인이다.
//! 입력 검증은 하지 않는다. 압력비가 비정상이거나 연료유량이 0 이면 결과가 NaN/∞ 로 나온다.

use tracing::debug;

use crate::units::{btu_per_hour_to_mw_via_watts, Fahrenheit};

use super::combustor::{combust, CombustorState};
use super::compressor::{compress, CompressorState};
use super::design::{
    DesignParameters, EFFICIENCY_CALIBRATION_OFFSET_PCT, EVAP_EFFECTIVENESS, GENERATOR_EFFICIENCY,
    WET_BULB_F,
};
use super::evap_cooler::cooled_inlet_temperature;
use super::expander::{expand, ExpanderState};

/// 사이클 성능 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleResult {
    /// 열효율 [%]
    pub thermal_efficiency_pct: f64,
    /// 열소비율 [BTU/kW]
    pub heat_rate: f64,
    /// 순출력 [MW]
    pub net_power_mw: f64,
    /// 연료소비율
    pub sfc: f64,
}

impl CycleResult {
    /// (nth, HR, Pt, SFC) 순서의 튜플.
    pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
        (
            self.thermal_efficiency_pct,
            self.heat_rate,
            self.net_power_mw,
            self.sfc,
        )
    }

    pub fn is_finite(&self) -> bool {
        self.thermal_efficiency_pct.is_finite()
            && self.heat_rate.is_finite()
            && self.net_power_mw.is_finite()
            && self.sfc.is_finite()
    }
}

/// 단계별 중간값을 모두 담은 평가 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleStates {
    pub dry_bulb: Fahrenheit,
    /// 압축기 입구 온도 T1
    pub compressor_inlet: Fahrenheit,
    pub compressor: CompressorState,
    pub combustor: CombustorState,
    pub expander: ExpanderState,
    /// 공기+연료+물 질량유량
    pub total_mass_flow: f64,
    /// 연료 열량 투입률 [MW]
    pub fuel_energy_rate_mw: f64,
    pub result: CycleResult,
}

/// 건구 온도와 설계 변수로 사이클 성능을 계산한다.
pub fn evaluate_cycle(dry_bulb: Fahrenheit, design: &DesignParameters) -> CycleResult {
    evaluate_cycle_detailed(dry_bulb, design).result
}

/// [`evaluate_cycle`] 과 같지만 단계별 중간값도 함께 돌려준다.
pub fn evaluate_cycle_detailed(dry_bulb: Fahrenheit, design: &DesignParameters) -> CycleStates {
    let t1 = cooled_inlet_temperature(dry_bulb, Fahrenheit(WET_BULB_F), EVAP_EFFECTIVENESS);

    let comp = compress(t1, design.rho_air, design.discharge_pressure_psi);
    let m_air = comp.air_mass_flow;

    let comb = combust(
        design.comb_mean_temp,
        design.discharge_pressure_psi,
        m_air,
        comp.cp_air,
        design.rho_gas,
        design.fuel_flow,
    );
    let m_gas = comb.fuel_mass_flow;
    let total = m_air + m_gas + comb.water_mass_flow;

    let exp = expand(
        design.comb_mean_temp,
        comb.quenched_temp,
        comb.turbine_inlet_pressure_psi,
        total,
        comb.cp_mix,
    );

    let pt = exp.gross_power_mw - comp.work_mw;
    let fuel_rate = btu_per_hour_to_mw_via_watts(m_gas * 3600.0 * design.lhv);
    let nth = pt * GENERATOR_EFFICIENCY * 100.0 / fuel_rate + EFFICIENCY_CALIBRATION_OFFSET_PCT;
    let heat_rate = 3600.0 * 100.0 / nth;
    let sfc = 3600.0 * (m_air / m_gas) / (pt / total);

    debug!(
        dry_bulb_f = dry_bulb.value(),
        t1_f = t1.value(),
        t2_f = comp.discharge_temp.value(),
        t3_f = comb.firing_temp.value(),
        t3c_f = comb.quenched_temp.value(),
        nc = comp.efficiency,
        nt = exp.efficiency,
        wc_mw = comp.work_mw,
        pturb_mw = exp.gross_power_mw,
        "cycle evaluated"
    );

    CycleStates {
        dry_bulb,
        compressor_inlet: t1,
        compressor: comp,
        combustor: comb,
        expander: exp,
        total_mass_flow: total,
        fuel_energy_rate_mw: fuel_rate,
        result: CycleResult {
            thermal_efficiency_pct: nth,
            heat_rate,
            net_power_mw: pt,
            sfc,
        },
    }
}
