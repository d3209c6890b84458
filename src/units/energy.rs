//! 사이클 식에서 쓰는 열량률 환산 계수.

/// 1 MW 에 해당하는 BTU/h. 기준 성능 데이터에 맞춘 값(3 412 230)을 그대로 쓴다.
pub const BTU_PER_HOUR_PER_MW: f64 = 3_412_230.0;

/// 1 BTU/h 에 해당하는 W.
pub const WATT_PER_BTU_PER_HOUR: f64 = 0.29307;

/// BTU/h 를 MW 로 환산한다.
pub fn btu_per_hour_to_mw(q_btu_per_h: f64) -> f64 {
    q_btu_per_h / BTU_PER_HOUR_PER_MW
}

/// BTU/h 를 W 계수(0.29307)로 MW 환산한다. 연료 열량 투입률 계산용.
pub fn btu_per_hour_to_mw_via_watts(q_btu_per_h: f64) -> f64 {
    q_btu_per_h * WATT_PER_BTU_PER_HOUR / 1_000_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_conversions_agree_within_a_percent() {
        let q = 1.0e8;
        let a = btu_per_hour_to_mw(q);
        let b = btu_per_hour_to_mw_via_watts(q);
        assert!(((a - b) / a).abs() < 0.01, "a={a} b={b}");
    }
}
