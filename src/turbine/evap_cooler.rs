use crate::units::Fahrenheit;

/// 증발식 냉각기 통과 후 압축기 입구 온도를 계산한다.
///
/// T1 = -η·(Tdb - Twb)/100 + Tdb. 건구 온도가 습구 온도보다 낮으면 입구 온도가 오히려 올라간다.
pub fn cooled_inlet_temperature(
    dry_bulb: Fahrenheit,
    wet_bulb: Fahrenheit,
    effectiveness: f64,
) -> Fahrenheit {
    let tdb = dry_bulb.value();
    let twb = wet_bulb.value();
    Fahrenheit(-effectiveness * (tdb - twb) / 100.0 + tdb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cools_by_scaled_depression() {
        let t1 = cooled_inlet_temperature(Fahrenheit(98.0), Fahrenheit(88.0), 0.8);
        assert!((t1.value() - 97.92).abs() < 1e-9);
    }

    #[test]
    fn no_change_at_saturation() {
        let t1 = cooled_inlet_temperature(Fahrenheit(88.0), Fahrenheit(88.0), 0.8);
        assert_eq!(t1, Fahrenheit(88.0));
    }
}
