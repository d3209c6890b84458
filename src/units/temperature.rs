use serde::{Deserialize, Serialize};

/// 사이클 계산식에서 °F → °R 환산에 쓰는 오프셋.
///
/// 물리적인 값은 459.67 이지만, 기준 성능 데이터가 460.67 로 맞춰져 있으므로 그대로 둔다.
pub const CYCLE_RANKINE_OFFSET: f64 = 460.67;

/// 압축기 소요동력 식에서만 쓰이는 °F → °R 오프셋.
///
/// 다른 단계(460.67)와 어긋나지만 기준 성능 데이터 재현을 위해 유지한다.
pub const COMPRESSOR_WORK_RANKINE_OFFSET: f64 = 460.0;

/// 입력 온도 단위를 정의한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Kelvin,
    Celsius,
    Fahrenheit,
    Rankine,
}

impl TemperatureUnit {
    /// 화면 표시용 기호.
    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureUnit::Kelvin => "K",
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
            TemperatureUnit::Rankine => "°R",
        }
    }
}

/// 주어진 값을 켈빈으로 변환한다.
pub fn to_kelvin(value: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Kelvin => value,
        TemperatureUnit::Celsius => value + 273.15,
        TemperatureUnit::Fahrenheit => (value + 459.67) * 5.0 / 9.0,
        TemperatureUnit::Rankine => value * 5.0 / 9.0,
    }
}

/// 켈빈 값을 원하는 단위로 변환한다.
pub fn from_kelvin(value_k: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Kelvin => value_k,
        TemperatureUnit::Celsius => value_k - 273.15,
        TemperatureUnit::Fahrenheit => value_k * 9.0 / 5.0 - 459.67,
        TemperatureUnit::Rankine => value_k * 9.0 / 5.0,
    }
}

/// 온도를 서로 다른 단위로 변환한다.
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    if from == to {
        return value;
    }
    let k = to_kelvin(value, from);
    from_kelvin(k, to)
}

/// 화씨 온도 [°F]. 코어 계산의 공개 입력 단위.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Fahrenheit(pub f64);

/// 랭킨 절대온도 [°R]. 사이클 계산식의 오프셋 규약을 따른다.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Rankine(pub f64);

/// 켈빈 절대온도 [K]. 물성 다항식은 반드시 이 척도로 평가한다.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Kelvin(pub f64);

impl Fahrenheit {
    /// 임의 단위의 값을 화씨로 변환해 감싼다.
    pub fn from_unit(value: f64, unit: TemperatureUnit) -> Self {
        Fahrenheit(convert_temperature(value, unit, TemperatureUnit::Fahrenheit))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// 물성 다항식용 켈빈 환산: (F - 32) * 5/9 + 273.15
    pub fn to_kelvin(self) -> Kelvin {
        Kelvin((self.0 - 32.0) * (5.0 / 9.0) + 273.15)
    }

    /// 사이클 규약(460.67)에 따른 랭킨 환산.
    pub fn to_rankine(self) -> Rankine {
        Rankine(self.0 + CYCLE_RANKINE_OFFSET)
    }

    /// 지정한 오프셋으로 랭킨 환산한다. 압축기 동력식 전용.
    pub fn to_rankine_with_offset(self, offset: f64) -> Rankine {
        Rankine(self.0 + offset)
    }
}

impl Rankine {
    pub fn value(self) -> f64 {
        self.0
    }

    /// 사이클 규약(460.67)에 따라 화씨로 되돌린다.
    pub fn to_fahrenheit(self) -> Fahrenheit {
        Fahrenheit(self.0 - CYCLE_RANKINE_OFFSET)
    }
}

impl Kelvin {
    pub fn value(self) -> f64 {
        self.0
    }

    /// 두 켈빈 온도의 산술 평균.
    pub fn mean(a: Kelvin, b: Kelvin) -> Kelvin {
        Kelvin((a.0 + b.0) / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn freezing_point_is_273_15_kelvin() {
        assert!((Fahrenheit(32.0).to_kelvin().value() - 273.15).abs() < 1e-12);
    }

    #[test]
    fn cycle_rankine_round_trips() {
        let t = Fahrenheit(1100.0);
        assert!((t.to_rankine().value() - 1560.67).abs() < 1e-9);
        assert!((t.to_rankine().to_fahrenheit().value() - 1100.0).abs() < 1e-9);
    }

    #[test]
    fn compressor_offset_differs_by_one_degree() {
        let t = Fahrenheit(80.0);
        let diff = t.to_rankine().value()
            - t.to_rankine_with_offset(COMPRESSOR_WORK_RANKINE_OFFSET).value();
        assert!((diff - 0.67).abs() < 1e-9);
    }

    #[test]
    fn celsius_input_converts_to_fahrenheit() {
        let t = Fahrenheit::from_unit(100.0, TemperatureUnit::Celsius);
        assert!((t.value() - 212.0).abs() < 1e-9);
    }
}
