//! 단위 정의 및 변환 모듈 모음. 계산식이 필요로 하는 범위만 다룬다.

pub mod energy;
pub mod temperature;

pub use energy::{btu_per_hour_to_mw, btu_per_hour_to_mw_via_watts};
pub use temperature::{
    convert_temperature, Fahrenheit, Kelvin, Rankine, TemperatureUnit,
    COMPRESSOR_WORK_RANKINE_OFFSET, CYCLE_RANKINE_OFFSET,
};
