//! 핵심 계산 로직을 라이브러리로 분리하여 CLI 와 GUI 가 같은 코어를 쓰도록 한다.

pub mod app;
pub mod config;
pub mod fluid;
pub mod i18n;
pub mod turbine;
pub mod ui_cli;
pub mod units;

pub use fluid::{density, specific_heat};
pub use turbine::{evaluate_cycle, evaluate_cycle_detailed, CycleResult, DesignParameters};
pub use units::Fahrenheit;
