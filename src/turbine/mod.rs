//! 가스터빈 사이클 계산 모듈 모음.
//! 증발식 냉각기, 압축기, 연소기(물 분사 포함), 터빈 팽창, 사이클 합성, 온도 스윕으로 구성한다.

pub mod combustor;
pub mod compressor;
pub mod cycle;
pub mod design;
pub mod evap_cooler;
pub mod expander;
pub mod sweep;

pub use cycle::{evaluate_cycle, evaluate_cycle_detailed, CycleResult, CycleStates};
pub use design::DesignParameters;
pub use sweep::{sweep, SweepPoint, SweepRange, SweepSeries};
