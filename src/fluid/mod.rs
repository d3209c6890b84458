//! 작동유체 물성 계산 모듈 모음.

pub mod properties;

pub use properties::{density, specific_heat};
