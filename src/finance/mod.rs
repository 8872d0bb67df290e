//! 손익분기/ROI 등 금액 계산 모듈 모음.

pub mod break_even;
pub mod roi;

pub use break_even::*;
pub use roi::*;
