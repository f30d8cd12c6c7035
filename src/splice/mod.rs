//! 스플라이스/피팅별 로프 소요 길이 계산 모듈 모음.
//!
//! 모든 함수는 입력 직경과 같은 길이 단위로 결과를 돌려주는 순수 함수이다.

pub mod back_splice;
pub mod chain_splice;
pub mod eye_splice;
pub mod fid;
pub mod fid_table;
pub mod grog_sling;

pub use back_splice::*;
pub use chain_splice::*;
pub use eye_splice::*;
pub use fid::*;
pub use grog_sling::*;

use std::fmt;

use thiserror::Error;

/// 검증 대상 입력 항목.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parameter {
    RopeDiameter,
    EyeRadius,
    ChainDiameter,
    SlingRadius,
    TuckCount,
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Parameter::RopeDiameter => "rope diameter",
            Parameter::EyeRadius => "eye radius",
            Parameter::ChainDiameter => "chain link diameter",
            Parameter::SlingRadius => "sling radius",
            Parameter::TuckCount => "tuck count",
        };
        f.write_str(name)
    }
}

/// 입력값이 거부된 이유.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Problem {
    NotPositive,
    Negative,
    NotWhole,
    NotFinite,
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Problem::NotPositive => "must be greater than zero",
            Problem::Negative => "must not be negative",
            Problem::NotWhole => "must be a whole number",
            Problem::NotFinite => "must be a finite number",
        };
        f.write_str(text)
    }
}

/// 스플라이스 계산 오류. 입력 검증 실패만 존재한다.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SpliceError {
    #[error("invalid input: {parameter} {problem} (got {value})")]
    InvalidInput {
        parameter: Parameter,
        problem: Problem,
        value: f64,
    },
}

impl SpliceError {
    fn invalid(parameter: Parameter, problem: Problem, value: f64) -> Self {
        SpliceError::InvalidInput {
            parameter,
            problem,
            value,
        }
    }
}

/// 직경/반경처럼 0보다 커야 하는 길이를 검증한다.
pub fn require_positive(parameter: Parameter, value: f64) -> Result<f64, SpliceError> {
    if !value.is_finite() {
        return Err(SpliceError::invalid(parameter, Problem::NotFinite, value));
    }
    if value <= 0.0 {
        return Err(SpliceError::invalid(parameter, Problem::NotPositive, value));
    }
    Ok(value)
}

/// 실수로 입력된 턱/버리 횟수를 정수로 변환한다. 0은 허용한다.
pub fn count_from_f64(parameter: Parameter, value: f64) -> Result<u32, SpliceError> {
    if !value.is_finite() {
        return Err(SpliceError::invalid(parameter, Problem::NotFinite, value));
    }
    if value < 0.0 {
        return Err(SpliceError::invalid(parameter, Problem::Negative, value));
    }
    if value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return Err(SpliceError::invalid(parameter, Problem::NotWhole, value));
    }
    Ok(value as u32)
}
