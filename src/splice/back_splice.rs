use tracing::debug;

use super::{require_positive, Parameter, SpliceError};

/// 백 스플라이스에 필요한 길이 배수 (ABOK #2813).
pub const BACK_SPLICE_DIAMETERS: f64 = 15.0;

/// 백 스플라이스 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackSpliceResult {
    /// 스플라이스에 소요되는 로프 길이
    pub length: f64,
}

/// 꼬임 로프의 백 스플라이스 소요 길이를 계산한다.
pub fn back_splice(rope_diameter: f64) -> Result<BackSpliceResult, SpliceError> {
    let rope_diameter = require_positive(Parameter::RopeDiameter, rope_diameter)?;
    let length = rope_diameter * BACK_SPLICE_DIAMETERS;
    debug!(rope_diameter, length, "back splice");
    Ok(BackSpliceResult { length })
}
