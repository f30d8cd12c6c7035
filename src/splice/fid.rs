use tracing::debug;

use super::{require_positive, Parameter, SpliceError};

/// 풀 피드 길이 = 로프 직경 × 21 (Samson 튜블러 피드 규격).
pub const FULL_FID_DIAMETERS: f64 = 21.0;
pub const HALF_FID_DIAMETERS: f64 = 10.5;
pub const LONG_FID_DIAMETERS: f64 = 14.0;

/// 피드 길이 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FidLength {
    pub full_length: f64,
    pub short_section: f64,
}

/// 피드의 표시 지점별 길이.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FidSections {
    pub short_section: f64,
    pub half_length: f64,
    pub long_length: f64,
    pub full_length: f64,
}

/// 직경 구간별 숏 섹션 비율.
pub fn short_section_fraction(rope_diameter: f64) -> f64 {
    if rope_diameter <= 0.5 {
        0.375
    } else if rope_diameter <= 0.75 {
        0.3
    } else {
        0.25
    }
}

/// 피드 전체 길이와 숏 섹션 길이를 계산한다.
pub fn fid_length(rope_diameter: f64) -> Result<FidLength, SpliceError> {
    let rope_diameter = require_positive(Parameter::RopeDiameter, rope_diameter)?;
    let full_length = rope_diameter * FULL_FID_DIAMETERS;
    let short_section = full_length * short_section_fraction(rope_diameter);
    debug!(rope_diameter, full_length, short_section, "fid length");
    Ok(FidLength {
        full_length,
        short_section,
    })
}

/// 숏/하프/롱/풀 지점을 모두 계산한다.
pub fn fid_sections(rope_diameter: f64) -> Result<FidSections, SpliceError> {
    let FidLength {
        full_length,
        short_section,
    } = fid_length(rope_diameter)?;
    Ok(FidSections {
        short_section,
        half_length: rope_diameter * HALF_FID_DIAMETERS,
        long_length: rope_diameter * LONG_FID_DIAMETERS,
        full_length,
    })
}
