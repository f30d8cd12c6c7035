use std::f64::consts::PI;

use tracing::{debug, warn};

use super::{require_positive, Parameter, SpliceError};

/// 꼬리 한쪽에 필요한 로프 직경 배수.
pub const TAIL_DIAMETERS: f64 = 30.0;
/// 꼬리를 줄일 때 두 꼬리 끝 사이에 남기는 간격 (로프 직경 배수).
pub const TAIL_GAP_DIAMETERS: f64 = 3.0;

/// 그로그 슬링 입력.
#[derive(Debug, Clone, Copy)]
pub struct GrogSlingInput {
    pub rope_diameter: f64,
    /// 완성된 슬링의 반경
    pub sling_radius: f64,
}

/// 그로그 슬링 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrogSlingResult {
    pub total_length: f64,
    pub sling_circumference: f64,
    /// 꼬리 한쪽 길이
    pub tail_length: f64,
    /// true면 두 꼬리가 겹치지 않도록 꼬리 길이를 줄였음을 의미한다.
    pub tail_clamped: bool,
}

/// 그로그 슬링 소요 길이를 계산한다.
///
/// 두 꼬리 합이 둘레를 넘으면 꼬리를 `둘레/2 - 3d` (최소 0)로 제한한다.
pub fn grog_sling(input: GrogSlingInput) -> Result<GrogSlingResult, SpliceError> {
    let rope_diameter = require_positive(Parameter::RopeDiameter, input.rope_diameter)?;
    let sling_radius = require_positive(Parameter::SlingRadius, input.sling_radius)?;

    let sling_circumference = 2.0 * PI * sling_radius;
    let mut tail_length = rope_diameter * TAIL_DIAMETERS;
    let tail_clamped = tail_length * 2.0 > sling_circumference;
    if tail_clamped {
        let limit = (sling_circumference / 2.0 - rope_diameter * TAIL_GAP_DIAMETERS).max(0.0);
        warn!(
            requested = tail_length,
            limit, "grog sling tails overlap, clamping tail length"
        );
        tail_length = limit;
    }
    let total_length = tail_length * 2.0 + sling_circumference;

    debug!(rope_diameter, sling_radius, total_length, "grog sling");
    Ok(GrogSlingResult {
        total_length,
        sling_circumference,
        tail_length,
        tail_clamped,
    })
}
